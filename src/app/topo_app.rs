//! Standalone viewer application.
//!
//! [`TopoApp`] owns the [`ElectrodeController`], the current [`ViewerState`]
//! and one panel per view. Panels report user input as [`ViewerEvent`]s; at the
//! end of every frame the app dispatches them in order and routes the
//! resulting render commands to all panels before the next paint.

use std::collections::HashMap;
use std::sync::Arc;

use eframe::egui;

use crate::color_scheme::ColorScheme;
use crate::config::{Hotkeys, ViewerConfig};
use crate::controller::{ElectrodeController, ViewerState};
use crate::data::cursor::nearest_time_index;
use crate::data::dataset::Dataset;
use crate::events::ViewerEvent;
use crate::panels::{
    ComparisonPanel, DescriptionsPanel, Panel, TimeSliderPanel, TopomapPanel,
};
use crate::render::{RenderCommand, RenderSurface};

// ─────────────────────────────────────────────────────────────────────────────
// TopoApp
// ─────────────────────────────────────────────────────────────────────────────

pub struct TopoApp {
    controller: ElectrodeController,
    state: ViewerState,

    pub topomap: TopomapPanel,
    pub comparison: ComparisonPanel,
    pub descriptions: DescriptionsPanel,
    pub time_slider: TimeSliderPanel,

    /// Optional heading text shown at the top of the window.
    pub headline: Option<String>,
    /// Optional sub-heading text shown below the headline.
    pub subheadline: Option<String>,

    hotkeys: Hotkeys,
    color_scheme: ColorScheme,
    /// Flag so we only apply the color scheme when it changes.
    color_scheme_applied: bool,
    /// Events collected during the current frame.
    pending: Vec<ViewerEvent>,
}

impl TopoApp {
    /// Build the app and draw the initial frame into every panel.
    pub fn new(dataset: Arc<Dataset>, cfg: &ViewerConfig) -> Self {
        let controller = ElectrodeController::new(dataset.clone(), cfg.palette.clone());
        let state = match cfg.initial_time {
            Some(t) => ViewerState::with_cursor(&dataset, nearest_time_index(dataset.times(), t)),
            None => ViewerState::new(&dataset),
        };

        let colors: HashMap<String, egui::Color32> = dataset
            .channels()
            .iter()
            .enumerate()
            .map(|(i, c)| (c.name.clone(), controller.color_of(i)))
            .collect();

        let mut descriptions = DescriptionsPanel::new(colors);
        descriptions.state_mut().visible = cfg.features.descriptions;

        let mut app = Self {
            topomap: TopomapPanel::new(
                &dataset,
                cfg.topomap.clone(),
                &cfg.features,
                cfg.color_scheme.outline_color(),
            ),
            comparison: ComparisonPanel::new(&cfg.features, cfg.y_unit.clone(), dataset.value_range()),
            descriptions,
            time_slider: TimeSliderPanel::new(dataset.time_len(), cfg.hotkeys.clone()),
            headline: cfg.headline.clone(),
            subheadline: cfg.subheadline.clone(),
            hotkeys: cfg.hotkeys.clone(),
            color_scheme: cfg.color_scheme.clone(),
            color_scheme_applied: false,
            pending: Vec::new(),
            controller,
            state,
        };
        let initial = app.controller.initial_frame(&app.state);
        app.route(&initial);
        log::info!(
            "viewer ready: {} channels, {} samples, {}",
            dataset.channel_count(),
            dataset.time_len(),
            match dataset.epoch_count() {
                Some(n) => format!("{n} epochs"),
                None => "averaged".to_string(),
            }
        );
        app
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn controller(&self) -> &ElectrodeController {
        &self.controller
    }

    /// Dispatch one event and route its commands to every panel.
    ///
    /// Returns `true` when any view changed.
    pub fn dispatch(&mut self, event: ViewerEvent) -> bool {
        let placeholder = ViewerState::new(self.controller.dataset());
        let (next, commands) = self
            .controller
            .dispatch(std::mem::replace(&mut self.state, placeholder), event);
        self.state = next;
        self.route(&commands);
        !commands.is_empty()
    }

    fn route(&mut self, commands: &[RenderCommand]) {
        for c in commands {
            self.topomap.apply(c);
            self.comparison.apply(c);
            self.descriptions.apply(c);
            self.time_slider.apply(c);
        }
    }

    fn set_color_scheme(&mut self, scheme: ColorScheme) {
        if scheme != self.color_scheme {
            self.color_scheme = scheme;
            self.color_scheme_applied = false;
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Input
    // ─────────────────────────────────────────────────────────────────────────

    /// Keyboard stepping of the time cursor. Consumes the keys it handles.
    pub fn read_hotkeys(&self, ctx: &egui::Context) -> Vec<ViewerEvent> {
        use egui::{Key, Modifiers};
        let hk = &self.hotkeys;
        let last = self.state.cursor.max_index();
        let mut events = Vec::new();
        ctx.input_mut(|i| {
            if i.consume_key(Modifiers::SHIFT, Key::ArrowLeft) {
                events.push(ViewerEvent::TimeCursorStepped(hk.delta(true, false)));
            }
            if i.consume_key(Modifiers::SHIFT, Key::ArrowRight) {
                events.push(ViewerEvent::TimeCursorStepped(hk.delta(true, true)));
            }
            if i.consume_key(Modifiers::NONE, Key::ArrowLeft) {
                events.push(ViewerEvent::TimeCursorStepped(hk.delta(false, false)));
            }
            if i.consume_key(Modifiers::NONE, Key::ArrowRight) {
                events.push(ViewerEvent::TimeCursorStepped(hk.delta(false, true)));
            }
            if i.consume_key(Modifiers::NONE, Key::Home) {
                events.push(ViewerEvent::TimeCursorMoved(0));
            }
            if i.consume_key(Modifiers::NONE, Key::End) {
                events.push(ViewerEvent::TimeCursorMoved(last));
            }
        });
        events
    }

    fn render_menu(&mut self, ui: &mut egui::Ui) {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Quit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
            ui.menu_button("Electrodes", |ui| {
                let names: Vec<String> = self
                    .controller
                    .dataset()
                    .channels()
                    .iter()
                    .map(|c| c.name.clone())
                    .collect();
                for name in names {
                    let selected = self.state.selection.is_selected_name(&name);
                    if ui.selectable_label(selected, &name).clicked() {
                        self.pending.push(ViewerEvent::ChannelPicked(name));
                    }
                }
            });
            ui.menu_button("View", |ui| {
                let name = self.descriptions.name();
                ui.checkbox(&mut self.descriptions.state_mut().visible, name);
                ui.separator();
                let mut scheme = self.color_scheme.clone();
                for s in ColorScheme::all() {
                    ui.radio_value(&mut scheme, s.clone(), s.label());
                }
                self.set_color_scheme(scheme);
            });
        });
    }
}

impl eframe::App for TopoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.color_scheme_applied {
            self.color_scheme.apply(ctx);
            self.topomap.set_outline_color(self.color_scheme.outline_color());
            self.color_scheme_applied = true;
        }

        let hotkey_events = self.read_hotkeys(ctx);
        self.pending.extend(hotkey_events);

        egui::TopBottomPanel::top("topoclick_menu").show(ctx, |ui| {
            self.render_menu(ui);
            if let Some(h) = &self.headline {
                ui.heading(h);
            }
            if let Some(sub) = &self.subheadline {
                ui.label(sub);
            }
        });

        let mut events = std::mem::take(&mut self.pending);

        egui::TopBottomPanel::bottom("topoclick_time").show(ctx, |ui| {
            ui.add_space(4.0);
            self.time_slider.render_panel(ui, &mut events);
            ui.add_space(4.0);
        });

        if self.descriptions.state().visible {
            egui::SidePanel::right("topoclick_descriptions")
                .default_width(360.0)
                .show(ctx, |ui| {
                    self.descriptions.render_panel(ui, &mut events);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |cols| {
                self.topomap.render_panel(&mut cols[0], &mut events);
                self.comparison.render_panel(&mut cols[1], &mut events);
            });
        });

        let mut changed = false;
        for e in events {
            changed |= self.dispatch(e);
        }
        if changed {
            ctx.request_repaint();
        }
    }
}
