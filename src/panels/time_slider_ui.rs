//! Time slider under the views.

use egui::{Slider, Ui};
use egui_phosphor::regular::{CARET_DOUBLE_LEFT, CARET_DOUBLE_RIGHT, CARET_LEFT, CARET_RIGHT};

use super::panel_trait::{Panel, PanelState};
use crate::config::Hotkeys;
use crate::events::ViewerEvent;
use crate::render::{RenderCommand, RenderSurface};

pub struct TimeSliderPanel {
    state: PanelState,
    index: usize,
    max_index: usize,
    label: String,
    steps: Hotkeys,
}

impl TimeSliderPanel {
    pub fn new(time_len: usize, steps: Hotkeys) -> Self {
        Self {
            state: PanelState::default(),
            index: 0,
            max_index: time_len.saturating_sub(1),
            label: String::new(),
            steps,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl RenderSurface for TimeSliderPanel {
    fn apply(&mut self, command: &RenderCommand) {
        match command {
            RenderCommand::SpatialField(frame) => self.index = frame.time_index,
            RenderCommand::TimeLabel(text) => self.label = text.clone(),
            _ => {}
        }
    }
}

impl Panel for TimeSliderPanel {
    fn name(&self) -> &'static str {
        "Time"
    }
    fn state(&self) -> &PanelState {
        &self.state
    }
    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, events: &mut Vec<ViewerEvent>) {
        ui.horizontal(|ui| {
            if ui.button(CARET_DOUBLE_LEFT).on_hover_text("Step back (coarse)").clicked() {
                events.push(ViewerEvent::TimeCursorStepped(self.steps.delta(true, false)));
            }
            if ui.button(CARET_LEFT).on_hover_text("Step back").clicked() {
                events.push(ViewerEvent::TimeCursorStepped(self.steps.delta(false, false)));
            }

            let mut idx = self.index;
            let label_w = 120.0;
            let buttons_w = 80.0;
            ui.spacing_mut().slider_width = (ui.available_width() - label_w - buttons_w).max(100.0);
            let resp = ui.add(Slider::new(&mut idx, 0..=self.max_index).show_value(false));
            if resp.changed() && idx != self.index {
                events.push(ViewerEvent::TimeCursorMoved(idx));
            }

            if ui.button(CARET_RIGHT).on_hover_text("Step forward").clicked() {
                events.push(ViewerEvent::TimeCursorStepped(self.steps.delta(false, true)));
            }
            if ui.button(CARET_DOUBLE_RIGHT).on_hover_text("Step forward (coarse)").clicked() {
                events.push(ViewerEvent::TimeCursorStepped(self.steps.delta(true, true)));
            }
            ui.monospace(&self.label);
        });
    }
}
