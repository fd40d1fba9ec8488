//! Comparison panel: mean waveform (and ±1 SD band) of every selected channel.

use egui::{Color32, Context, Id, RichText, Stroke, Ui};
use egui_plot::{Legend, Line, LineStyle, Plot, PlotMemory, PlotPoint, Polygon, Text, VLine};

use super::panel_trait::{Panel, PanelState};
use crate::config::FeatureFlags;
use crate::events::ViewerEvent;
use crate::render::{ComparisonFrame, RenderCommand, RenderSurface};

const PRE_STIMULUS_FILL: Color32 = Color32::from_rgba_premultiplied(40, 60, 90, 40);
const POST_STIMULUS_FILL: Color32 = Color32::from_rgba_premultiplied(90, 50, 40, 40);
const STIMULUS_COLOR: Color32 = Color32::from_rgb(220, 50, 47);

pub struct ComparisonPanel {
    state: PanelState,
    frame: Option<ComparisonFrame>,
    features: FeatureFlags,
    y_unit: String,
    /// Value range of the whole dataset, used while nothing is plotted.
    default_extent: (f64, f64),
}

impl ComparisonPanel {
    pub fn new(features: &FeatureFlags, y_unit: impl Into<String>, default_extent: (f64, f64)) -> Self {
        Self {
            state: PanelState::default(),
            frame: None,
            features: features.clone(),
            y_unit: y_unit.into(),
            default_extent,
        }
    }

    /// Contents currently drawn.
    pub fn frame(&self) -> Option<&ComparisonFrame> {
        self.frame.as_ref()
    }

    /// Id of the plot; its [`PlotMemory`] lives under this id.
    pub fn plot_id() -> Id {
        Id::new("topoclick_comparison_plot")
    }

    /// A legend click hides the plot item of that channel. Turn every hidden
    /// trace into a deselection and clear the hidden set, so the plot draws
    /// exactly the selected channels.
    fn release_hidden_traces(&self, ctx: &Context, events: &mut Vec<ViewerEvent>) {
        let id = Self::plot_id();
        let Some(mut mem) = PlotMemory::load(ctx, id) else {
            return;
        };
        if mem.hidden_items.is_empty() {
            return;
        }
        if let Some(frame) = &self.frame {
            for tp in &frame.traces {
                if mem.hidden_items.contains(&Id::new(&tp.label)) {
                    log::debug!("legend hid {}, deselecting", tp.label);
                    events.push(ViewerEvent::ChannelPicked(tp.label.clone()));
                }
            }
        }
        mem.hidden_items.clear();
        mem.store(ctx, id);
    }

    fn y_extent(&self, frame: &ComparisonFrame) -> (f64, f64) {
        let extent = frame
            .traces
            .iter()
            .filter_map(|t| {
                if self.features.sd_band {
                    t.trace.value_extent()
                } else {
                    let mut mean_only = t.trace.clone();
                    mean_only.band = None;
                    mean_only.value_extent()
                }
            })
            .reduce(|a, b| (a.0.min(b.0), a.1.max(b.1)))
            .unwrap_or(self.default_extent);
        let pad = ((extent.1 - extent.0) * 0.05).max(1e-12);
        (extent.0 - pad, extent.1 + pad)
    }
}

impl RenderSurface for ComparisonPanel {
    fn apply(&mut self, command: &RenderCommand) {
        match command {
            RenderCommand::Comparison(frame) => self.frame = Some(frame.clone()),
            RenderCommand::ComparisonCursor(t) => {
                if let Some(frame) = self.frame.as_mut() {
                    frame.cursor_time = *t;
                }
            }
            _ => {}
        }
    }
}

impl Panel for ComparisonPanel {
    fn name(&self) -> &'static str {
        "Comparison"
    }
    fn state(&self) -> &PanelState {
        &self.state
    }
    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, events: &mut Vec<ViewerEvent>) {
        let Some(frame) = self.frame.as_ref() else {
            return;
        };
        let (y_min, y_max) = self.y_extent(frame);
        let deco = frame.decoration;
        let features = &self.features;

        let mut plot = Plot::new("comparison_plot")
            .id(Self::plot_id())
            .allow_scroll(false)
            .x_axis_label("Time (s)")
            .y_axis_label(format!("Amplitude ({})", self.y_unit))
            .include_x(deco.pre.0)
            .include_x(deco.post.1)
            .include_y(y_min)
            .include_y(y_max);
        if features.legend && !frame.traces.is_empty() {
            plot = plot.legend(Legend::default());
        }

        plot.show(ui, |plot_ui| {
            if features.stimulus_shading {
                for ((x0, x1), fill) in [(deco.pre, PRE_STIMULUS_FILL), (deco.post, POST_STIMULUS_FILL)] {
                    if x1 > x0 {
                        let span = vec![[x0, y_min], [x1, y_min], [x1, y_max], [x0, y_max]];
                        plot_ui.polygon(Polygon::new("", span).fill_color(fill).stroke(Stroke::NONE));
                    }
                }
            }
            plot_ui.vline(
                VLine::new("", deco.onset)
                    .color(STIMULUS_COLOR)
                    .style(LineStyle::Dashed { length: 6.0 }),
            );

            for tp in &frame.traces {
                if features.sd_band {
                    let fill = tp.color.gamma_multiply(0.2);
                    for quad in tp.trace.band_quads() {
                        plot_ui.polygon(
                            Polygon::new("", quad.to_vec())
                                .fill_color(fill)
                                .stroke(Stroke::NONE),
                        );
                    }
                }
                plot_ui.line(
                    Line::new(tp.label.as_str(), tp.trace.mean_points())
                        .color(tp.color)
                        .width(1.8),
                );
            }

            if let Some(text) = frame.placeholder.as_deref() {
                let mid = PlotPoint::new((deco.pre.0 + deco.post.1) / 2.0, (y_min + y_max) / 2.0);
                plot_ui.text(Text::new(
                    "",
                    mid,
                    RichText::new(text).size(16.0).color(Color32::GRAY),
                ));
            }

            if features.cursor_line {
                plot_ui.vline(
                    VLine::new("", frame.cursor_time)
                        .color(Color32::GRAY)
                        .width(1.5)
                        .style(LineStyle::Dashed { length: 4.0 }),
                );
            }
        });

        self.release_hidden_traces(ui.ctx(), events);
    }
}
