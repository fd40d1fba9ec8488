//! Render commands produced by the controller and consumed by the panels.
//!
//! Commands carry everything a view needs to redraw its data-dependent layer.
//! Fixed elements (axes, head outline, colorbar) are never part of a command,
//! so they stay put across updates.

use eframe::egui::Color32;

use crate::data::descriptions::DescriptionRow;
use crate::data::trace::ChannelTrace;

/// Text shown in the comparison view while nothing is selected.
pub const NO_SELECTION_TEXT: &str = "No electrode selected.";

/// Time slice shown by the spatial view.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFrame {
    pub time_index: usize,
    pub time: f64,
    /// Evoked amplitude per channel at `time_index`, channel-list order.
    pub values: Vec<f64>,
}

/// One plotted channel in the comparison view.
#[derive(Debug, Clone, PartialEq)]
pub struct TracePlot {
    pub label: String,
    pub color: Color32,
    pub trace: ChannelTrace,
}

/// Stimulus-relative decoration of the comparison view's time axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StimulusDecoration {
    /// Stimulus onset (always `0.0` for time-locked epochs).
    pub onset: f64,
    /// Pre-stimulus span `(first time, onset)`.
    pub pre: (f64, f64),
    /// Post-stimulus span `(onset, last time)`.
    pub post: (f64, f64),
}

impl StimulusDecoration {
    pub fn for_span(first: f64, last: f64) -> Self {
        let onset = 0.0;
        Self {
            onset,
            pre: (first, onset.max(first)),
            post: (onset.min(last), last),
        }
    }
}

/// Full contents of the comparison view.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonFrame {
    /// One entry per selected channel, dataset order.
    pub traces: Vec<TracePlot>,
    /// Set exactly when `traces` is empty.
    pub placeholder: Option<String>,
    pub decoration: StimulusDecoration,
    pub cursor_time: f64,
}

impl ComparisonFrame {
    /// Legend entries, which are the trace labels and nothing else.
    pub fn legend(&self) -> Vec<&str> {
        self.traces.iter().map(|t| t.label.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Redraw the scalar field for a time slice.
    SpatialField(FieldFrame),
    /// Fill color of every marker, channel-list order.
    MarkerColors(Vec<Color32>),
    /// Replace the comparison view's traces and legend.
    Comparison(ComparisonFrame),
    /// Move only the current-time line of the comparison view.
    ComparisonCursor(f64),
    /// Replace the description table rows.
    Descriptions(Vec<DescriptionRow>),
    /// Update the time label under the slider.
    TimeLabel(String),
}

/// Anything that can draw render commands.
pub trait RenderSurface {
    fn apply(&mut self, command: &RenderCommand);
}

/// Surface that records commands; useful headless and in tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    pub commands: Vec<RenderCommand>,
}

impl RenderSurface for RecordingSurface {
    fn apply(&mut self, command: &RenderCommand) {
        self.commands.push(command.clone());
    }
}

impl RecordingSurface {
    /// Most recent marker colors, if any were drawn.
    pub fn marker_colors(&self) -> Option<&[Color32]> {
        self.commands.iter().rev().find_map(|c| match c {
            RenderCommand::MarkerColors(colors) => Some(colors.as_slice()),
            _ => None,
        })
    }

    /// Most recent comparison frame, if any was drawn.
    pub fn comparison(&self) -> Option<&ComparisonFrame> {
        self.commands.iter().rev().find_map(|c| match c {
            RenderCommand::Comparison(frame) => Some(frame),
            _ => None,
        })
    }
}
