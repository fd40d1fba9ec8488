//! Electrode selection controller.
//!
//! [`ElectrodeController::dispatch`] is the single entry point for user input:
//! it takes the current [`ViewerState`] and a [`ViewerEvent`] and returns the
//! next state together with the render commands that bring every view in line
//! with it. It never touches a GUI, so the whole interaction model can be
//! driven headless.

use std::sync::Arc;

use eframe::egui::Color32;

use crate::color_scheme::{Palette, UNSELECTED_COLOR};
use crate::data::cursor::{format_time_label, TimeCursor};
use crate::data::dataset::Dataset;
use crate::data::descriptions::description_rows;
use crate::data::selection::{SelectionState, Toggled};
use crate::events::ViewerEvent;
use crate::render::{
    ComparisonFrame, FieldFrame, RenderCommand, RenderSurface, StimulusDecoration, TracePlot,
    NO_SELECTION_TEXT,
};

/// Mutable interaction state, owned by whoever drives the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerState {
    pub selection: SelectionState,
    pub cursor: TimeCursor,
}

impl ViewerState {
    /// Empty selection, cursor at the first sample.
    pub fn new(dataset: &Dataset) -> Self {
        Self {
            selection: SelectionState::new(),
            cursor: TimeCursor::for_dataset(dataset),
        }
    }

    /// Empty selection, cursor at `index` (clamped).
    pub fn with_cursor(dataset: &Dataset, index: usize) -> Self {
        Self {
            selection: SelectionState::new(),
            cursor: TimeCursor::new(dataset.time_len(), index),
        }
    }
}

pub struct ElectrodeController {
    dataset: Arc<Dataset>,
    palette: Palette,
    unselected: Color32,
}

impl ElectrodeController {
    pub fn new(dataset: Arc<Dataset>, palette: Palette) -> Self {
        Self {
            dataset,
            palette,
            unselected: UNSELECTED_COLOR,
        }
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Color of the channel at `index` when selected.
    pub fn color_of(&self, index: usize) -> Color32 {
        self.palette.color_of(index)
    }

    /// Apply one event. Ignored events return the state untouched and no commands.
    pub fn dispatch(
        &self,
        mut state: ViewerState,
        event: ViewerEvent,
    ) -> (ViewerState, Vec<RenderCommand>) {
        let commands = match &event {
            ViewerEvent::MarkerPicked(index) => {
                let toggled = state.selection.toggle(&self.dataset, *index);
                self.after_toggle(&state, &event, toggled)
            }
            ViewerEvent::ChannelPicked(name) => {
                let toggled = state.selection.toggle_by_name(&self.dataset, name);
                self.after_toggle(&state, &event, toggled)
            }
            ViewerEvent::TimeCursorMoved(index) => {
                if *index > state.cursor.max_index() {
                    log::debug!(
                        "clamping time index {index} to {}",
                        state.cursor.max_index()
                    );
                }
                if state.cursor.set(*index) {
                    self.cursor_frame(&state)
                } else {
                    Vec::new()
                }
            }
            ViewerEvent::TimeCursorStepped(delta) => {
                if state.cursor.step(*delta) {
                    self.cursor_frame(&state)
                } else {
                    Vec::new()
                }
            }
        };
        (state, commands)
    }

    /// Dispatch and forward the resulting commands to `surface`.
    ///
    /// Returns `true` when anything was redrawn.
    pub fn handle(
        &self,
        state: &mut ViewerState,
        event: ViewerEvent,
        surface: &mut dyn RenderSurface,
    ) -> bool {
        let placeholder = ViewerState::new(&self.dataset);
        let (next, commands) = self.dispatch(std::mem::replace(state, placeholder), event);
        *state = next;
        for c in &commands {
            surface.apply(c);
        }
        !commands.is_empty()
    }

    fn after_toggle(
        &self,
        state: &ViewerState,
        event: &ViewerEvent,
        toggled: Option<Toggled>,
    ) -> Vec<RenderCommand> {
        match toggled {
            Some(t) => {
                log::debug!("{event}: {t:?}, {} selected", state.selection.len());
                self.selection_frame(state)
            }
            None => {
                log::warn!("ignoring {event}: no such channel");
                Vec::new()
            }
        }
    }

    /// Every command needed for the first paint.
    pub fn initial_frame(&self, state: &ViewerState) -> Vec<RenderCommand> {
        vec![
            RenderCommand::SpatialField(self.field_frame(state)),
            RenderCommand::MarkerColors(self.marker_colors(state)),
            RenderCommand::Comparison(self.comparison_frame(state)),
            RenderCommand::Descriptions(description_rows(&self.dataset, &state.selection)),
            RenderCommand::TimeLabel(format_time_label(state.cursor.time(&self.dataset))),
        ]
    }

    fn selection_frame(&self, state: &ViewerState) -> Vec<RenderCommand> {
        vec![
            RenderCommand::SpatialField(self.field_frame(state)),
            RenderCommand::MarkerColors(self.marker_colors(state)),
            RenderCommand::Comparison(self.comparison_frame(state)),
            RenderCommand::Descriptions(description_rows(&self.dataset, &state.selection)),
        ]
    }

    fn cursor_frame(&self, state: &ViewerState) -> Vec<RenderCommand> {
        let t = state.cursor.time(&self.dataset);
        vec![
            RenderCommand::SpatialField(self.field_frame(state)),
            RenderCommand::MarkerColors(self.marker_colors(state)),
            RenderCommand::ComparisonCursor(t),
            RenderCommand::TimeLabel(format_time_label(t)),
        ]
    }

    pub fn field_frame(&self, state: &ViewerState) -> FieldFrame {
        let time_index = state.cursor.index();
        FieldFrame {
            time_index,
            time: state.cursor.time(&self.dataset),
            values: self.dataset.field_at(time_index).unwrap_or_default(),
        }
    }

    /// Marker fill colors in channel-list order.
    pub fn marker_colors(&self, state: &ViewerState) -> Vec<Color32> {
        (0..self.dataset.channel_count())
            .map(|i| {
                if state.selection.is_selected(i) {
                    self.palette.color_of(i)
                } else {
                    self.unselected
                }
            })
            .collect()
    }

    pub fn comparison_frame(&self, state: &ViewerState) -> ComparisonFrame {
        let traces: Vec<TracePlot> = state
            .selection
            .traces()
            .map(|(i, trace)| TracePlot {
                label: trace.channel.clone(),
                color: self.palette.color_of(i),
                trace: trace.clone(),
            })
            .collect();
        let placeholder = traces.is_empty().then(|| NO_SELECTION_TEXT.to_string());
        let (first, last) = self.dataset.time_span();
        ComparisonFrame {
            traces,
            placeholder,
            decoration: StimulusDecoration::for_span(first, last),
            cursor_time: state.cursor.time(&self.dataset),
        }
    }
}
