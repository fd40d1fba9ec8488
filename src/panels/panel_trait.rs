use egui::Ui;

use crate::events::ViewerEvent;
use crate::render::RenderSurface;

#[derive(Debug, Clone, Copy)]
pub struct PanelState {
    pub visible: bool,
}

impl Default for PanelState {
    fn default() -> Self {
        Self { visible: true }
    }
}

/// A view of the viewer window.
///
/// Panels receive their data only through [`RenderSurface::apply`] and report
/// user input as [`ViewerEvent`]s; they never change the selection themselves.
pub trait Panel: RenderSurface {
    fn name(&self) -> &'static str;
    fn state(&self) -> &PanelState;
    fn state_mut(&mut self) -> &mut PanelState;

    fn render_panel(&mut self, ui: &mut Ui, events: &mut Vec<ViewerEvent>);
}
