pub mod comparison_ui;
pub mod descriptions_ui;
pub mod panel_trait;
pub mod time_slider_ui;
pub mod topomap_ui;

pub use comparison_ui::ComparisonPanel;
pub use descriptions_ui::DescriptionsPanel;
pub use panel_trait::{Panel, PanelState};
pub use time_slider_ui::TimeSliderPanel;
pub use topomap_ui::TopomapPanel;
