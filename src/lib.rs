//! topoclick crate root: re-exports and module wiring.
//!
//! An interactive EEG electrode explorer built on egui/eframe: a scalp
//! topography with clickable electrodes, a time slider, and a comparison plot
//! of the selected channels' waveforms.
//!
//! The crate is split into cohesive modules:
//! - `data`: dataset, traces, selection, time cursor, topomap math, descriptions
//! - `controller`: the pure event -> (state, render commands) dispatcher
//! - `render`: render commands and the surface trait panels implement
//! - `events`: user input events
//! - `config`: viewer configuration and its YAML mirror
//! - `panels` / `app`: the egui views and the eframe application

pub mod app;
pub mod color_scheme;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod events;
pub mod panels;
pub mod render;

// Public re-exports for a compact external API
pub use app::{run_viewer, TopoApp};
pub use color_scheme::{ColorScheme, Palette, UNSELECTED_COLOR};
pub use config::{FeatureFlags, Hotkeys, TopomapSettings, ViewerConfig, ViewerConfigFile};
pub use controller::{ElectrodeController, ViewerState};
pub use data::dataset::{AmplitudeSource, Channel, Dataset};
pub use data::dataset_file::{load_dataset, save_dataset, DatasetFile};
pub use data::demo::demo_dataset;
pub use error::{ConfigError, DatasetError, DatasetFileError};
pub use events::ViewerEvent;
pub use render::{RecordingSurface, RenderCommand, RenderSurface};
