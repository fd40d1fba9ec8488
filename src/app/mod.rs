//! Viewer application.
//!
//! | Sub-module   | Responsibility |
//! | ------------ | -------------- |
//! | [`topo_app`] | [`TopoApp`] (eframe) owning the controller, the state and the panels |
//! | [`run`]      | Top-level [`run_viewer()`] entry point and icon loading |

mod run;
mod topo_app;

pub use run::run_viewer;
pub use topo_app::TopoApp;
