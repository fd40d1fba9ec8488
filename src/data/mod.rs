//! GUI-free model: dataset, selection, time cursor, traces and topography math.

pub mod cursor;
pub mod dataset;
pub mod dataset_file;
pub mod demo;
pub mod descriptions;
pub mod selection;
pub mod topomap;
pub mod trace;
