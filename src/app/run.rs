//! Top-level entry point for running the viewer as a native window.

use std::sync::Arc;

use eframe::egui;

use crate::config::ViewerConfig;
use crate::data::dataset::Dataset;

use super::topo_app::TopoApp;

/// Open the viewer for `dataset` in a native window.
///
/// The call blocks until the window is closed. The dataset is shared
/// read-only for the whole session; selection starts empty.
pub fn run_viewer(dataset: Dataset, mut cfg: ViewerConfig) -> eframe::Result<()> {
    let app = TopoApp::new(Arc::new(dataset), &cfg);

    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    // Try to set application icon from icon.svg if available.
    if opts.viewport.icon.is_none() {
        if let Some(icon) = load_app_icon_svg() {
            opts.viewport = opts.viewport.clone().with_icon(icon);
        }
    }

    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(1400.0, 820.0));
    }

    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}

/// Render `icon.svg` from the crate root into an [`egui::IconData`].
fn load_app_icon_svg() -> Option<egui::IconData> {
    let svg_path = concat!(env!("CARGO_MANIFEST_DIR"), "/icon.svg");
    let data = match std::fs::read(svg_path) {
        Ok(d) => d,
        Err(e) => {
            log::debug!("no window icon ({svg_path}): {e}");
            return None;
        }
    };

    let tree = usvg::Tree::from_data(&data, &usvg::Options::default()).ok()?;
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return None;
    }
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    Some(egui::IconData {
        rgba: pixmap.take(),
        width: size.width(),
        height: size.height(),
    })
}
