//! Viewer configuration.
//!
//! [`ViewerConfig`] is the in-memory configuration handed to
//! [`run_viewer`](crate::run_viewer). [`ViewerConfigFile`] is its YAML mirror:
//! every field optional, applied on top of the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use crate::color_scheme::{ColorScheme, Palette};
use crate::error::ConfigError;

// ─────────────────────────────────────────────────────────────────────────────
// Feature flags
// ─────────────────────────────────────────────────────────────────────────────

/// Toggle individual view elements on or off. All default to `true`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    /// Shade ±1 SD around each mean trace (per-epoch datasets only).
    pub sd_band: bool,
    /// Shade the pre- and post-stimulus ranges of the comparison view.
    pub stimulus_shading: bool,
    /// Show the electrode description table.
    pub descriptions: bool,
    /// Show the comparison legend.
    pub legend: bool,
    /// Draw the current-time line in the comparison view.
    pub cursor_line: bool,
    /// Show the topomap colorbar.
    pub colorbar: bool,
    /// Print channel labels next to the markers.
    pub marker_labels: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            sd_band: true,
            stimulus_shading: true,
            descriptions: true,
            legend: true,
            cursor_line: true,
            colorbar: true,
            marker_labels: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Topomap settings
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopomapSettings {
    /// Interpolation grid cells per side.
    pub resolution: usize,
    /// Marker radius in points. Also the pick tolerance.
    pub marker_radius: f32,
    /// Marker fill opacity, 0-255.
    pub marker_alpha: u8,
}

impl Default for TopomapSettings {
    fn default() -> Self {
        Self {
            resolution: 96,
            marker_radius: 9.0,
            marker_alpha: 153,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Hotkeys
// ─────────────────────────────────────────────────────────────────────────────

/// Time cursor keyboard steps, in samples.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hotkeys {
    /// Left / Right arrow.
    pub step: i64,
    /// Shift + Left / Right arrow.
    pub coarse_step: i64,
}

impl Default for Hotkeys {
    fn default() -> Self {
        Self {
            step: 1,
            coarse_step: 10,
        }
    }
}

impl Hotkeys {
    /// Signed cursor delta for a fine (`coarse == false`) or coarse step.
    pub fn delta(&self, coarse: bool, forward: bool) -> i64 {
        let step = if coarse { self.coarse_step } else { self.step };
        if forward {
            step
        } else {
            step.saturating_neg()
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ViewerConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for the viewer.
///
/// | Field          | Purpose |
/// |----------------|---------|
/// | `palette`      | Electrode colors, by channel index with wraparound |
/// | `color_scheme` | UI theme |
/// | `features`     | Toggle view elements |
/// | `topomap`      | Field resolution and marker look |
/// | `hotkeys`      | Keyboard stepping of the time cursor |
#[derive(Clone)]
pub struct ViewerConfig {
    /// Native window title.
    pub title: String,
    /// Optional headline rendered above the views.
    pub headline: Option<String>,
    /// Optional subheadline below the headline.
    pub subheadline: Option<String>,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,

    pub palette: Palette,
    pub color_scheme: ColorScheme,
    pub features: FeatureFlags,
    pub topomap: TopomapSettings,
    pub hotkeys: Hotkeys,

    /// Initial time cursor position in seconds (nearest sample).
    pub initial_time: Option<f64>,
    /// Amplitude unit for the comparison Y axis.
    pub y_unit: String,
}

impl std::fmt::Debug for ViewerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewerConfig")
            .field("title", &self.title)
            .field("headline", &self.headline)
            .field("subheadline", &self.subheadline)
            .field("native_options", &self.native_options.as_ref().map(|_| ".."))
            .field("palette", &self.palette)
            .field("color_scheme", &self.color_scheme)
            .field("features", &self.features)
            .field("topomap", &self.topomap)
            .field("hotkeys", &self.hotkeys)
            .field("initial_time", &self.initial_time)
            .field("y_unit", &self.y_unit)
            .finish()
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "topoclick".to_string(),
            headline: None,
            subheadline: Some(
                "Click electrodes to compare their responses; drag the slider to move through time."
                    .to_string(),
            ),
            native_options: None,
            palette: Palette::vibrant(),
            color_scheme: ColorScheme::default(),
            features: FeatureFlags::default(),
            topomap: TopomapSettings::default(),
            hotkeys: Hotkeys::default(),
            initial_time: None,
            y_unit: "µV".to_string(),
        }
    }
}

impl ViewerConfig {
    /// Defaults overridden by a YAML document.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let file: ViewerConfigFile = serde_yaml::from_str(text)?;
        let mut cfg = Self::default();
        file.apply_to(&mut cfg)?;
        Ok(cfg)
    }

    /// Defaults overridden by a YAML file.
    pub fn load_yaml(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let cfg = Self::from_yaml_str(&text)?;
        log::info!("loaded viewer config from {}", path.display());
        Ok(cfg)
    }
}

/// Serializable mirror of [`ViewerConfig`]; absent fields keep their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfigFile {
    pub title: Option<String>,
    pub headline: Option<String>,
    pub subheadline: Option<String>,
    /// Color names or `#rrggbb` literals.
    pub palette: Option<Vec<String>>,
    pub color_scheme: Option<String>,
    pub features: Option<FeatureFlags>,
    pub topomap: Option<TopomapSettings>,
    pub hotkeys: Option<Hotkeys>,
    pub initial_time: Option<f64>,
    pub y_unit: Option<String>,
}

impl ViewerConfigFile {
    /// Apply the present fields to `cfg`.
    pub fn apply_to(self, cfg: &mut ViewerConfig) -> Result<(), ConfigError> {
        if let Some(t) = self.title {
            cfg.title = t;
        }
        if self.headline.is_some() {
            cfg.headline = self.headline;
        }
        if self.subheadline.is_some() {
            cfg.subheadline = self.subheadline;
        }
        if let Some(names) = self.palette {
            cfg.palette = Palette::from_names(&names)?;
        }
        if let Some(scheme) = self.color_scheme {
            cfg.color_scheme = ColorScheme::from_name(&scheme)?;
        }
        if let Some(f) = self.features {
            cfg.features = f;
        }
        if let Some(t) = self.topomap {
            cfg.topomap = t;
        }
        if let Some(h) = self.hotkeys {
            cfg.hotkeys = h;
        }
        if self.initial_time.is_some() {
            cfg.initial_time = self.initial_time;
        }
        if let Some(u) = self.y_unit {
            cfg.y_unit = u;
        }
        Ok(())
    }
}
