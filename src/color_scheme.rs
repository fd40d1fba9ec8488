//! Colors: the electrode palette, the unselected-marker sentinel and the UI theme.
//!
//! Electrode colors are a pure function of the channel's position in the
//! dataset's channel list, so a channel keeps its color for the whole session
//! regardless of what else is selected or in which order it was clicked.

use std::collections::HashMap;

use eframe::egui::{Color32, Context, Visuals};
use once_cell::sync::Lazy;

use crate::error::ConfigError;

/// Fill color of every marker whose channel is not selected.
///
/// Not a named color, so it never coincides with a palette entry.
pub const UNSELECTED_COLOR: Color32 = Color32::from_rgb(214, 39, 40);

/// Names of the default electrode palette, in allocation order.
pub const VIBRANT_NAMES: [&str; 18] = [
    "blue",
    "green",
    "cyan",
    "magenta",
    "orange",
    "purple",
    "yellow",
    "lime",
    "pink",
    "teal",
    "gold",
    "red",
    "navy",
    "violet",
    "brown",
    "orchid",
    "turquoise",
    "crimson",
];

static NAMED_COLORS: Lazy<HashMap<&'static str, Color32>> = Lazy::new(|| {
    HashMap::from([
        ("blue", Color32::from_rgb(0, 0, 255)),
        ("green", Color32::from_rgb(0, 128, 0)),
        ("cyan", Color32::from_rgb(0, 255, 255)),
        ("magenta", Color32::from_rgb(255, 0, 255)),
        ("orange", Color32::from_rgb(255, 165, 0)),
        ("purple", Color32::from_rgb(128, 0, 128)),
        ("yellow", Color32::from_rgb(255, 255, 0)),
        ("lime", Color32::from_rgb(0, 255, 0)),
        ("pink", Color32::from_rgb(255, 192, 203)),
        ("teal", Color32::from_rgb(0, 128, 128)),
        ("gold", Color32::from_rgb(255, 215, 0)),
        ("red", Color32::from_rgb(255, 0, 0)),
        ("navy", Color32::from_rgb(0, 0, 128)),
        ("violet", Color32::from_rgb(238, 130, 238)),
        ("brown", Color32::from_rgb(165, 42, 42)),
        ("orchid", Color32::from_rgb(218, 112, 214)),
        ("turquoise", Color32::from_rgb(64, 224, 208)),
        ("crimson", Color32::from_rgb(220, 20, 60)),
        ("gray", Color32::from_rgb(128, 128, 128)),
        ("grey", Color32::from_rgb(128, 128, 128)),
        ("black", Color32::from_rgb(0, 0, 0)),
        ("white", Color32::from_rgb(255, 255, 255)),
        ("lightblue", Color32::from_rgb(173, 216, 230)),
        ("lightgreen", Color32::from_rgb(144, 238, 144)),
        ("salmon", Color32::from_rgb(250, 128, 114)),
        ("olive", Color32::from_rgb(128, 128, 0)),
        ("maroon", Color32::from_rgb(128, 0, 0)),
        ("indigo", Color32::from_rgb(75, 0, 130)),
        ("coral", Color32::from_rgb(255, 127, 80)),
        ("khaki", Color32::from_rgb(240, 230, 140)),
    ])
});

/// Resolve a color name (`"teal"`) or hex literal (`"#008080"`).
pub fn parse_color(name: &str) -> Option<Color32> {
    let key = name.trim().to_ascii_lowercase();
    if let Some(hex) = key.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let v = u32::from_str_radix(hex, 16).ok()?;
        return Some(Color32::from_rgb(
            ((v >> 16) & 0xff) as u8,
            ((v >> 8) & 0xff) as u8,
            (v & 0xff) as u8,
        ));
    }
    NAMED_COLORS.get(key.as_str()).copied()
}

/// Ordered electrode palette applied with wraparound.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Color32>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::vibrant()
    }
}

impl Palette {
    /// The 18 color default palette.
    pub fn vibrant() -> Self {
        let colors = VIBRANT_NAMES
            .iter()
            .filter_map(|n| NAMED_COLORS.get(n).copied())
            .collect();
        Self { colors }
    }

    /// Build a palette from explicit colors.
    pub fn new(colors: Vec<Color32>) -> Result<Self, ConfigError> {
        if colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if let Some(i) = colors.iter().position(|c| *c == UNSELECTED_COLOR) {
            return Err(ConfigError::PaletteUsesSentinel(i));
        }
        Ok(Self { colors })
    }

    /// Build a palette from color names or hex literals.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, ConfigError> {
        let colors = names
            .iter()
            .map(|n| {
                parse_color(n.as_ref())
                    .ok_or_else(|| ConfigError::UnknownColor(n.as_ref().to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    /// Color assigned to the channel at `index` in the dataset's channel list.
    pub fn color_of(&self, index: usize) -> Color32 {
        self.colors[index % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Color32] {
        &self.colors
    }
}

/// Visual theme for the viewer window.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ColorScheme {
    #[default]
    Dark,
    Light,
    Nord,
    SolarizedDark,
}

impl ColorScheme {
    /// All built-in schemes (useful for combo-box UIs).
    pub fn all() -> &'static [ColorScheme] {
        &[
            ColorScheme::Dark,
            ColorScheme::Light,
            ColorScheme::Nord,
            ColorScheme::SolarizedDark,
        ]
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ColorScheme::Dark => "Dark",
            ColorScheme::Light => "Light",
            ColorScheme::Nord => "Nord",
            ColorScheme::SolarizedDark => "Solarized Dark",
        }
    }

    /// Case-insensitive lookup by label, ignoring spaces, dashes and underscores.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        let norm: String = name
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        Self::all()
            .iter()
            .find(|s| s.label().replace(' ', "").to_ascii_lowercase() == norm)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownScheme(name.to_string()))
    }

    /// Apply this scheme's visuals to an egui context.
    pub fn apply(&self, ctx: &Context) {
        match self {
            ColorScheme::Dark => ctx.set_visuals(Visuals::dark()),
            ColorScheme::Light => ctx.set_visuals(Visuals::light()),
            ColorScheme::Nord => {
                let mut v = Visuals::dark();
                let polar0 = Color32::from_rgb(46, 52, 64);
                let polar1 = Color32::from_rgb(59, 66, 82);
                let snow0 = Color32::from_rgb(216, 222, 233);
                v.panel_fill = polar0;
                v.window_fill = polar1;
                v.extreme_bg_color = polar0;
                v.faint_bg_color = polar1;
                v.override_text_color = Some(snow0);
                v.widgets.noninteractive.bg_fill = polar1;
                v.widgets.noninteractive.fg_stroke.color = snow0;
                v.widgets.hovered.bg_fill = Color32::from_rgb(76, 86, 106);
                ctx.set_visuals(v);
            }
            ColorScheme::SolarizedDark => {
                let mut v = Visuals::dark();
                let base03 = Color32::from_rgb(0, 43, 54);
                let base02 = Color32::from_rgb(7, 54, 66);
                let base01 = Color32::from_rgb(88, 110, 117);
                let base0 = Color32::from_rgb(131, 148, 150);
                v.panel_fill = base03;
                v.window_fill = base02;
                v.extreme_bg_color = base03;
                v.faint_bg_color = base02;
                v.override_text_color = Some(base0);
                v.widgets.noninteractive.bg_fill = base02;
                v.widgets.noninteractive.fg_stroke.color = base0;
                v.widgets.inactive.bg_fill = base02;
                v.widgets.hovered.bg_fill = base01;
                ctx.set_visuals(v);
            }
        }
    }

    /// Color of the fixed decorations (head outline, reference lines).
    pub fn outline_color(&self) -> Color32 {
        match self {
            ColorScheme::Light => Color32::from_gray(40),
            _ => Color32::from_gray(220),
        }
    }
}
