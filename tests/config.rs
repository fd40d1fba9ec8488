use std::io::Write;

use topoclick::color_scheme::parse_color;
use topoclick::{ColorScheme, ConfigError, Hotkeys, ViewerConfig};

#[test]
fn empty_document_keeps_defaults() {
    let cfg = ViewerConfig::from_yaml_str("{}").unwrap();
    let def = ViewerConfig::default();
    assert_eq!(cfg.title, def.title);
    assert_eq!(cfg.palette, def.palette);
    assert_eq!(cfg.features, def.features);
    assert_eq!(cfg.hotkeys, def.hotkeys);
    assert_eq!(cfg.y_unit, "µV");
}

#[test]
fn yaml_overrides_present_fields() {
    let yaml = r##"
title: Oddball session 3
palette: [blue, "#00ff00", cyan]
color_scheme: solarized-dark
features:
  sd_band: false
  legend: false
topomap:
  resolution: 48
hotkeys:
  coarse_step: 25
initial_time: 0.3
"##;
    let cfg = ViewerConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(cfg.title, "Oddball session 3");
    assert_eq!(cfg.palette.len(), 3);
    assert_eq!(cfg.palette.color_of(1), parse_color("lime").unwrap());
    assert_eq!(cfg.color_scheme, ColorScheme::SolarizedDark);
    assert!(!cfg.features.sd_band);
    assert!(!cfg.features.legend);
    assert!(cfg.features.descriptions);
    assert_eq!(cfg.topomap.resolution, 48);
    assert_eq!(cfg.topomap.marker_radius, 9.0);
    assert_eq!(cfg.hotkeys.coarse_step, 25);
    assert_eq!(cfg.hotkeys.step, 1);
    assert_eq!(cfg.initial_time, Some(0.3));
}

#[test]
fn unknown_color_is_rejected() {
    let err = ViewerConfig::from_yaml_str("palette: [blue, notacolor]").unwrap_err();
    assert!(matches!(err, ConfigError::UnknownColor(ref n) if n == "notacolor"));
}

#[test]
fn unknown_scheme_is_rejected() {
    let err = ViewerConfig::from_yaml_str("color_scheme: sepia").unwrap_err();
    assert!(matches!(err, ConfigError::UnknownScheme(_)));
}

#[test]
fn malformed_yaml_is_rejected() {
    let err = ViewerConfig::from_yaml_str("features: [1, 2").unwrap_err();
    assert!(matches!(err, ConfigError::Yaml(_)));
}

#[test]
fn load_yaml_from_file() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(f, "headline: Auditory oddball").unwrap();
    let cfg = ViewerConfig::load_yaml(f.path()).unwrap();
    assert_eq!(cfg.headline.as_deref(), Some("Auditory oddball"));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ViewerConfig::load_yaml(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn hotkey_deltas_saturate() {
    let hk = Hotkeys {
        step: i64::MIN,
        coarse_step: 10,
    };
    assert_eq!(hk.delta(false, false), i64::MAX);
    assert_eq!(hk.delta(false, true), i64::MIN);
    assert_eq!(hk.delta(true, false), -10);
    assert_eq!(hk.delta(true, true), 10);
}
