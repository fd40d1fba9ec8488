use egui::Color32;
use topoclick::color_scheme::{parse_color, VIBRANT_NAMES};
use topoclick::{ColorScheme, ConfigError, Palette, UNSELECTED_COLOR};

#[test]
fn vibrant_palette_has_every_named_color() {
    let p = Palette::vibrant();
    assert_eq!(p.len(), VIBRANT_NAMES.len());
    assert_eq!(p.color_of(0), parse_color("blue").unwrap());
    assert_eq!(p.color_of(2), parse_color("cyan").unwrap());
}

#[test]
fn palette_wraps_around() {
    let p = Palette::from_names(&["blue", "green", "cyan"]).unwrap();
    assert_eq!(p.color_of(3), p.color_of(0));
    assert_eq!(p.color_of(7), p.color_of(1));
}

#[test]
fn unselected_color_never_in_default_palette() {
    assert!(!Palette::vibrant().colors().contains(&UNSELECTED_COLOR));
}

#[test]
fn palette_rejects_sentinel_color() {
    let err = Palette::new(vec![Color32::BLUE, UNSELECTED_COLOR]).unwrap_err();
    assert!(matches!(err, ConfigError::PaletteUsesSentinel(1)));
}

#[test]
fn palette_rejects_empty_and_unknown() {
    let empty: [&str; 0] = [];
    assert!(matches!(
        Palette::from_names(&empty),
        Err(ConfigError::EmptyPalette)
    ));
    match Palette::from_names(&["blue", "blurple"]) {
        Err(ConfigError::UnknownColor(name)) => assert_eq!(name, "blurple"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn parse_color_accepts_names_and_hex() {
    assert_eq!(parse_color("Teal"), Some(Color32::from_rgb(0, 128, 128)));
    assert_eq!(parse_color("#ff8000"), Some(Color32::from_rgb(255, 128, 0)));
    assert_eq!(parse_color("#ff80"), None);
    assert_eq!(parse_color("nope"), None);
}

#[test]
fn color_scheme_names_round_trip() {
    for s in ColorScheme::all() {
        assert_eq!(&ColorScheme::from_name(s.label()).unwrap(), s);
    }
    assert!(matches!(
        ColorScheme::from_name("sepia"),
        Err(ConfigError::UnknownScheme(_))
    ));
}
