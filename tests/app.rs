mod common;

use std::sync::Arc;

use egui::epaint::ColorMode;
use egui::{Color32, Event, Key, Modifiers, PointerButton, Pos2, RawInput, Rect, Shape};
use topoclick::data::demo::demo_dataset;
use topoclick::panels::{ComparisonPanel, Panel};
use topoclick::render::NO_SELECTION_TEXT;
use topoclick::{TopoApp, ViewerConfig, ViewerEvent};

fn app() -> TopoApp {
    let cfg = ViewerConfig {
        palette: common::blue_green_cyan(),
        ..ViewerConfig::default()
    };
    TopoApp::new(Arc::new(common::three_channel_epochs()), &cfg)
}

#[test]
fn panels_start_with_the_initial_frame() {
    let app = app();
    assert_eq!(app.topomap.field_index(), Some(0));
    assert_eq!(app.time_slider.label(), "Time: -0.100 s");
    let frame = app.comparison.frame().unwrap();
    assert_eq!(frame.placeholder.as_deref(), Some(NO_SELECTION_TEXT));
    assert!(app.descriptions.rows().is_empty());
}

#[test]
fn picking_updates_every_panel() {
    let mut app = app();
    assert!(app.dispatch(ViewerEvent::MarkerPicked(2)));
    assert_eq!(app.comparison.frame().unwrap().legend(), vec!["Cz"]);
    assert_eq!(app.descriptions.rows().len(), 1);
    assert_eq!(app.descriptions.rows()[0].channel, "Cz");

    assert!(app.dispatch(ViewerEvent::MarkerPicked(2)));
    assert!(app.comparison.frame().unwrap().legend().is_empty());
    assert!(app.descriptions.rows().is_empty());
}

#[test]
fn moving_the_cursor_keeps_the_comparison() {
    let mut app = app();
    app.dispatch(ViewerEvent::MarkerPicked(0));
    let traces = app.comparison.frame().unwrap().traces.clone();

    assert!(app.dispatch(ViewerEvent::TimeCursorMoved(1)));
    assert_eq!(app.time_slider.index(), 1);
    assert_eq!(app.time_slider.label(), "Time: 0.000 s");
    assert_eq!(app.topomap.field_index(), Some(1));
    let frame = app.comparison.frame().unwrap();
    assert_eq!(frame.traces, traces);
    assert_eq!(frame.cursor_time, 0.0);
    assert!(app.state().selection.is_selected(0));
}

#[test]
fn ignored_events_report_no_change() {
    let mut app = app();
    assert!(!app.dispatch(ViewerEvent::MarkerPicked(42)));
    assert!(!app.dispatch(ViewerEvent::TimeCursorStepped(-1)));
}

#[test]
fn initial_time_selects_nearest_sample() {
    let cfg = ViewerConfig {
        initial_time: Some(0.3),
        ..ViewerConfig::default()
    };
    let ds = Arc::new(demo_dataset(2).unwrap());
    let app = TopoApp::new(ds.clone(), &cfg);
    let idx = app.state().cursor.index();
    assert!((ds.times()[idx] - 0.3).abs() <= 0.5 / 250.0 + 1e-9);
    assert_eq!(app.time_slider.index(), idx);
}

#[test]
fn end_key_jumps_to_last_sample() {
    let app = app();
    let ctx = egui::Context::default();
    let input = RawInput {
        events: vec![Event::Key {
            key: Key::End,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: Modifiers::NONE,
        }],
        ..RawInput::default()
    };
    let mut events = Vec::new();
    let _ = ctx.run(input, |ctx| events = app.read_hotkeys(ctx));
    assert_eq!(events, vec![ViewerEvent::TimeCursorMoved(2)]);
}

#[test]
fn dispatch_keeps_the_full_time_axis() {
    let mut app = app();
    app.dispatch(ViewerEvent::MarkerPicked(1));
    app.dispatch(ViewerEvent::TimeCursorMoved(2));
    assert_eq!(app.state().cursor.len(), 3);
    assert_eq!(app.state().cursor.index(), 2);
    assert!(app.state().selection.is_selected(1));
}

// ─────────────────────────────────────────────────────────────────────────────
// Headless comparison plot
// ─────────────────────────────────────────────────────────────────────────────

fn screen() -> RawInput {
    RawInput {
        screen_rect: Some(Rect::from_min_size(Pos2::ZERO, egui::vec2(900.0, 600.0))),
        ..RawInput::default()
    }
}

/// Draw the comparison panel once and dispatch whatever it reported.
fn draw(
    ctx: &egui::Context,
    app: &mut TopoApp,
    events: Vec<Event>,
) -> (Vec<Shape>, Vec<ViewerEvent>) {
    let input = RawInput {
        events,
        ..screen()
    };
    let mut reported = Vec::new();
    let output = ctx.run(input, |ctx| {
        reported.clear();
        egui::CentralPanel::default().show(ctx, |ui| {
            app.comparison.render_panel(ui, &mut reported);
        });
    });
    for e in reported.clone() {
        app.dispatch(e);
    }
    let mut shapes = Vec::new();
    for clipped in output.shapes {
        flatten(clipped.shape, &mut shapes);
    }
    (shapes, reported)
}

fn flatten(shape: Shape, out: &mut Vec<Shape>) {
    match shape {
        Shape::Vec(inner) => inner.into_iter().for_each(|s| flatten(s, out)),
        other => out.push(other),
    }
}

/// Polylines drawn in `color`; legend icons are circles, so these are mean lines.
fn lines_in(shapes: &[Shape], color: Color32) -> usize {
    shapes
        .iter()
        .filter(|s| match s {
            Shape::Path(p) => {
                !p.closed && matches!(p.stroke.color, ColorMode::Solid(c) if c == color)
            }
            _ => false,
        })
        .count()
}

fn text_center(shapes: &[Shape], text: &str) -> Option<Pos2> {
    shapes.iter().find_map(|s| match s {
        Shape::Text(t) if t.galley.text() == text => Some(t.visual_bounding_rect().center()),
        _ => None,
    })
}

fn click(pos: Pos2, pressed: bool) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::NONE,
    }
}

#[test]
fn legend_click_deselects_instead_of_hiding() {
    let ctx = egui::Context::default();
    let mut app = app();
    let cz = common::blue_green_cyan().color_of(2);
    app.dispatch(ViewerEvent::MarkerPicked(2));

    let (shapes, _) = draw(&ctx, &mut app, vec![]);
    assert_eq!(lines_in(&shapes, cz), 1);
    let entry = text_center(&shapes, "Cz").expect("legend entry for Cz");

    draw(&ctx, &mut app, vec![Event::PointerMoved(entry)]);
    draw(&ctx, &mut app, vec![click(entry, true)]);
    let (_, reported) = draw(&ctx, &mut app, vec![click(entry, false)]);
    assert_eq!(reported, vec![ViewerEvent::ChannelPicked("Cz".into())]);
    assert!(app.state().selection.is_empty());

    // Selecting it again draws it again.
    app.dispatch(ViewerEvent::MarkerPicked(2));
    draw(&ctx, &mut app, vec![Event::PointerMoved(Pos2::new(5.0, 5.0))]);
    let (shapes, _) = draw(&ctx, &mut app, vec![]);
    assert_eq!(app.state().selection.selected_names(), vec!["Cz"]);
    assert_eq!(lines_in(&shapes, cz), 1);
}

#[test]
fn hidden_plot_items_turn_into_picks() {
    let ctx = egui::Context::default();
    let mut app = app();
    app.dispatch(ViewerEvent::MarkerPicked(0));
    app.dispatch(ViewerEvent::MarkerPicked(2));
    draw(&ctx, &mut app, vec![]);

    let id = ComparisonPanel::plot_id();
    let mut mem = egui_plot::PlotMemory::load(&ctx, id).expect("plot memory");
    mem.hidden_items.insert(egui::Id::new(&"Fp1".to_string()));
    mem.store(&ctx, id);

    let (_, reported) = draw(&ctx, &mut app, vec![]);
    assert_eq!(reported, vec![ViewerEvent::ChannelPicked("Fp1".into())]);
    assert_eq!(app.state().selection.selected_names(), vec!["Cz"]);
    let mem = egui_plot::PlotMemory::load(&ctx, id).expect("plot memory");
    assert!(mem.hidden_items.is_empty());
}
