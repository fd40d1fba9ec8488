mod common;

use std::sync::Arc;

use egui::Color32;
use topoclick::color_scheme::parse_color;
use topoclick::render::NO_SELECTION_TEXT;
use topoclick::{
    ElectrodeController, RecordingSurface, RenderCommand, RenderSurface, ViewerEvent, ViewerState,
    UNSELECTED_COLOR,
};

fn controller() -> (ElectrodeController, ViewerState) {
    let ds = Arc::new(common::three_channel_epochs());
    let state = ViewerState::new(&ds);
    (ElectrodeController::new(ds, common::blue_green_cyan()), state)
}

fn marker_colors(commands: &[RenderCommand]) -> &[Color32] {
    commands
        .iter()
        .find_map(|c| match c {
            RenderCommand::MarkerColors(colors) => Some(colors.as_slice()),
            _ => None,
        })
        .unwrap()
}

#[test]
fn pick_then_unpick_cz() {
    let (ctrl, state) = controller();
    let cyan = parse_color("cyan").unwrap();

    let (state, cmds) = ctrl.dispatch(state, ViewerEvent::MarkerPicked(2));
    assert_eq!(state.selection.selected_names(), vec!["Cz"]);
    assert_eq!(
        marker_colors(&cmds),
        &[UNSELECTED_COLOR, UNSELECTED_COLOR, cyan]
    );
    let mut surface = RecordingSurface::default();
    for c in &cmds {
        surface.apply(c);
    }
    let frame = surface.comparison().unwrap();
    assert_eq!(frame.legend(), vec!["Cz"]);
    assert_eq!(frame.traces[0].color, cyan);
    assert!(frame.placeholder.is_none());

    let (state, cmds) = ctrl.dispatch(state, ViewerEvent::MarkerPicked(2));
    assert!(state.selection.is_empty());
    assert_eq!(marker_colors(&cmds), &[UNSELECTED_COLOR; 3]);
    let frame = cmds
        .iter()
        .find_map(|c| match c {
            RenderCommand::Comparison(f) => Some(f),
            _ => None,
        })
        .unwrap();
    assert!(frame.traces.is_empty());
    assert!(frame.legend().is_empty());
    assert_eq!(frame.placeholder.as_deref(), Some(NO_SELECTION_TEXT));
}

#[test]
fn pick_redraws_every_selection_view() {
    let (ctrl, state) = controller();
    let (_, cmds) = ctrl.dispatch(state, ViewerEvent::MarkerPicked(0));
    assert_eq!(cmds.len(), 4);
    assert!(matches!(cmds[0], RenderCommand::SpatialField(_)));
    assert!(matches!(cmds[1], RenderCommand::MarkerColors(_)));
    assert!(matches!(cmds[2], RenderCommand::Comparison(_)));
    match &cmds[3] {
        RenderCommand::Descriptions(rows) => {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].channel, "Fp1");
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn colors_depend_on_channel_index_only() {
    let (ctrl, state) = controller();
    let blue = parse_color("blue").unwrap();
    let green = parse_color("green").unwrap();

    let (state, _) = ctrl.dispatch(state, ViewerEvent::MarkerPicked(1));
    let (state, cmds) = ctrl.dispatch(state, ViewerEvent::MarkerPicked(0));
    assert_eq!(marker_colors(&cmds), &[blue, green, UNSELECTED_COLOR]);

    // Same colors when picked in the other order.
    let (ctrl2, fresh) = controller();
    let (fresh, _) = ctrl2.dispatch(fresh, ViewerEvent::MarkerPicked(0));
    let (fresh, cmds2) = ctrl2.dispatch(fresh, ViewerEvent::MarkerPicked(1));
    assert_eq!(marker_colors(&cmds2), marker_colors(&cmds));
    assert_eq!(fresh.selection, state.selection);
}

#[test]
fn out_of_range_pick_is_ignored() {
    let (ctrl, state) = controller();
    let (state, _) = ctrl.dispatch(state, ViewerEvent::MarkerPicked(1));
    let before = state.clone();
    let (after, cmds) = ctrl.dispatch(state, ViewerEvent::MarkerPicked(3));
    assert!(cmds.is_empty());
    assert_eq!(after, before);
}

#[test]
fn unknown_channel_name_is_ignored() {
    let (ctrl, state) = controller();
    let (after, cmds) = ctrl.dispatch(state.clone(), ViewerEvent::ChannelPicked("Oz".into()));
    assert!(cmds.is_empty());
    assert_eq!(after, state);
}

#[test]
fn channel_picked_by_name_toggles() {
    let (ctrl, state) = controller();
    let (state, cmds) = ctrl.dispatch(state, ViewerEvent::ChannelPicked("Fp2".into()));
    assert!(state.selection.is_selected(1));
    assert_eq!(cmds.len(), 4);
}

#[test]
fn cursor_move_keeps_selection() {
    let (ctrl, state) = controller();
    let (state, _) = ctrl.dispatch(state, ViewerEvent::MarkerPicked(0));
    let (state, _) = ctrl.dispatch(state, ViewerEvent::MarkerPicked(2));
    let selection = state.selection.clone();

    let (state, cmds) = ctrl.dispatch(state, ViewerEvent::TimeCursorMoved(2));
    assert_eq!(state.selection, selection);
    assert_eq!(state.cursor.index(), 2);
    assert_eq!(cmds.len(), 4);
    match &cmds[0] {
        RenderCommand::SpatialField(f) => {
            assert_eq!(f.time_index, 2);
            assert_eq!(f.time, 0.1);
            assert_eq!(f.values.len(), 3);
        }
        other => panic!("unexpected command {other:?}"),
    }
    assert_eq!(
        marker_colors(&cmds),
        &[
            parse_color("blue").unwrap(),
            UNSELECTED_COLOR,
            parse_color("cyan").unwrap()
        ]
    );
    assert!(cmds.contains(&RenderCommand::ComparisonCursor(0.1)));
    assert!(cmds.contains(&RenderCommand::TimeLabel("Time: 0.100 s".into())));
    assert!(!cmds.iter().any(|c| matches!(c, RenderCommand::Comparison(_))));
}

#[test]
fn cursor_is_clamped() {
    let (ctrl, state) = controller();
    let (state, _) = ctrl.dispatch(state, ViewerEvent::TimeCursorMoved(99));
    assert_eq!(state.cursor.index(), 2);
    let (state, cmds) = ctrl.dispatch(state, ViewerEvent::TimeCursorStepped(5));
    assert_eq!(state.cursor.index(), 2);
    assert!(cmds.is_empty());
    let (state, _) = ctrl.dispatch(state, ViewerEvent::TimeCursorStepped(-10));
    assert_eq!(state.cursor.index(), 0);
}

#[test]
fn unchanged_cursor_emits_nothing() {
    let (ctrl, state) = controller();
    let (_, cmds) = ctrl.dispatch(state, ViewerEvent::TimeCursorMoved(0));
    assert!(cmds.is_empty());
}

#[test]
fn initial_frame_draws_everything() {
    let (ctrl, state) = controller();
    let cmds = ctrl.initial_frame(&state);
    assert_eq!(cmds.len(), 5);
    assert_eq!(marker_colors(&cmds), &[UNSELECTED_COLOR; 3]);
    assert!(cmds.contains(&RenderCommand::TimeLabel("Time: -0.100 s".into())));
    assert!(cmds.contains(&RenderCommand::Descriptions(Vec::new())));
}

#[test]
fn handle_forwards_to_surface() {
    let (ctrl, mut state) = controller();
    let mut surface = RecordingSurface::default();
    assert!(ctrl.handle(&mut state, ViewerEvent::MarkerPicked(1), &mut surface));
    assert!(state.selection.is_selected(1));
    assert_eq!(surface.commands.len(), 4);
    assert!(!ctrl.handle(&mut state, ViewerEvent::MarkerPicked(7), &mut surface));
    assert_eq!(surface.commands.len(), 4);
}

#[test]
fn comparison_frame_decorates_stimulus() {
    let (ctrl, state) = controller();
    let frame = ctrl.comparison_frame(&state);
    assert_eq!(frame.decoration.onset, 0.0);
    assert_eq!(frame.decoration.pre, (-0.1, 0.0));
    assert_eq!(frame.decoration.post, (0.0, 0.1));
    assert_eq!(frame.cursor_time, -0.1);
}
