use egui::{Color32, Vec2, pos2, vec2};
use egui_paint::{
    BrushConfig, EditorState, LineColorMode, PointerSample, Shape, SuppressionPolicy, Tool,
    ToolKind,
};

fn editor(tool: ToolKind) -> EditorState {
    let mut brush = BrushConfig::default();
    brush.tool = tool;
    EditorState::new(brush, SuppressionPolicy::EveryFrame)
}

/// Press at `from`, hold while moving to `to`, release at `to`.
fn drag(state: &mut EditorState, from: egui::Pos2, to: egui::Pos2) -> Option<Shape> {
    assert!(state.step(PointerSample::down(from)).is_none());
    assert!(state.step(PointerSample::down(to)).is_none());
    state.step(PointerSample::up(to))
}

#[test]
fn test_unfilled_rectangle_scenario() {
    let mut state = editor(ToolKind::Rectangle);
    let committed = drag(&mut state, pos2(10.0, 10.0), pos2(50.0, 30.0));

    let Some(Shape::Rectangle(rect)) = committed else {
        panic!("expected a rectangle, got {committed:?}");
    };
    assert_eq!(rect.position, pos2(10.0, 10.0));
    assert_eq!(rect.size, vec2(40.0, 20.0));
    assert_eq!(rect.fill, None);
    assert_eq!(rect.outline, state.brush.outline_color());
    assert_eq!(rect.thickness, state.brush.thickness());
    assert_eq!(state.document().rectangles(), &[rect]);
}

#[test]
fn test_filled_rectangle_uses_fill_color() {
    let mut state = editor(ToolKind::FilledRectangle);
    let committed = drag(&mut state, pos2(50.0, 30.0), pos2(10.0, 10.0));

    let Some(Shape::Rectangle(rect)) = committed else {
        panic!("expected a rectangle, got {committed:?}");
    };
    assert_eq!(rect.position, pos2(10.0, 10.0));
    assert_eq!(rect.size, vec2(40.0, 20.0));
    assert_eq!(rect.fill, Some(state.brush.fill_color()));
}

#[test]
fn test_rectangle_size_never_negative() {
    let points = [
        (pos2(0.0, 0.0), pos2(-30.0, 12.0)),
        (pos2(100.0, 5.0), pos2(3.5, 80.0)),
        (pos2(-4.0, -4.0), pos2(-9.0, -1.0)),
    ];
    for (a, b) in points {
        let mut state = editor(ToolKind::Rectangle);
        let Some(Shape::Rectangle(rect)) = drag(&mut state, a, b) else {
            panic!("expected a rectangle");
        };
        assert_eq!(rect.position, a.min(b));
        assert_eq!(rect.size, (b - a).abs());
        assert!(rect.size.x >= 0.0 && rect.size.y >= 0.0);
    }
}

#[test]
fn test_circle_radius_and_center() {
    let mut state = editor(ToolKind::Circle);
    let Some(Shape::Circle(circle)) = drag(&mut state, pos2(10.0, 10.0), pos2(13.0, 14.0)) else {
        panic!("expected a circle");
    };
    assert_eq!(circle.center, pos2(10.0, 10.0));
    assert!((circle.radius - 5.0).abs() < 1e-5);
    assert_eq!(circle.outline, state.brush.outline_color());
}

#[test]
fn test_zero_size_circle_scenario() {
    let mut state = editor(ToolKind::Circle);
    let committed = drag(&mut state, pos2(0.0, 0.0), pos2(0.0, 0.0));
    let Some(Shape::Circle(circle)) = committed else {
        panic!("expected a circle, got {committed:?}");
    };
    assert_eq!(circle.center, pos2(0.0, 0.0));
    assert_eq!(circle.radius, 0.0);
    assert_eq!(state.document().circles().len(), 1);
}

#[test]
fn test_click_within_one_frame_commits_degenerate_shape() {
    let mut state = editor(ToolKind::Rectangle);
    let committed = state.step(PointerSample::click(pos2(7.0, 7.0)));
    let Some(Shape::Rectangle(rect)) = committed else {
        panic!("expected a rectangle, got {committed:?}");
    };
    assert_eq!(rect.size, Vec2::ZERO);
    assert!(!state.active_tool().is_dragging());
}

#[test]
fn test_solid_line_uses_outline_for_both_ends() {
    let mut state = editor(ToolKind::Line);
    let Some(Shape::Line(line)) = drag(&mut state, pos2(1.0, 1.0), pos2(20.0, 5.0)) else {
        panic!("expected a line");
    };
    assert_eq!(line.start, pos2(1.0, 1.0));
    assert_eq!(line.end, pos2(20.0, 5.0));
    assert_eq!(line.start_color, state.brush.outline_color());
    assert_eq!(line.end_color, state.brush.outline_color());
}

#[test]
fn test_gradient_line_runs_outline_to_fill() {
    let mut state = editor(ToolKind::Line);
    state.brush.line_mode = LineColorMode::Gradient;
    state.brush.outline = [1.0, 0.0, 0.0];
    state.brush.fill = [0.0, 0.0, 1.0];

    let Some(Shape::Line(line)) = drag(&mut state, pos2(1.0, 1.0), pos2(20.0, 5.0)) else {
        panic!("expected a line");
    };
    assert_eq!(line.start_color, Color32::RED);
    assert_eq!(line.end_color, Color32::BLUE);
}

#[test]
fn test_live_point_tracks_every_frame() {
    let mut state = editor(ToolKind::Line);
    state.step(PointerSample::down(pos2(0.0, 0.0)));
    for x in [5.0, 12.0, 3.0] {
        state.step(PointerSample::down(pos2(x, 1.0)));
        let Some(Shape::Line(preview)) = state.preview() else {
            panic!("expected a line preview");
        };
        assert_eq!(preview.end, pos2(x, 1.0));
    }
}

#[test]
fn test_preview_matches_commit() {
    for kind in ToolKind::ALL {
        let mut state = editor(kind);
        state.brush.line_mode = LineColorMode::Gradient;
        state.step(PointerSample::down(pos2(4.0, 9.0)));
        state.step(PointerSample::down(pos2(40.0, 2.0)));
        let preview = state.preview();
        assert!(preview.is_some());

        let committed = state.step(PointerSample::up(pos2(40.0, 2.0)));
        assert_eq!(committed, preview, "{kind:?}");
        assert!(state.preview().is_none());
    }
}

#[test]
fn test_no_shape_without_press() {
    let mut state = editor(ToolKind::Circle);
    state.step(PointerSample::up(pos2(1.0, 1.0)));
    state.step(PointerSample::up(pos2(2.0, 2.0)));
    assert!(state.document().is_empty());
    assert!(state.preview().is_none());
}
