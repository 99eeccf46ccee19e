// File: crates/timegraph-core/tests/graph.rs
// Purpose: End-to-end renderer checks: projection, draw passes, axis wiring,
//          and the scrolling surface.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{Duration, TimeZone, Utc};
use timegraph_core::group::GroupRecord;
use timegraph_core::options::{
    CatmullRomPatch, DrawPointsPatch, GraphOptionsPatch, ShadedPatch,
};
use timegraph_core::store::{DataSet, DataSource, GroupSet, Item};
use timegraph_core::{
    AxisOrientation, GraphEvent, GraphStyle, Shape, TimeGraph, TimeRange,
};

fn t(ms: i64) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2014, 1, 1, 0, 0, 0).unwrap() + Duration::milliseconds(ms)
}

fn range() -> TimeRange {
    TimeRange::new(t(0), t(100))
}

/// Patch disabling everything except the plain polyline.
fn plain_line() -> GraphOptionsPatch {
    GraphOptionsPatch {
        catmull_rom: Some(CatmullRomPatch { enabled: Some(false), ..Default::default() }),
        shaded: Some(ShadedPatch { enabled: Some(false), ..Default::default() }),
        draw_points: Some(DrawPointsPatch { enabled: Some(false), ..Default::default() }),
        ..Default::default()
    }
}

fn ramp_items() -> DataSet {
    // y extent [0, 300] so with a 300px surface the value scale is 1:1.
    let mut set = DataSet::new();
    set.add("1", Item::new(t(0), 0.0, Some("g".into())));
    set.add("2", Item::new(t(50), 150.0, Some("g".into())));
    set.add("3", Item::new(t(100), 300.0, Some("g".into())));
    set
}

#[test]
fn line_pass_projects_into_the_middle_third() {
    let mut graph = TimeGraph::with_options(range(), plain_line());
    graph.set_viewport(100.0, 300.0);
    graph.set_items(Some(DataSource::Set(ramp_items())));

    // x: viewport offset +100; y: inverted value scale.
    let shapes = graph.surface().shapes();
    assert_eq!(shapes.len(), 1);
    match &shapes[0] {
        Shape::Path { d, .. } => assert_eq!(d, "M100,300 150,150 200,0"),
        other => panic!("expected a path, got {other:?}"),
    }
    assert_eq!(graph.surface().width, 300.0);
    assert_eq!(graph.surface().left, -100.0);
}

#[test]
fn shaded_line_emits_fill_outline_before_the_stroke() {
    let mut patch = plain_line();
    patch.shaded = None; // keep the default: enabled, orientation top
    let mut graph = TimeGraph::with_options(range(), patch);
    graph.set_viewport(100.0, 300.0);
    graph.set_items(Some(DataSource::Set(ramp_items())));

    let class = graph.group("g").expect("group exists").class_name.clone();
    let shapes = graph.surface().shapes();
    assert_eq!(shapes.len(), 2);
    match &shapes[0] {
        Shape::Path { d, class: fill_class } => {
            // Baseline at y=0 (top), the curve, and the closing baseline leg.
            assert_eq!(d, "M100,0 L100,300 150,150 200,0 L200,0");
            assert_eq!(fill_class, &format!("{class} fill"));
        }
        other => panic!("expected the fill path first, got {other:?}"),
    }
    match &shapes[1] {
        Shape::Path { d, class: line_class } => {
            assert_eq!(d, "M100,300 150,150 200,0");
            assert_eq!(line_class, &class);
        }
        other => panic!("expected the stroke path, got {other:?}"),
    }
}

#[test]
fn bar_pass_centers_rects_on_the_zero_baseline() {
    let mut patch = plain_line();
    patch.style = Some(GraphStyle::Bar);
    let mut graph = TimeGraph::with_options(range(), patch);
    graph.set_viewport(100.0, 300.0);

    let mut set = ramp_items();
    // One more point at a round spot: value 270 maps to pixel y=30.
    set.add("4", Item::new(t(0), 270.0, Some("g".into())));
    graph.set_items(Some(DataSource::Set(set)));

    // zero baseline: convert_value(0) == 300 == surface height, no clamping
    // needed for this range.
    assert_eq!(graph.zero_position(), 300.0);

    let class = graph.group("g").expect("group exists").class_name.clone();
    let shapes = graph.surface().shapes();
    assert_eq!(shapes.len(), 4);
    // Default bar width is 50: the rect is centered on x and spans from the
    // point down to the zero baseline.
    assert_eq!(
        shapes[3],
        Shape::Rect {
            x: 75.0,
            y: 30.0,
            width: 50.0,
            height: 270.0,
            class: format!("{class} bar"),
        }
    );
}

#[test]
fn zero_baseline_clamps_for_strictly_positive_data() {
    let mut patch = plain_line();
    patch.style = Some(GraphStyle::Bar);
    let mut graph = TimeGraph::with_options(range(), patch);
    graph.set_viewport(100.0, 300.0);

    let mut set = DataSet::new();
    set.add("1", Item::new(t(0), 10.0, Some("g".into())));
    set.add("2", Item::new(t(50), 100.0, Some("g".into())));
    graph.set_items(Some(DataSource::Set(set)));

    // min=10, max=100: value 0 falls below the surface, so the baseline
    // clamps to the bottom edge.
    assert_eq!(graph.zero_position(), 300.0);
}

#[test]
fn point_markers_follow_the_dataset() {
    let mut patch = plain_line();
    patch.draw_points = None; // default: enabled, size 6, square
    let mut graph = TimeGraph::with_options(range(), patch);
    graph.set_viewport(100.0, 300.0);
    graph.set_items(Some(DataSource::Set(ramp_items())));

    let points = graph
        .surface()
        .shapes()
        .iter()
        .filter(|s| matches!(s, Shape::Point { .. }))
        .count();
    assert_eq!(points, 3);
}

#[test]
fn dual_axis_wiring_and_layout_signal() {
    let events: Rc<RefCell<Vec<GraphEvent>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);

    let mut graph = TimeGraph::with_options(range(), plain_line());
    graph.set_change_listener(move |event| sink.borrow_mut().push(event));
    graph.set_viewport(100.0, 300.0);

    let mut groups = GroupSet::new();
    groups.add(GroupRecord::new("left", "Left series"));
    groups.add(
        GroupRecord::new("right", "Right series").with_options(GraphOptionsPatch {
            y_axis_orientation: Some(AxisOrientation::Right),
            ..Default::default()
        }),
    );
    graph.set_groups(Some(groups));

    let mut set = DataSet::new();
    set.add("1", Item::new(t(0), 1.0, Some("left".into())));
    set.add("2", Item::new(t(50), 2.0, Some("left".into())));
    set.add("3", Item::new(t(0), 100.0, Some("right".into())));
    set.add("4", Item::new(t(50), 200.0, Some("right".into())));
    graph.set_items(Some(DataSource::Set(set)));

    assert!(graph.y_axis_left().is_visible());
    assert!(graph.y_axis_right().is_visible());
    assert!(!graph.y_axis_right().master);
    assert!(graph.y_axis_left().draw_icons);
    assert!(graph.y_axis_right().draw_icons);
    // Slave side matches the master's tick spacing.
    assert_eq!(
        graph.y_axis_right().step_pixels,
        graph.y_axis_left().step_pixels
    );
    assert_eq!(events.borrow().len(), 1);

    // Dropping the right-side data hides that axis and reflows once more.
    if let Some(items) = graph.items_mut() {
        items.set_mut().remove("3");
        items.set_mut().remove("4");
    }
    graph.on_remove(&["3".to_string(), "4".to_string()]);

    assert!(graph.y_axis_left().is_visible());
    assert!(!graph.y_axis_right().is_visible());
    // The left side still carries data, so it stays authoritative.
    assert!(!graph.y_axis_right().master);
    assert!(!graph.y_axis_left().draw_icons);
    assert_eq!(events.borrow().len(), 2);
}

#[test]
fn range_changing_is_a_pure_translation() {
    let mut graph = TimeGraph::with_options(range(), plain_line());
    graph.set_viewport(100.0, 300.0);
    graph.set_items(Some(DataSource::Set(ramp_items())));
    let before = match &graph.surface().shapes()[0] {
        Shape::Path { d, .. } => d.clone(),
        other => panic!("expected a path, got {other:?}"),
    };

    // Pan 10ms to the right: 1px per ms at this zoom level.
    graph.on_range_changing(TimeRange::new(t(10), t(110)));
    assert_eq!(graph.surface().left, -110.0);
    // No regeneration happened.
    match &graph.surface().shapes()[0] {
        Shape::Path { d, .. } => assert_eq!(d, &before),
        other => panic!("expected a path, got {other:?}"),
    }

    // Gesture end: surface re-anchors and the graph regenerates for the new
    // window.
    graph.on_range_changed(TimeRange::new(t(10), t(110)));
    assert_eq!(graph.surface().left, -100.0);
    match &graph.surface().shapes()[0] {
        Shape::Path { d, .. } => assert_ne!(d, &before),
        other => panic!("expected a path, got {other:?}"),
    }
}

#[test]
fn empty_group_draw_pass_is_a_noop() {
    let mut graph = TimeGraph::with_options(range(), plain_line());
    graph.set_viewport(100.0, 300.0);
    graph.set_items(Some(DataSource::Set(DataSet::new())));
    assert!(graph.surface().shapes().is_empty());
}

#[test]
fn zero_width_viewport_draws_nothing() {
    let mut graph = TimeGraph::with_options(range(), plain_line());
    graph.set_items(Some(DataSource::Set(ramp_items())));
    assert!(graph.surface().shapes().is_empty());
}
