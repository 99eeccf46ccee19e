// File: crates/timegraph-core/tests/store.rs
// Purpose: Validate the item container: queries, aggregation, and the
//          dynamically-typed assignment path.

use chrono::{Duration, TimeZone, Utc};
use timegraph_core::store::{DataSet, DataView, Item};
use timegraph_core::{GraphError, TimeGraph, TimeRange};

fn t(ms: i64) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2014, 1, 1, 0, 0, 0).unwrap() + Duration::milliseconds(ms)
}

fn range() -> TimeRange {
    TimeRange::new(t(0), t(100))
}

#[test]
fn distinct_groups_in_first_occurrence_order() {
    let mut set = DataSet::new();
    set.add("1", Item::new(t(0), 1.0, Some("b".into())));
    set.add("2", Item::new(t(10), 2.0, Some("a".into())));
    set.add("3", Item::new(t(20), 3.0, Some("b".into())));
    assert_eq!(set.distinct_groups(), vec!["b".to_string(), "a".to_string()]);
}

#[test]
fn y_extent_ignores_non_finite_values() {
    let mut set = DataSet::new();
    set.add("1", Item::new(t(0), 5.0, Some("g".into())));
    set.add("2", Item::new(t(10), f64::NAN, Some("g".into())));
    set.add("3", Item::new(t(20), f64::INFINITY, Some("g".into())));
    set.add("4", Item::new(t(30), -2.0, Some("g".into())));
    assert_eq!(set.y_extent("g"), Some((-2.0, 5.0)));
}

#[test]
fn y_extent_is_none_without_finite_data() {
    let mut set = DataSet::new();
    set.add("1", Item::new(t(0), f64::NAN, Some("g".into())));
    assert_eq!(set.y_extent("g"), None);
    assert_eq!(set.y_extent("missing"), None);
}

#[test]
fn items_preserve_insertion_order_per_group() {
    let mut set = DataSet::new();
    set.add("1", Item::new(t(0), 1.0, Some("g".into())));
    set.add("2", Item::new(t(10), 2.0, Some("other".into())));
    set.add("3", Item::new(t(20), 3.0, Some("g".into())));
    let samples = set.items_in_group("g");
    assert_eq!(samples, vec![(t(0), 1.0), (t(20), 3.0)]);
}

#[test]
fn view_narrows_to_its_group() {
    let mut set = DataSet::new();
    set.add("1", Item::new(t(0), 1.0, Some("g".into())));
    set.add("2", Item::new(t(10), 2.0, Some("other".into())));
    let view = DataView::new(set, "g");

    let mut graph = TimeGraph::new(range());
    graph
        .set_items_dyn(Box::new(view))
        .expect("view is a valid container");
    let items = graph.items().expect("container assigned");
    assert_eq!(items.distinct_groups(), vec!["g".to_string()]);
    assert!(items.items_in_group("other").is_empty());
}

#[test]
fn dyn_assignment_rejects_foreign_containers() {
    let mut graph = TimeGraph::new(range());
    let mut set = DataSet::new();
    set.add("1", Item::new(t(0), 1.0, Some("g".into())));
    graph.set_items_dyn(Box::new(set)).expect("DataSet accepted");

    let err = graph
        .set_items_dyn(Box::new(vec![1.0f64, 2.0]))
        .expect_err("a Vec is not a data container");
    assert!(matches!(err, GraphError::InvalidContainer));
    // The previous container must stay assigned untouched.
    let items = graph.items().expect("old container still assigned");
    assert_eq!(items.ids(), vec!["1".to_string()]);
}
