// File: crates/timegraph-examples/src/bin/lines.rs
// Summary: Minimal example that renders two series and prints the generated shapes.

use anyhow::Result;
use chrono::{Duration, TimeZone, Utc};
use timegraph_core::group::GroupRecord;
use timegraph_core::options::GraphOptionsPatch;
use timegraph_core::store::{DataSet, DataSource, GroupSet, Item};
use timegraph_core::{AxisOrientation, GraphStyle, Shape, TimeGraph, TimeRange};

fn main() -> Result<()> {
    let start = Utc.with_ymd_and_hms(2014, 1, 1, 0, 0, 0).unwrap();
    let range = TimeRange::new(start, start + Duration::seconds(60));

    // Two groups: a smooth line on the left axis, bars on the right axis.
    let mut groups = GroupSet::new();
    groups.add(GroupRecord::new("signal", "Signal"));
    groups.add(
        GroupRecord::new("load", "Load").with_options(GraphOptionsPatch {
            style: Some(GraphStyle::Bar),
            y_axis_orientation: Some(AxisOrientation::Right),
            ..Default::default()
        }),
    );

    let mut set = DataSet::new();
    for i in 0..60 {
        let t = start + Duration::seconds(i);
        let phase = i as f64 / 60.0 * std::f64::consts::TAU;
        set.add(
            format!("signal-{i}"),
            Item::new(t, phase.sin() * 40.0, Some("signal".into())),
        );
        if i % 5 == 0 {
            set.add(
                format!("load-{i}"),
                Item::new(t, 20.0 + (i as f64) * 0.5, Some("load".into())),
            );
        }
    }

    let mut graph = TimeGraph::new(range);
    graph.set_viewport(800.0, 300.0);
    graph.set_groups(Some(groups));
    graph.set_items(Some(DataSource::Set(set)));

    for shape in graph.surface().shapes() {
        match shape {
            Shape::Path { d, class } => {
                let head: String = d.chars().take(40).collect();
                println!("path  [{class}] {head}...");
            }
            Shape::Rect { x, y, width, height, class } => {
                println!("rect  [{class}] x={x:.1} y={y:.1} w={width:.1} h={height:.1}");
            }
            Shape::Point { x, y, size, .. } => {
                println!("point x={x:.1} y={y:.1} size={size}");
            }
        }
    }
    println!("{} shapes total", graph.surface().shapes().len());
    Ok(())
}
