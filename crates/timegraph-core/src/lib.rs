// File: crates/timegraph-core/src/lib.rs
// Summary: Core library entry point; exports the time-series graph API.

pub mod axis;
pub mod component;
pub mod curve;
pub mod error;
pub mod graph;
pub mod group;
pub mod options;
pub mod store;
pub mod surface;
pub mod types;

pub use axis::DataAxis;
pub use component::Component;
pub use error::GraphError;
pub use graph::{GraphEvent, TimeGraph};
pub use group::{GraphGroup, GroupRecord, StylePool};
pub use options::{
    AxisOrientation, GraphOptions, GraphOptionsPatch, GraphStyle, Parametrization, PointStyle,
    ShadedOrientation,
};
pub use store::{DataSet, DataSource, DataView, GroupSet, Item};
pub use surface::{Shape, Surface};
pub use types::{AxisRange, PlotPoint, TimeRange, UNGROUPED};
