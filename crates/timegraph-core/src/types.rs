// File: crates/timegraph-core/src/types.rs
// Summary: Shared types and constants (ids, ranges, screen-space points).

use chrono::{DateTime, Utc};

/// Identifier of a data item inside a [`crate::store::DataSet`].
pub type ItemId = String;
/// Identifier of a series/group.
pub type GroupId = String;

/// Reserved group id for items that carry no explicit group.
/// Never collides with user ids by convention.
pub const UNGROUPED: &str = "__ungrouped__";

/// Default drawing surface height in pixels.
pub const DEFAULT_HEIGHT: f64 = 300.0;

/// Visible time window of the timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Width of the visible window in milliseconds.
    pub fn interval_ms(&self) -> i64 {
        (self.end - self.start).num_milliseconds()
    }
}

/// Y value range of one axis side.
/// Contract: `start <= end` for ranges produced by the renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisRange {
    pub start: f64,
    pub end: f64,
}

impl AxisRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn span(&self) -> f64 {
        self.end - self.start
    }
}

/// A point in screen space (pixels), after time/value projection.
/// Ephemeral: recomputed every redraw pass, never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

impl PlotPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &PlotPoint) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}
