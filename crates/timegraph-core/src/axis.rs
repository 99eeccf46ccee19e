// File: crates/timegraph-core/src/axis.rs
// Summary: Value (Y) axis: range to pixel mapping, visibility, tick-step alignment.

use crate::options::AxisOrientation;
use crate::types::{AxisRange, GroupId};

// Target pixel distance between minor tick lines.
const MINOR_STEP_PIXELS: f64 = 25.0;

/// One side of the dual Y axis.
///
/// When both sides are in use the left axis is the master driving the shared
/// tick spacing (`step_pixels`); the right axis then takes
/// `step_pixels_forced` so gridlines align even though the two sides scale
/// independent data ranges.
#[derive(Debug, Clone)]
pub struct DataAxis {
    pub orientation: AxisOrientation,
    range: AxisRange,
    height: f64,
    visible: bool,
    /// True when this axis drives the shared tick spacing.
    pub master: bool,
    pub draw_icons: bool,
    pub step_pixels: f64,
    pub step_pixels_forced: Option<f64>,
    /// Horizontal offset of this axis' grid lines, in pixels. Non-zero on the
    /// left axis when the right axis is also shown.
    pub line_offset: f64,
    /// Width of the axis panel in pixels.
    pub width: f64,
    groups: Vec<GroupId>,
}

impl DataAxis {
    pub fn new(orientation: AxisOrientation, height: f64) -> Self {
        Self {
            orientation,
            range: AxisRange::default(),
            height,
            visible: false,
            master: orientation == AxisOrientation::Left,
            draw_icons: false,
            step_pixels: MINOR_STEP_PIXELS,
            step_pixels_forced: None,
            line_offset: 0.0,
            width: 40.0,
            groups: Vec::new(),
        }
    }

    pub fn set_height(&mut self, height: f64) {
        self.height = height;
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn set_range(&mut self, range: AxisRange) {
        self.range = range;
    }

    pub fn range(&self) -> AxisRange {
        self.range
    }

    /// Map a data value into pixel space. The range start lands on the bottom
    /// edge (`height`) and the range end on the top edge (0); a zero-span
    /// range is widened to 1 so the mapping stays finite.
    pub fn convert_value(&self, value: f64) -> f64 {
        let span = self.range.span();
        let scale = self.height / if span > 0.0 { span } else { 1.0 };
        self.height - (value - self.range.start) * scale
    }

    /// Show or hide the axis depending on whether any group uses this side.
    /// Returns true when the visibility actually changed, so the caller can
    /// emit a layout-changed signal.
    pub fn toggle_visibility(&mut self, used: bool) -> bool {
        if self.visible != used {
            self.visible = used;
            true
        } else {
            false
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Recompute the tick spacing. A forced spacing (set by the master side)
    /// wins over the derived one.
    pub fn redraw(&mut self) {
        self.step_pixels = match self.step_pixels_forced {
            Some(forced) => forced,
            None => {
                let steps = (self.height / MINOR_STEP_PIXELS).round().max(1.0);
                self.height / steps
            }
        };
    }

    // Group roster, used for icon drawing and ungrouped reconciliation.

    pub fn add_group(&mut self, id: &str) {
        if !self.groups.iter().any(|g| g == id) {
            self.groups.push(id.to_string());
        }
    }

    pub fn remove_group(&mut self, id: &str) {
        self.groups.retain(|g| g != id);
    }

    pub fn has_group(&self, id: &str) -> bool {
        self.groups.iter().any(|g| g == id)
    }

    pub fn groups(&self) -> &[GroupId] {
        &self.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_value_maps_range_to_pixels() {
        let mut axis = DataAxis::new(AxisOrientation::Left, 300.0);
        axis.set_range(AxisRange::new(0.0, 300.0));
        assert_eq!(axis.convert_value(0.0), 300.0);
        assert_eq!(axis.convert_value(300.0), 0.0);
        assert_eq!(axis.convert_value(150.0), 150.0);
    }

    #[test]
    fn zero_span_range_stays_finite() {
        let mut axis = DataAxis::new(AxisOrientation::Left, 300.0);
        axis.set_range(AxisRange::new(5.0, 5.0));
        assert!(axis.convert_value(5.0).is_finite());
    }

    #[test]
    fn forced_step_pixels_win() {
        let mut axis = DataAxis::new(AxisOrientation::Right, 300.0);
        axis.redraw();
        assert_eq!(axis.step_pixels, 25.0);
        axis.step_pixels_forced = Some(17.5);
        axis.redraw();
        assert_eq!(axis.step_pixels, 17.5);
    }
}
