// File: crates/timegraph-core/src/surface.rs
// Summary: Retained arena of drawable primitives, recycled frame by frame.

use crate::options::PointStyle;

/// One drawable primitive submitted to the surface.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Path {
        d: String,
        class: String,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        class: String,
    },
    Point {
        x: f64,
        y: f64,
        size: f64,
        style: PointStyle,
        class: String,
    },
}

/// Drawing surface holding reusable shape slots, keyed by insertion order.
///
/// Frame protocol: `begin_frame` marks every slot stale, `submit` fills slots
/// back in submission order (reusing existing ones), `end_frame` drops the
/// stale tail. The surface is rendered three viewports wide with the visible
/// window in the middle third; `left` carries the translation applied during
/// a pan so paths need not be regenerated.
#[derive(Debug, Default)]
pub struct Surface {
    shapes: Vec<Shape>,
    live: usize,
    pub width: f64,
    pub height: f64,
    pub left: f64,
}

impl Surface {
    pub fn new(height: f64) -> Self {
        Self {
            shapes: Vec::new(),
            live: 0,
            width: 0.0,
            height,
            left: 0.0,
        }
    }

    /// Start a redraw pass; previously submitted shapes become reusable.
    pub fn begin_frame(&mut self) {
        self.live = 0;
    }

    /// Claim the next slot for `shape`, reusing an existing slot when one is
    /// available at this position. Returns the slot index.
    pub fn submit(&mut self, shape: Shape) -> usize {
        let index = self.live;
        if index < self.shapes.len() {
            self.shapes[index] = shape;
        } else {
            self.shapes.push(shape);
        }
        self.live += 1;
        index
    }

    /// Finish the pass, discarding slots not reclaimed this frame.
    pub fn end_frame(&mut self) {
        self.shapes.truncate(self.live);
    }

    /// Shapes submitted in the current frame, in submission order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes[..self.live]
    }
}
