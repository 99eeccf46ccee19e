// File: crates/timegraph-core/src/component.rs
// Summary: Capability contract for widgets embedded in the timeline layout.

/// Minimal lifecycle contract a timeline widget exposes to the outer layout.
pub trait Component {
    /// Make the widget part of the layout.
    fn show(&mut self);
    /// Detach the widget from the layout.
    fn hide(&mut self);
    /// Recompute size-dependent state and repaint.
    /// Returns true when the widget's size changed.
    fn redraw(&mut self) -> bool;
}
