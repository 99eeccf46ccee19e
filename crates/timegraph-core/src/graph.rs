// File: crates/timegraph-core/src/graph.rs
// Summary: Graph renderer: orchestrates axis scaling, per-group draw passes, and the
//          three-viewport-wide scrolling surface.

use std::any::Any;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use crate::axis::DataAxis;
use crate::component::Component;
use crate::curve;
use crate::error::GraphError;
use crate::group::{GraphGroup, GroupRecord, StylePool};
use crate::options::{
    AxisOrientation, GraphOptions, GraphOptionsPatch, GraphStyle, ShadedOrientation,
};
use crate::store::{DataSet, DataSource, DataView, GroupSet};
use crate::surface::{Shape, Surface};
use crate::types::{AxisRange, GroupId, ItemId, PlotPoint, TimeRange, DEFAULT_HEIGHT, UNGROUPED};

/// Signal emitted towards the outer layout controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GraphEvent {
    /// Axis visibility toggled; the outer layout should reflow.
    LayoutChanged,
}

type ChangeListener = Box<dyn FnMut(GraphEvent)>;

/// Time-series graph: renders line and bar series onto a scrollable,
/// zoomable horizontal timeline.
///
/// All state is owned here and mutated synchronously from notification and
/// range-signal entry points; a redraw is a bounded pass over the current
/// group/item state.
pub struct TimeGraph {
    options: GraphOptions,
    groups: IndexMap<GroupId, GraphGroup>,
    style_pool: StylePool,
    y_axis_left: DataAxis,
    y_axis_right: DataAxis,
    surface: Surface,
    items: Option<DataSource>,
    groups_data: Option<GroupSet>,
    range: TimeRange,
    last_start: DateTime<Utc>,
    /// Visible viewport width in pixels, as of the last `redraw`.
    width: f64,
    /// Container width reported by the host via `set_viewport`.
    frame_width: f64,
    last_width: Option<f64>,
    last_visible_interval: Option<i64>,
    zero_position: f64,
    visible: bool,
    change_listener: Option<ChangeListener>,
}

impl TimeGraph {
    pub fn new(range: TimeRange) -> Self {
        Self {
            options: GraphOptions::default(),
            groups: IndexMap::new(),
            style_pool: StylePool::new(),
            y_axis_left: DataAxis::new(AxisOrientation::Left, DEFAULT_HEIGHT),
            y_axis_right: DataAxis::new(AxisOrientation::Right, DEFAULT_HEIGHT),
            surface: Surface::new(DEFAULT_HEIGHT),
            items: None,
            groups_data: None,
            range,
            last_start: range.start,
            width: 0.0,
            frame_width: 0.0,
            last_width: None,
            last_visible_interval: None,
            zero_position: 0.0,
            visible: true,
            change_listener: None,
        }
    }

    pub fn with_options(range: TimeRange, patch: GraphOptionsPatch) -> Self {
        let mut graph = Self::new(range);
        graph.set_options(&patch);
        graph
    }

    /// Merge a partial option override into the shared defaults. Groups pick
    /// the new defaults up on their next create/update.
    pub fn set_options(&mut self, patch: &GraphOptionsPatch) {
        self.options.apply(patch);
        self.y_axis_left.width = self.options.data_axis.width;
        self.y_axis_right.width = self.options.data_axis.width;
    }

    pub fn options(&self) -> &GraphOptions {
        &self.options
    }

    /// Register the listener receiving [`GraphEvent`]s.
    pub fn set_change_listener(&mut self, listener: impl FnMut(GraphEvent) + 'static) {
        self.change_listener = Some(Box::new(listener));
    }

    /// Inform the graph of its container size. The width is picked up on the
    /// next `redraw`; the height applies to the surface and both axes now.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.frame_width = width;
        self.surface.height = height;
        self.y_axis_left.set_height(height);
        self.y_axis_right.set_height(height);
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn items(&self) -> Option<&DataSource> {
        self.items.as_ref()
    }

    /// Mutable access to the assigned container so the host can apply
    /// add/update/remove operations before notifying the graph.
    pub fn items_mut(&mut self) -> Option<&mut DataSource> {
        self.items.as_mut()
    }

    pub fn y_axis_left(&self) -> &DataAxis {
        &self.y_axis_left
    }

    pub fn y_axis_right(&self) -> &DataAxis {
        &self.y_axis_right
    }

    pub fn group(&self, id: &str) -> Option<&GraphGroup> {
        self.groups.get(id)
    }

    /// Pixel y of data value 0, clamped to the surface, as computed by the
    /// most recent projection pass.
    pub fn zero_position(&self) -> f64 {
        self.zero_position
    }

    pub fn visible_range(&self) -> TimeRange {
        self.range
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    // ---- container assignment ----------------------------------------------

    /// Swap the item container. Passing `None` detaches the current one.
    pub fn set_items(&mut self, items: Option<DataSource>) {
        if let Some(old) = self.items.take() {
            log::debug!("detaching item container ({} items)", old.ids().len());
        }
        self.items = items;
        self.reconcile_ungrouped();
        self.update_graph();
        self.redraw();
    }

    /// Dynamically-typed variant of [`set_items`](Self::set_items) for hosts
    /// that only hold the container behind `dyn Any`. Anything that is not a
    /// `DataSet`, `DataView`, or `DataSource` is rejected up front and the
    /// previous container stays assigned untouched.
    pub fn set_items_dyn(&mut self, container: Box<dyn Any>) -> Result<(), GraphError> {
        let source = match container.downcast::<DataSet>() {
            Ok(set) => DataSource::Set(*set),
            Err(container) => match container.downcast::<DataView>() {
                Ok(view) => DataSource::View(*view),
                Err(container) => match container.downcast::<DataSource>() {
                    Ok(source) => *source,
                    Err(_) => return Err(GraphError::InvalidContainer),
                },
            },
        };
        self.set_items(Some(source));
        Ok(())
    }

    /// Swap the group metadata container.
    pub fn set_groups(&mut self, groups: Option<GroupSet>) {
        if let Some(old) = self.groups_data.take() {
            let old_ids = old.ids();
            self.prune_groups(&old_ids);
        }
        self.groups_data = groups;
        let ids = self.groups_data.as_ref().map(|g| g.ids()).unwrap_or_default();
        self.on_update_groups(&ids);
    }

    // ---- store notifications -----------------------------------------------

    pub fn on_add(&mut self, ids: &[ItemId]) {
        self.on_update(ids);
    }

    pub fn on_update(&mut self, _ids: &[ItemId]) {
        self.reconcile_ungrouped();
        self.update_graph();
        self.redraw();
    }

    pub fn on_remove(&mut self, ids: &[ItemId]) {
        self.on_update(ids);
    }

    pub fn on_add_groups(&mut self, ids: &[GroupId]) {
        self.on_update_groups(ids);
    }

    pub fn on_update_groups(&mut self, ids: &[GroupId]) {
        for id in ids {
            let record = self
                .groups_data
                .as_ref()
                .and_then(|groups| groups.get(id).cloned());
            let Some(record) = record else { continue };
            if self.groups.contains_key(id) {
                let defaults = self.options.clone();
                if let Some(group) = self.groups.get_mut(id) {
                    group.update(&record, &defaults);
                }
                if let Some(group) = self.groups.get(id).cloned() {
                    self.register_axis_group(&group);
                }
            } else {
                self.install_group(&record);
            }
        }
        self.reconcile_ungrouped();
        self.update_graph();
        self.redraw();
    }

    pub fn on_remove_groups(&mut self, ids: &[GroupId]) {
        self.prune_groups(ids);
        self.reconcile_ungrouped();
        self.update_graph();
        self.redraw();
    }

    // ---- range signals -----------------------------------------------------

    /// Continuous pan/zoom update: reposition the surface only, no path
    /// regeneration. Pans up to a full viewport width stay within the
    /// pre-rendered three-viewport-wide surface.
    pub fn on_range_changing(&mut self, range: TimeRange) {
        self.range = range;
        let interval = range.interval_ms() as f64;
        if self.width != 0.0 && interval > 0.0 {
            let offset_ms = (range.start - self.last_start).num_milliseconds() as f64;
            let px_per_ms = self.width / interval;
            self.surface.left = -self.width - offset_ms * px_per_ms;
        }
    }

    /// Finalized range change (end of a pan/zoom gesture): re-anchor the
    /// surface and regenerate the graph for the new window.
    pub fn on_range_changed(&mut self, range: TimeRange) {
        self.range = range;
        self.last_start = range.start;
        self.surface.left = -self.width;
        self.update_graph();
    }

    /// Recompute size-dependent state. Returns true when the container size
    /// changed; zooming (visible interval or width change) triggers a full
    /// graph regeneration.
    pub fn redraw(&mut self) -> bool {
        let resized = self.last_width != Some(self.frame_width);
        let visible_interval = self.range.interval_ms();
        let zoomed = self.last_visible_interval != Some(visible_interval) || resized;
        self.last_visible_interval = Some(visible_interval);
        self.last_width = Some(self.frame_width);
        self.width = self.frame_width;

        if resized {
            // Surface is three viewports wide with the visible window in the
            // middle third, so a pan is a pure translation.
            self.surface.width = 3.0 * self.width;
            self.surface.left = -self.width;
        }
        if zoomed {
            self.update_graph();
        }
        resized
    }

    // ---- group table maintenance -------------------------------------------

    /// Create or delete the reserved bucket holding all ungrouped items.
    ///
    /// Contract: items with no group are rewritten in the underlying store to
    /// carry the reserved [`UNGROUPED`] id. That mutation is visible to every
    /// other holder of the container; callers that hand the graph a shared
    /// store accept this. The bucket itself exists exactly while such items
    /// do.
    pub fn reconcile_ungrouped(&mut self) {
        let record = GroupRecord::new(UNGROUPED, "graph");
        if self.groups.contains_key(UNGROUPED) {
            let defaults = self.options.clone();
            if let Some(group) = self.groups.get_mut(UNGROUPED) {
                group.update(&record, &defaults);
            }
            if let Some(group) = self.groups.get(UNGROUPED).cloned() {
                self.register_axis_group(&group);
            }
        } else {
            self.install_group(&record);
        }

        if let Some(items) = self.items.as_mut() {
            let groupless = items.ungrouped_ids();
            if !groupless.is_empty() {
                log::debug!("migrating {} groupless items into the reserved bucket", groupless.len());
                items.assign_group(&groupless, UNGROUPED);
            }
            if items.count_in_group(UNGROUPED) == 0 {
                self.groups.shift_remove(UNGROUPED);
                self.y_axis_left.remove_group(UNGROUPED);
                self.y_axis_right.remove_group(UNGROUPED);
            }
        }
    }

    /// Drop groups no longer referenced by any item.
    fn prune_groups(&mut self, ids: &[GroupId]) {
        for id in ids {
            let referenced = self
                .items
                .as_ref()
                .map(|items| items.count_in_group(id) > 0)
                .unwrap_or(false);
            if !referenced {
                self.groups.shift_remove(id.as_str());
                self.y_axis_left.remove_group(id);
                self.y_axis_right.remove_group(id);
            }
        }
    }

    fn install_group(&mut self, record: &GroupRecord) {
        let group = GraphGroup::new(record, &self.options, &mut self.style_pool);
        self.register_axis_group(&group);
        self.groups.insert(record.id.clone(), group);
    }

    /// Groups referenced by the data but never described by the group
    /// container still get a table entry on first occurrence.
    fn ensure_group(&mut self, id: &str) {
        if self.groups.contains_key(id) {
            return;
        }
        let record = self
            .groups_data
            .as_ref()
            .and_then(|groups| groups.get(id).cloned())
            .unwrap_or_else(|| GroupRecord::new(id, id));
        self.install_group(&record);
    }

    fn register_axis_group(&mut self, group: &GraphGroup) {
        match group.options.y_axis_orientation {
            AxisOrientation::Left => {
                self.y_axis_right.remove_group(&group.id);
                self.y_axis_left.add_group(&group.id);
            }
            AxisOrientation::Right => {
                self.y_axis_left.remove_group(&group.id);
                self.y_axis_right.add_group(&group.id);
            }
        }
    }

    // ---- drawing -----------------------------------------------------------

    /// Full regeneration: reclaim every primitive, recompute axis ranges and
    /// visibility for the groups present in the data, and redraw each group.
    pub fn update_graph(&mut self) {
        self.surface.begin_frame();

        if self.width != 0.0 && self.items.is_some() {
            let group_ids = self
                .items
                .as_ref()
                .map(|items| items.distinct_groups())
                .unwrap_or_default();
            if !group_ids.is_empty() {
                log::trace!("redrawing {} groups", group_ids.len());
                self.update_y_axis(&group_ids);
                for id in &group_ids {
                    self.draw_graph(id);
                }
            }
        }

        self.surface.end_frame();
    }

    /// Set the Y ranges per axis side and decide which sides are shown.
    /// Emits [`GraphEvent::LayoutChanged`] when visibility toggled.
    fn update_y_axis(&mut self, group_ids: &[GroupId]) {
        for id in group_ids {
            self.ensure_group(id);
        }

        let mut left_used = false;
        let mut right_used = false;
        let (mut min_left, mut max_left) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut min_right, mut max_right) = (f64::INFINITY, f64::NEG_INFINITY);

        for id in group_ids {
            let orientation = self
                .groups
                .get(id.as_str())
                .map(|group| group.options.y_axis_orientation)
                .unwrap_or_default();
            let extent = self.items.as_ref().and_then(|items| items.y_extent(id));
            let Some((min_val, max_val)) = extent else { continue };
            match orientation {
                AxisOrientation::Left => {
                    left_used = true;
                    min_left = min_left.min(min_val);
                    max_left = max_left.max(max_val);
                }
                AxisOrientation::Right => {
                    right_used = true;
                    min_right = min_right.min(min_val);
                    max_right = max_right.max(max_val);
                }
            }
        }

        if left_used {
            self.y_axis_left.set_range(AxisRange::new(min_left, max_left));
        }
        if right_used {
            self.y_axis_right.set_range(AxisRange::new(min_right, max_right));
        }

        let mut changed = self.y_axis_left.toggle_visibility(left_used);
        changed |= self.y_axis_right.toggle_visibility(right_used);
        if changed {
            if let Some(listener) = self.change_listener.as_mut() {
                listener(GraphEvent::LayoutChanged);
            }
        }

        let both_used = left_used && right_used;
        self.y_axis_left.draw_icons = both_used;
        self.y_axis_right.draw_icons = both_used;

        self.y_axis_right.master = !left_used;
        if self.y_axis_right.master {
            self.y_axis_right.step_pixels_forced = None;
            self.y_axis_right.redraw();
        } else {
            if right_used {
                self.y_axis_left.line_offset = self.y_axis_right.width;
            }
            self.y_axis_left.redraw();
            self.y_axis_right.step_pixels_forced = Some(self.y_axis_left.step_pixels);
            self.y_axis_right.redraw();
        }
    }

    fn draw_graph(&mut self, group_id: &str) {
        let samples = match self.items.as_ref() {
            Some(items) => items.items_in_group(group_id),
            None => return,
        };
        let Some(group) = self.groups.get(group_id).cloned() else { return };
        match group.options.style {
            GraphStyle::Line => self.draw_line_graph(&samples, &group),
            GraphStyle::Bar => self.draw_bar_graph(&samples, &group),
        }
    }

    fn draw_line_graph(&mut self, samples: &[(DateTime<Utc>, f64)], group: &GraphGroup) {
        if samples.is_empty() {
            return;
        }
        let dataset = self.prepare_data(samples, &group.options);

        let d = if group.options.catmull_rom.enabled {
            curve::catmull_rom(&dataset, group.options.catmull_rom.alpha)
        } else {
            curve::linear(&dataset)
        };

        if group.options.shaded.enabled {
            let baseline = match group.options.shaded.orientation {
                ShadedOrientation::Top => 0.0,
                ShadedOrientation::Bottom => self.surface.height,
            };
            let first = dataset[0];
            let last = dataset[dataset.len() - 1];
            // Outline: baseline under the first point, the curve itself, then
            // the baseline under the last point; the fill closes back to the
            // start implicitly.
            let d_fill = format!(
                "M{},{} {} L{},{}",
                first.x,
                baseline,
                d.replacen('M', "L", 1),
                last.x,
                baseline
            );
            self.surface.submit(Shape::Path {
                d: d_fill,
                class: format!("{} fill", group.class_name),
            });
        }

        self.surface.submit(Shape::Path { d, class: group.class_name.clone() });

        if group.options.draw_points.enabled {
            self.draw_points(&dataset, group);
        }
    }

    fn draw_bar_graph(&mut self, samples: &[(DateTime<Utc>, f64)], group: &GraphGroup) {
        if samples.is_empty() {
            return;
        }
        let dataset = self.prepare_data(samples, &group.options);
        let width = group.options.bar_chart.width;

        for point in &dataset {
            self.surface.submit(Shape::Rect {
                x: point.x - 0.5 * width,
                y: point.y,
                width,
                height: self.zero_position - point.y,
                class: format!("{} bar", group.class_name),
            });
        }

        if group.options.draw_points.enabled {
            self.draw_points(&dataset, group);
        }
    }

    fn draw_points(&mut self, dataset: &[PlotPoint], group: &GraphGroup) {
        for point in dataset {
            self.surface.submit(Shape::Point {
                x: point.x,
                y: point.y,
                size: group.options.draw_points.size,
                style: group.options.draw_points.style,
                class: format!("{} point", group.class_name),
            });
        }
    }

    /// Project raw samples into screen space. X maps through the visible time
    /// window plus one viewport width (the middle third of the surface); Y
    /// goes through the group's axis side. Also computes the shared zero
    /// baseline for this pass, clamped to the surface height so a strictly
    /// positive dataset keeps its baseline on the bottom edge.
    fn prepare_data(
        &mut self,
        samples: &[(DateTime<Utc>, f64)],
        options: &GraphOptions,
    ) -> Vec<PlotPoint> {
        let (extracted, zero_position) = {
            let axis = match options.y_axis_orientation {
                AxisOrientation::Left => &self.y_axis_left,
                AxisOrientation::Right => &self.y_axis_right,
            };
            let mut extracted = Vec::with_capacity(samples.len());
            for &(x, y) in samples {
                let sx = self.to_screen(x) + self.width;
                let sy = axis.convert_value(y);
                extracted.push(PlotPoint::new(sx, sy));
            }
            (extracted, self.surface.height.min(axis.convert_value(0.0)))
        };
        self.zero_position = zero_position;
        extracted
    }

    /// Pixel x of a timestamp relative to the visible window start.
    fn to_screen(&self, t: DateTime<Utc>) -> f64 {
        let interval = self.range.interval_ms() as f64;
        if interval <= 0.0 {
            return 0.0;
        }
        let offset = (t - self.range.start).num_milliseconds() as f64;
        offset * (self.width / interval)
    }
}

impl Component for TimeGraph {
    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn redraw(&mut self) -> bool {
        TimeGraph::redraw(self)
    }
}
