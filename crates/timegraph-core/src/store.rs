// File: crates/timegraph-core/src/store.rs
// Summary: Item container (DataSet/DataView) with group-filtered queries and aggregation.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use crate::group::GroupRecord;
use crate::types::{GroupId, ItemId};

/// One raw record: a timestamped value, optionally assigned to a group.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub x: DateTime<Utc>,
    pub y: f64,
    pub group: Option<GroupId>,
}

impl Item {
    pub fn new(x: DateTime<Utc>, y: f64, group: Option<GroupId>) -> Self {
        Self { x, y, group }
    }
}

/// Insertion-ordered item container. Items are expected to arrive in
/// ascending x order per group; queries preserve insertion order and do not
/// re-sort, so callers own that invariant.
#[derive(Clone, Debug, Default)]
pub struct DataSet {
    items: IndexMap<ItemId, Item>,
}

impl DataSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new item (or replace an existing one with the same id).
    /// Returns the id for convenience when chaining into notifications.
    pub fn add(&mut self, id: impl Into<ItemId>, item: Item) -> ItemId {
        let id = id.into();
        self.items.insert(id.clone(), item);
        id
    }

    /// Replace an existing item, inserting when absent.
    pub fn update(&mut self, id: impl Into<ItemId>, item: Item) -> ItemId {
        self.add(id, item)
    }

    /// Remove an item by id. Preserves the order of the remaining items.
    pub fn remove(&mut self, id: &str) -> Option<Item> {
        self.items.shift_remove(id)
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    pub fn ids(&self) -> Vec<ItemId> {
        self.items.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// (x, y) samples of one group, in insertion order.
    pub fn items_in_group(&self, group: &str) -> Vec<(DateTime<Utc>, f64)> {
        self.items
            .values()
            .filter(|item| item.group.as_deref() == Some(group))
            .map(|item| (item.x, item.y))
            .collect()
    }

    pub fn count_in_group(&self, group: &str) -> usize {
        self.items
            .values()
            .filter(|item| item.group.as_deref() == Some(group))
            .count()
    }

    /// Distinct group ids in first-occurrence order. Items without a group do
    /// not contribute (they are folded into the reserved bucket by the
    /// renderer's reconcile pass before drawing).
    pub fn distinct_groups(&self) -> Vec<GroupId> {
        let mut out: Vec<GroupId> = Vec::new();
        for item in self.items.values() {
            if let Some(group) = &item.group {
                if !out.iter().any(|g| g == group) {
                    out.push(group.clone());
                }
            }
        }
        out
    }

    /// Min/max of y over a group. Only finite values contribute; `None` when
    /// the group has no finite data.
    pub fn y_extent(&self, group: &str) -> Option<(f64, f64)> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut any = false;
        for item in self.items.values() {
            if item.group.as_deref() == Some(group) && item.y.is_finite() {
                min = min.min(item.y);
                max = max.max(item.y);
                any = true;
            }
        }
        if any { Some((min, max)) } else { None }
    }

    /// Ids of items with no group assigned.
    pub fn ungrouped_ids(&self) -> Vec<ItemId> {
        self.items
            .iter()
            .filter(|(_, item)| item.group.is_none())
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Rewrite the group field of the given items. Used by the renderer's
    /// ungrouped-reconcile pass; the mutation is visible to every other
    /// holder of this set.
    pub fn assign_group(&mut self, ids: &[ItemId], group: &str) {
        for id in ids {
            if let Some(item) = self.items.get_mut(id.as_str()) {
                item.group = Some(group.to_string());
            }
        }
    }
}

/// Read view over a [`DataSet`], narrowed to a single group. Mutations pass
/// through to the underlying set.
#[derive(Clone, Debug)]
pub struct DataView {
    set: DataSet,
    filter: GroupId,
}

impl DataView {
    pub fn new(set: DataSet, filter: impl Into<GroupId>) -> Self {
        Self { set, filter: filter.into() }
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn set(&self) -> &DataSet {
        &self.set
    }

    pub fn set_mut(&mut self) -> &mut DataSet {
        &mut self.set
    }
}

/// The swappable item container accepted by the graph. Anything else is
/// rejected at assignment time; see `TimeGraph::set_items_dyn`.
#[derive(Clone, Debug)]
pub enum DataSource {
    Set(DataSet),
    View(DataView),
}

impl DataSource {
    fn passes(&self, group: &str) -> bool {
        match self {
            DataSource::Set(_) => true,
            DataSource::View(view) => view.filter() == group,
        }
    }

    /// The underlying set (the view's backing set for `View`).
    pub fn set(&self) -> &DataSet {
        match self {
            DataSource::Set(set) => set,
            DataSource::View(view) => view.set(),
        }
    }

    /// Mutable access to the underlying set, for hosts driving add/update/
    /// remove notifications.
    pub fn set_mut(&mut self) -> &mut DataSet {
        match self {
            DataSource::Set(set) => set,
            DataSource::View(view) => view.set_mut(),
        }
    }

    pub fn ids(&self) -> Vec<ItemId> {
        self.set().ids()
    }

    pub fn is_empty(&self) -> bool {
        match self {
            DataSource::Set(set) => set.is_empty(),
            DataSource::View(view) => view.set().count_in_group(view.filter()) == 0,
        }
    }

    pub fn items_in_group(&self, group: &str) -> Vec<(DateTime<Utc>, f64)> {
        if self.passes(group) {
            self.set().items_in_group(group)
        } else {
            Vec::new()
        }
    }

    pub fn count_in_group(&self, group: &str) -> usize {
        if self.passes(group) {
            self.set().count_in_group(group)
        } else {
            0
        }
    }

    pub fn distinct_groups(&self) -> Vec<GroupId> {
        match self {
            DataSource::Set(set) => set.distinct_groups(),
            DataSource::View(view) => {
                if view.set().count_in_group(view.filter()) > 0 {
                    vec![view.filter().to_string()]
                } else {
                    Vec::new()
                }
            }
        }
    }

    pub fn y_extent(&self, group: &str) -> Option<(f64, f64)> {
        if self.passes(group) {
            self.set().y_extent(group)
        } else {
            None
        }
    }

    pub fn ungrouped_ids(&self) -> Vec<ItemId> {
        self.set().ungrouped_ids()
    }

    pub fn assign_group(&mut self, ids: &[ItemId], group: &str) {
        self.set_mut().assign_group(ids, group);
    }
}

/// Container of group metadata records, mirroring the item container's
/// add/update/remove protocol.
#[derive(Clone, Debug, Default)]
pub struct GroupSet {
    records: IndexMap<GroupId, GroupRecord>,
}

impl GroupSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, record: GroupRecord) -> GroupId {
        let id = record.id.clone();
        self.records.insert(id.clone(), record);
        id
    }

    pub fn update(&mut self, record: GroupRecord) -> GroupId {
        self.add(record)
    }

    pub fn remove(&mut self, id: &str) -> Option<GroupRecord> {
        self.records.shift_remove(id)
    }

    pub fn get(&self, id: &str) -> Option<&GroupRecord> {
        self.records.get(id)
    }

    pub fn ids(&self) -> Vec<GroupId> {
        self.records.keys().cloned().collect()
    }
}
