// File: crates/timegraph-core/src/group.rs
// Summary: Per-series group model and the default-style index allocator.

use crate::options::{GraphOptions, GraphOptionsPatch};
use crate::types::GroupId;

// Default styles cycle; class names wrap after this many.
const DEFAULT_STYLE_COUNT: usize = 10;

/// Allocator for default visual style indices. Owned by the renderer and
/// passed into group construction; deliberately not module-level state.
#[derive(Clone, Debug, Default)]
pub struct StylePool {
    next: usize,
}

impl StylePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pop the next unused style index.
    pub fn take(&mut self) -> usize {
        let index = self.next;
        self.next += 1;
        index
    }
}

/// Raw group metadata as delivered by the group container.
#[derive(Clone, Debug, Default)]
pub struct GroupRecord {
    pub id: GroupId,
    pub content: String,
    pub class_name: Option<String>,
    pub options: GraphOptionsPatch,
}

impl GroupRecord {
    pub fn new(id: impl Into<GroupId>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            class_name: None,
            options: GraphOptionsPatch::default(),
        }
    }

    pub fn with_options(mut self, options: GraphOptionsPatch) -> Self {
        self.options = options;
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }
}

/// A named series sharing one visual style and axis assignment.
#[derive(Clone, Debug)]
pub struct GraphGroup {
    pub id: GroupId,
    pub label: String,
    pub options: GraphOptions,
    pub class_name: String,
    style_index: usize,
}

impl GraphGroup {
    /// Build a group from its record, merging the record's overrides onto the
    /// shared defaults. A deterministic default style (class) is assigned by
    /// popping the next index from `pool`.
    pub fn new(record: &GroupRecord, defaults: &GraphOptions, pool: &mut StylePool) -> Self {
        let style_index = pool.take();
        let mut options = defaults.clone();
        options.apply(&record.options);
        let class_name = record
            .class_name
            .clone()
            .unwrap_or_else(|| format!("graph-group{}", style_index % DEFAULT_STYLE_COUNT));
        Self {
            id: record.id.clone(),
            label: record.content.clone(),
            options,
            class_name,
            style_index,
        }
    }

    /// Re-merge options from an updated record. The style index is kept; the
    /// class name only changes when the record overrides it explicitly.
    pub fn update(&mut self, record: &GroupRecord, defaults: &GraphOptions) {
        let mut options = defaults.clone();
        options.apply(&record.options);
        self.options = options;
        self.label = record.content.clone();
        if let Some(class_name) = &record.class_name {
            self.class_name = class_name.clone();
        }
    }

    pub fn style_index(&self) -> usize {
        self.style_index
    }
}
