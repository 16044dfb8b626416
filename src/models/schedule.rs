//! Schedule (solution) model.
//!
//! A schedule result maps occupied slots to the work items placed in them.
//! Empty slots have no entry at all.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{ItemId, Money, Slot, WorkItem};

/// Output of one engine invocation.
///
/// Built through [`ScheduleResult::from_assignment`], which derives
/// `total_value` and `assigned_count` from the mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResult {
    /// Slot (1..=CAPACITY) → item placed there.
    pub assignment: BTreeMap<Slot, WorkItem>,
    /// Exact sum of assigned revenue.
    pub total_value: Money,
    /// Number of occupied slots.
    pub assigned_count: usize,
}

impl ScheduleResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a slot mapping and derives its totals.
    pub fn from_assignment(assignment: BTreeMap<Slot, WorkItem>) -> Self {
        let total_value = assignment.values().map(|item| item.revenue).sum();
        let assigned_count = assignment.len();
        Self {
            assignment,
            total_value,
            assigned_count,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.assignment.is_empty()
    }

    /// Item occupying `slot`, if any.
    pub fn item_in(&self, slot: Slot) -> Option<&WorkItem> {
        self.assignment.get(&slot)
    }

    /// Occupied slots in ascending order.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.assignment.keys().copied()
    }

    /// Ids of the assigned items, in slot order.
    pub fn item_ids(&self) -> Vec<ItemId> {
        self.assignment.values().map(|item| item.id).collect()
    }

    /// Slot holding the item with `id`.
    pub fn slot_of(&self, id: ItemId) -> Option<Slot> {
        self.assignment
            .iter()
            .find(|(_, item)| item.id == id)
            .map(|(&slot, _)| slot)
    }
}
