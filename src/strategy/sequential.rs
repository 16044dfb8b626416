//! Day-pointer strategies: FCFS, EDF and max-revenue priority.
//!
//! # Algorithm
//!
//! 1. Order items by the strategy's key (ties by id).
//! 2. Walk a day pointer from slot 1. An item whose deadline is at or after
//!    the pointer takes that slot and the pointer advances; otherwise the
//!    item is skipped and the pointer stays.
//! 3. Stop once all slots are taken.
//!
//! The pointer never retreats, so an item skipped early is never revisited
//! even if a later slot arrangement could have fit it.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the walk.

use std::collections::BTreeMap;

use super::{ordered_by, SlotStrategy};
use crate::models::{Slot, WorkItem, CAPACITY};

/// Shared sequential placement over an already ordered item sequence.
fn day_pointer_walk<'a>(ordered: impl IntoIterator<Item = &'a WorkItem>) -> BTreeMap<Slot, WorkItem> {
    let mut assignment = BTreeMap::new();
    let mut day: Slot = 1;

    for item in ordered {
        if assignment.len() >= CAPACITY {
            break;
        }
        if item.fits(day) {
            assignment.insert(day, item.clone());
            day += 1;
        }
    }

    assignment
}

/// First Come First Served.
///
/// Processes items in arrival (id) order.
#[derive(Debug, Clone, Copy)]
pub struct FirstComeFirstServed;

impl SlotStrategy for FirstComeFirstServed {
    fn key(&self) -> &'static str {
        "fcfs"
    }

    fn name(&self) -> &'static str {
        "FCFS (First Come First Served)"
    }

    fn description(&self) -> &'static str {
        "Arrival order, sequential day pointer"
    }

    fn assign(&self, items: &[WorkItem]) -> BTreeMap<Slot, WorkItem> {
        day_pointer_walk(ordered_by(items, |_, _| std::cmp::Ordering::Equal))
    }
}

/// Earliest Deadline First.
///
/// Processes items by ascending deadline. Fewer deadline skips than FCFS,
/// but the pointer still only moves forward.
///
/// # Reference
/// Jackson (1955), optimal for minimizing maximum lateness on one machine.
#[derive(Debug, Clone, Copy)]
pub struct EarliestDeadlineFirst;

impl SlotStrategy for EarliestDeadlineFirst {
    fn key(&self) -> &'static str {
        "edf"
    }

    fn name(&self) -> &'static str {
        "EDF (Earliest Deadline First)"
    }

    fn description(&self) -> &'static str {
        "Ascending deadline, sequential day pointer"
    }

    fn assign(&self, items: &[WorkItem]) -> BTreeMap<Slot, WorkItem> {
        day_pointer_walk(ordered_by(items, |a, b| a.deadline.cmp(&b.deadline)))
    }
}

/// Highest revenue first, without deadline-aware placement.
#[derive(Debug, Clone, Copy)]
pub struct MaxRevenuePriority;

impl SlotStrategy for MaxRevenuePriority {
    fn key(&self) -> &'static str {
        "priority"
    }

    fn name(&self) -> &'static str {
        "Priority (Highest Revenue)"
    }

    fn description(&self) -> &'static str {
        "Descending revenue, sequential day pointer"
    }

    fn assign(&self, items: &[WorkItem]) -> BTreeMap<Slot, WorkItem> {
        day_pointer_walk(ordered_by(items, |a, b| b.revenue.cmp(&a.revenue)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemId, Money};

    fn item(id: ItemId, deadline: i32, revenue: i64) -> WorkItem {
        WorkItem::new(id, deadline, Money::from_major(revenue))
    }

    fn ids_by_slot(map: &BTreeMap<Slot, WorkItem>) -> Vec<(Slot, ItemId)> {
        map.iter().map(|(&slot, item)| (slot, item.id)).collect()
    }

    #[test]
    fn test_fcfs_arrival_order() {
        // Input order is ignored; ids decide.
        let items = vec![item(3, 5, 10), item(1, 5, 10), item(2, 5, 10)];
        let map = FirstComeFirstServed.assign(&items);
        assert_eq!(ids_by_slot(&map), vec![(1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn test_fcfs_skip_keeps_pointer() {
        // id 2 misses day 2 and is skipped; id 3 still gets day 2.
        let items = vec![item(1, 1, 10), item(2, 1, 10), item(3, 3, 10)];
        let map = FirstComeFirstServed.assign(&items);
        assert_eq!(ids_by_slot(&map), vec![(1, 1), (2, 3)]);
    }

    #[test]
    fn test_fcfs_strands_feasible_item() {
        // id 1 pushes the pointer past id 2's deadline.
        let items = vec![item(1, 5, 10), item(2, 1, 500)];
        let map = FirstComeFirstServed.assign(&items);
        assert_eq!(ids_by_slot(&map), vec![(1, 1)]);
    }

    #[test]
    fn test_edf_orders_by_deadline() {
        let items = vec![item(1, 5, 10), item(2, 1, 500)];
        let map = EarliestDeadlineFirst.assign(&items);
        assert_eq!(ids_by_slot(&map), vec![(1, 2), (2, 1)]);
    }

    #[test]
    fn test_edf_ties_by_arrival() {
        let items = vec![item(2, 3, 10), item(1, 3, 10)];
        let map = EarliestDeadlineFirst.assign(&items);
        assert_eq!(ids_by_slot(&map), vec![(1, 1), (2, 2)]);
    }

    #[test]
    fn test_edf_still_skips() {
        // Three items due on day 2: the third can never fit.
        let items = vec![item(1, 2, 10), item(2, 2, 10), item(3, 2, 10)];
        let map = EarliestDeadlineFirst.assign(&items);
        assert_eq!(ids_by_slot(&map), vec![(1, 1), (2, 2)]);
    }

    #[test]
    fn test_priority_highest_first() {
        let items = vec![item(1, 5, 10), item(2, 5, 300), item(3, 5, 200)];
        let map = MaxRevenuePriority.assign(&items);
        assert_eq!(ids_by_slot(&map), vec![(1, 2), (2, 3), (3, 1)]);
    }

    #[test]
    fn test_priority_leaves_early_deadline_behind() {
        // id 2 is worth less and due day 1; the pointer has moved on by then.
        let items = vec![item(1, 5, 300), item(2, 1, 200)];
        let map = MaxRevenuePriority.assign(&items);
        assert_eq!(ids_by_slot(&map), vec![(1, 1)]);
    }

    #[test]
    fn test_priority_ties_by_arrival() {
        let items = vec![item(4, 5, 100), item(2, 5, 100)];
        let map = MaxRevenuePriority.assign(&items);
        assert_eq!(ids_by_slot(&map), vec![(1, 2), (2, 4)]);
    }

    #[test]
    fn test_cutoff_at_capacity() {
        let items: Vec<_> = (1..=8).map(|id| item(id, 10, 10)).collect();
        let map = FirstComeFirstServed.assign(&items);
        assert_eq!(map.len(), CAPACITY);
        assert!(map.values().all(|i| i.id <= 5));
    }
}
