//! Greedy job sequencing with deadlines.
//!
//! # Algorithm
//!
//! 1. Order items by revenue, descending (ties by id).
//! 2. For each item, scan slots from `min(deadline, CAPACITY)` down to 1
//!    and claim the first free one. No free slot → item stays unscheduled.
//! 3. Stop once all slots are taken.
//!
//! Claiming the latest feasible slot leaves earlier slots open for items
//! with tighter deadlines; with unit-length items this yields the maximum
//! total revenue (exchange argument).
//!
//! # Complexity
//! O(n log n + n * CAPACITY).
//!
//! # Reference
//! Horowitz & Sahni (1978), "Fundamentals of Computer Algorithms", Ch. 4.4

use std::collections::BTreeMap;

use super::{ordered_by, SlotStrategy};
use crate::models::{Slot, WorkItem, CAPACITY};

/// Revenue-maximizing deadline-aware placement.
#[derive(Debug, Clone, Copy)]
pub struct Greedy;

impl SlotStrategy for Greedy {
    fn key(&self) -> &'static str {
        "greedy"
    }

    fn name(&self) -> &'static str {
        "Greedy (Revenue-Deadline)"
    }

    fn description(&self) -> &'static str {
        "Descending revenue, latest free slot before the deadline"
    }

    fn assign(&self, items: &[WorkItem]) -> BTreeMap<Slot, WorkItem> {
        let mut assignment = BTreeMap::new();
        let mut occupied = [false; CAPACITY];

        for item in ordered_by(items, |a, b| b.revenue.cmp(&a.revenue)) {
            if assignment.len() >= CAPACITY {
                break;
            }
            let Some(latest) = item.latest_slot() else {
                continue;
            };

            let free = (1..=latest.min(CAPACITY)).rev().find(|&slot| !occupied[slot - 1]);
            if let Some(slot) = free {
                occupied[slot - 1] = true;
                assignment.insert(slot, item.clone());
            }
        }

        assignment
    }
}
