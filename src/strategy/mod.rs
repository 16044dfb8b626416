//! Slot allocation strategies and the strategy registry.
//!
//! Four interchangeable strategies place pending work items into the
//! [`CAPACITY`] slots of one week:
//!
//! | Key | Order | Placement |
//! |-----|-------|-----------|
//! | `fcfs` | id ascending | sequential day pointer |
//! | `edf` | deadline ascending | sequential day pointer |
//! | `priority` | revenue descending | sequential day pointer |
//! | `greedy` | revenue descending | latest free feasible slot |
//!
//! Every ordering breaks ties by id (arrival order), and every strategy
//! stops once all slots are taken.
//!
//! # Usage
//!
//! ```
//! use u_sequencing::models::{Money, WorkItem};
//! use u_sequencing::strategy::StrategyRegistry;
//!
//! let registry = StrategyRegistry::new();
//! let items = vec![
//!     WorkItem::new(1, 2, Money::from_major(100)),
//!     WorkItem::new(2, 1, Money::from_major(50)),
//! ];
//! let result = registry.run(&items).unwrap();
//! assert_eq!(result.total_value, Money::from_major(150));
//! ```
//!
//! # References
//!
//! - Horowitz & Sahni (1978), "Fundamentals of Computer Algorithms",
//!   Ch. 4.4 (Job Sequencing with Deadlines)
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

mod greedy;
mod registry;
mod sequential;

pub use greedy::Greedy;
pub use registry::StrategyRegistry;
pub use sequential::{EarliestDeadlineFirst, FirstComeFirstServed, MaxRevenuePriority};

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::{Result, ScheduleError};
use crate::models::{ScheduleResult, Slot, WorkItem};
use crate::validation::validate_items;

/// Key of the strategy selected at startup.
pub const DEFAULT_STRATEGY: &str = "greedy";

/// A slot allocation strategy.
///
/// # Contract
/// `assign` receives validated pending items and must return a mapping in
/// which every slot is within `1..=CAPACITY`, every item fits its slot, and
/// no item appears twice. It must be deterministic and side-effect free.
pub trait SlotStrategy: Send + Sync + Debug {
    /// Registry key (e.g., "edf").
    fn key(&self) -> &'static str;

    /// Display name.
    fn name(&self) -> &'static str;

    /// Strategy description.
    fn description(&self) -> &'static str {
        self.name()
    }

    /// Places items into slots.
    fn assign(&self, items: &[WorkItem]) -> BTreeMap<Slot, WorkItem>;
}

/// Key and display name of a strategy, read as one pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyInfo {
    pub key: String,
    pub display_name: String,
}

impl StrategyInfo {
    pub fn of(strategy: &dyn SlotStrategy) -> Self {
        Self {
            key: strategy.key().to_string(),
            display_name: strategy.name().to_string(),
        }
    }
}

/// The four built-in strategies.
pub fn builtin() -> Vec<Arc<dyn SlotStrategy>> {
    vec![
        Arc::new(FirstComeFirstServed),
        Arc::new(EarliestDeadlineFirst),
        Arc::new(MaxRevenuePriority),
        Arc::new(Greedy),
    ]
}

/// Validates `items` and runs `strategy` over them.
///
/// # Errors
/// [`ScheduleError::InvalidInput`] when any item has a non-positive
/// deadline, negative revenue, a duplicate id, or is not pending. The whole
/// call is rejected; no item is silently dropped.
pub fn run_schedule(strategy: &dyn SlotStrategy, items: &[WorkItem]) -> Result<ScheduleResult> {
    if let Err(errors) = validate_items(items) {
        warn!(
            strategy = strategy.key(),
            problems = errors.len(),
            "rejecting invalid schedule input"
        );
        return Err(ScheduleError::InvalidInput(errors));
    }

    let result = ScheduleResult::from_assignment(strategy.assign(items));
    debug!(
        strategy = strategy.key(),
        items = items.len(),
        assigned = result.assigned_count,
        total = %result.total_value,
        "schedule computed"
    );
    Ok(result)
}

/// Returns references to `items` sorted by `compare`, ties broken by id.
///
/// `sort_by` is stable, so equal ids (rejected by validation anyway) keep
/// their input order.
fn ordered_by<F>(items: &[WorkItem], mut compare: F) -> Vec<&WorkItem>
where
    F: FnMut(&WorkItem, &WorkItem) -> Ordering,
{
    let mut sorted: Vec<&WorkItem> = items.iter().collect();
    sorted.sort_by(|a, b| compare(a, b).then_with(|| a.id.cmp(&b.id)));
    sorted
}
