//! Work item persistence boundary.
//!
//! The engine never stores anything itself. Callers load pending items from
//! a [`ProjectStore`], run a strategy, and write status changes back through
//! [`ProjectStore::persist`]. [`InMemoryStore`] is the reference backend.

mod memory;

pub use memory::InMemoryStore;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{ItemId, ItemStatus, Money, WorkItem};

/// Create/update payload for a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub title: String,
    /// Deadline in work days (1..=365).
    pub deadline: i32,
    #[serde(alias = "expectedRevenue")]
    pub revenue: Money,
}

impl ProjectDraft {
    pub fn new(title: impl Into<String>, deadline: i32, revenue: Money) -> Self {
        Self {
            title: title.into(),
            deadline,
            revenue,
        }
    }
}

/// Storage for work items.
///
/// Implementations assign ids on insert in ascending order, so id order is
/// arrival order.
pub trait ProjectStore: Send + Sync {
    /// Every stored item, ascending by id.
    fn all(&self) -> Result<Vec<WorkItem>>;

    fn get(&self, id: ItemId) -> Result<Option<WorkItem>>;

    /// Stores a new pending item and returns it with its id.
    fn insert(&self, draft: ProjectDraft, now: NaiveDateTime) -> Result<WorkItem>;

    /// Overwrites an existing item.
    ///
    /// # Errors
    /// [`ScheduleError::ProjectNotFound`](crate::ScheduleError::ProjectNotFound)
    /// if no item has `item.id`.
    fn persist(&self, item: WorkItem) -> Result<WorkItem>;

    /// Removes an item. Returns whether it existed.
    fn delete(&self, id: ItemId) -> Result<bool>;

    fn count(&self) -> Result<usize>;

    /// Removes every item.
    fn clear(&self) -> Result<()>;

    /// Items still waiting for a slot, ascending by id.
    fn load_pending(&self) -> Result<Vec<WorkItem>> {
        Ok(self
            .all()?
            .into_iter()
            .filter(WorkItem::is_pending)
            .collect())
    }

    /// Completed items whose completion time is at or after `since`.
    fn completed_since(&self, since: NaiveDateTime) -> Result<Vec<WorkItem>> {
        Ok(self
            .all()?
            .into_iter()
            .filter(|item| item.status == ItemStatus::Completed)
            .filter(|item| item.completed_at.is_some_and(|at| at >= since))
            .collect())
    }
}
