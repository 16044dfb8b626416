//! Work item model.
//!
//! A work item ("project") is one unit of schedulable work: it occupies
//! exactly one slot, must run no later than its deadline slot, and earns
//! its revenue when scheduled.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Money, Slot};

/// Store-assigned identifier. Ascending ids reflect arrival order.
pub type ItemId = u64;

/// Lifecycle state of a work item.
///
/// The engine only consumes `Pending` items and never changes this field;
/// transitions belong to the caller and its store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    #[default]
    Pending,
    Scheduled,
    Completed,
}

/// A unit of work to be placed into a weekly slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    /// Unique identifier.
    pub id: ItemId,
    /// Human-readable title.
    #[serde(default)]
    pub title: String,
    /// Last slot (1-based) in which the item may still run.
    pub deadline: i32,
    /// Revenue earned when the item is scheduled.
    pub revenue: Money,
    /// Lifecycle state.
    #[serde(default)]
    pub status: ItemStatus,
    /// When the store first saw the item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    /// When an executed schedule completed the item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<NaiveDateTime>,
}

impl WorkItem {
    /// Creates a pending item.
    pub fn new(id: ItemId, deadline: i32, revenue: Money) -> Self {
        Self {
            id,
            title: String::new(),
            deadline,
            revenue,
            status: ItemStatus::Pending,
            created_at: None,
            completed_at: None,
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the status.
    pub fn with_status(mut self, status: ItemStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the creation timestamp.
    pub fn with_created_at(mut self, at: NaiveDateTime) -> Self {
        self.created_at = Some(at);
        self
    }

    /// Marks the item completed at the given time.
    pub fn with_completed_at(mut self, at: NaiveDateTime) -> Self {
        self.status = ItemStatus::Completed;
        self.completed_at = Some(at);
        self
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == ItemStatus::Pending
    }

    /// The deadline as a slot index, or `None` when it is not positive.
    pub fn latest_slot(&self) -> Option<Slot> {
        Slot::try_from(self.deadline).ok().filter(|&slot| slot > 0)
    }

    /// Whether the item may occupy `slot` without missing its deadline.
    #[inline]
    pub fn fits(&self, slot: Slot) -> bool {
        self.latest_slot().is_some_and(|latest| latest >= slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_builder() {
        let item = WorkItem::new(7, 3, Money::from_major(900)).with_title("IoT Hub");
        assert_eq!(item.id, 7);
        assert_eq!(item.title, "IoT Hub");
        assert!(item.is_pending());
        assert_eq!(item.latest_slot(), Some(3));
    }

    #[test]
    fn test_fits() {
        let item = WorkItem::new(1, 2, Money::ZERO);
        assert!(item.fits(1));
        assert!(item.fits(2));
        assert!(!item.fits(3));

        let bad = WorkItem::new(2, 0, Money::ZERO);
        assert_eq!(bad.latest_slot(), None);
        assert!(!bad.fits(1));

        let negative = WorkItem::new(3, -4, Money::ZERO);
        assert_eq!(negative.latest_slot(), None);
    }

    #[test]
    fn test_completed_at_sets_status() {
        let at = chrono::NaiveDate::from_ymd_opt(2026, 3, 2)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let item = WorkItem::new(1, 2, Money::ZERO).with_completed_at(at);
        assert_eq!(item.status, ItemStatus::Completed);
        assert_eq!(item.completed_at, Some(at));
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&ItemStatus::Completed).unwrap();
        assert_eq!(json, "\"COMPLETED\"");

        let item: WorkItem =
            serde_json::from_str(r#"{"id":4,"deadline":2,"revenue":"120.00"}"#).unwrap();
        assert_eq!(item.status, ItemStatus::Pending);
        assert_eq!(item.revenue, Money::from_major(120));
    }
}
