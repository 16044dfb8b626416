//! Slot allocation domain models.
//!
//! Provides the data the engine reads and produces: work items with a
//! deadline and revenue, exact money amounts, and the slot → item result.
//!
//! # Domain Mappings
//!
//! | u-sequencing | Agency | Workshop | Clinic |
//! |--------------|--------|----------|--------|
//! | WorkItem | Client project | Repair order | Procedure |
//! | Slot | Work day | Bench day | Theatre day |
//! | ScheduleResult | Weekly plan | Weekly plan | Weekly list |

mod item;
mod money;
mod schedule;

pub use item::{ItemId, ItemStatus, WorkItem};
pub use money::{Money, ParseMoneyError};
pub use schedule::ScheduleResult;

/// 1-based slot index within the planning window.
pub type Slot = usize;

/// Number of slots in the planning window (one five-day work week).
///
/// Shared by every strategy and not configurable.
pub const CAPACITY: Slot = 5;
