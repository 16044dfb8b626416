//! Input validation for slot allocation.
//!
//! Two layers:
//! - [`validate_items`]: engine preconditions checked before every run
//!   (positive deadlines, non-negative revenue, unique ids, pending status).
//! - [`validate_draft`]: store-side constraints on created or updated
//!   projects (non-blank title, deadline within a year, positive revenue).
//!
//! Both collect every problem instead of stopping at the first one.

use std::collections::HashSet;

use crate::models::{Money, WorkItem};
use crate::store::ProjectDraft;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// Longest deadline a stored project may carry, in slots.
pub const MAX_DEADLINE: i32 = 365;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Deadline is zero or negative.
    NonPositiveDeadline,
    /// Revenue is below zero.
    NegativeRevenue,
    /// Two items share the same id.
    DuplicateId,
    /// Item is not in `Pending` status.
    NotPending,
    /// Project title is empty or whitespace.
    BlankTitle,
    /// Project deadline is outside 1..=365.
    DeadlineOutOfRange,
    /// Project revenue is zero or negative.
    NonPositiveRevenue,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates the items handed to a strategy.
///
/// Checks:
/// 1. Every deadline is positive
/// 2. No revenue is negative
/// 3. No duplicate ids
/// 4. Every item is `Pending`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_items(items: &[WorkItem]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for item in items {
        if !ids.insert(item.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate item ID: {}", item.id),
            ));
        }

        if item.deadline <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveDeadline,
                format!("Item {} has non-positive deadline {}", item.id, item.deadline),
            ));
        }

        if item.revenue.is_negative() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeRevenue,
                format!("Item {} has negative revenue {}", item.id, item.revenue),
            ));
        }

        if !item.is_pending() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NotPending,
                format!("Item {} is {:?}, expected Pending", item.id, item.status),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a create/update payload for the store.
pub fn validate_draft(draft: &ProjectDraft) -> ValidationResult {
    let mut errors = Vec::new();

    if draft.title.trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::BlankTitle,
            "Title is required",
        ));
    }

    if !(1..=MAX_DEADLINE).contains(&draft.deadline) {
        errors.push(ValidationError::new(
            ValidationErrorKind::DeadlineOutOfRange,
            format!(
                "Deadline must be between 1 and {MAX_DEADLINE}, got {}",
                draft.deadline
            ),
        ));
    }

    if draft.revenue <= Money::ZERO {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveRevenue,
            format!("Expected revenue must be positive, got {}", draft.revenue),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
