//! Error types for slot allocation and the surrounding service.

use thiserror::Error;

use crate::models::ItemId;
use crate::validation::ValidationError;

/// Result type alias using [`ScheduleError`].
pub type Result<T> = std::result::Result<T, ScheduleError>;

#[derive(Error, Debug)]
pub enum ScheduleError {
    // Engine errors
    #[error("Invalid input: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),

    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    // Store errors
    #[error("Project not found: {0}")]
    ProjectNotFound(ItemId),

    #[error("Invalid project: {}", summarize(.0))]
    InvalidProject(Vec<ValidationError>),

    #[error("Store error: {0}")]
    Store(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScheduleError {
    /// Validation details carried by input or project errors.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidInput(errors) | Self::InvalidProject(errors) => errors,
            _ => &[],
        }
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
