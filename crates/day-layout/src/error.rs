//! Error types for day-layout operations.

use thiserror::Error;

use crate::event::EventId;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid interval for event '{id}': start {start} must be before end {end}")]
    InvalidInterval { id: EventId, start: u32, end: u32 },

    #[error("Duplicate event id: '{0}'")]
    DuplicateId(EventId),

    #[error("Invalid width: {0} (must be a positive, finite number of pixels)")]
    InvalidWidth(f64),

    #[error("Invalid axis: {0}")]
    InvalidAxis(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
