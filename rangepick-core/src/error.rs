//! Error types for the rangepick selector.

use thiserror::Error;

/// Errors that can occur at the selector's boundary.
#[derive(Error, Debug)]
pub enum RangePickError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid range: {from} is after {to}")]
    InvalidRange { from: String, to: String },

    #[error("Invalid month index {0}. Expected 0-11")]
    InvalidMonth(u32),

    #[error("Year {year} is outside the selectable range {min}-{max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    #[error("Month/year dropdowns are not enabled for this selector")]
    DropdownsDisabled,

    #[error("Unknown preset '{0}'")]
    UnknownPreset(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for rangepick operations.
pub type RangePickResult<T> = Result<T, RangePickError>;
