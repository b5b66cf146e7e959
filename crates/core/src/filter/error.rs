//! Filter error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Filter-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// Date interval is reversed.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Requested start date.
        start: NaiveDate,
        /// Requested end date.
        end: NaiveDate,
    },

    /// Date interval is missing one of its bounds.
    #[error("Incomplete date range: both start and end dates are required")]
    IncompleteDateRange,
}
