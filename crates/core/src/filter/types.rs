//! Filter selection types.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;

use super::error::FilterError;
use crate::dataset::{Dataset, Transaction};

/// A validated inclusive date interval.
///
/// Construction guarantees `start <= end`, so the pipeline never sees a
/// reversed interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a date range after validating the bounds.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidDateRange`] if `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, FilterError> {
        if start > end {
            return Err(FilterError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a date range from optional bounds, rejecting partial pairs.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::IncompleteDateRange`] unless both bounds are
    /// present, then validates ordering as [`DateRange::new`].
    pub fn from_bounds(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Self, FilterError> {
        match (start, end) {
            (Some(start), Some(end)) => Self::new(start, end),
            _ => Err(FilterError::IncompleteDateRange),
        }
    }

    /// Returns the inclusive start date.
    #[must_use]
    pub const fn start(self) -> NaiveDate {
        self.start
    }

    /// Returns the inclusive end date.
    #[must_use]
    pub const fn end(self) -> NaiveDate {
        self.end
    }

    /// Returns true if the given date falls within this range.
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// The full set of user-chosen constraints applied before aggregation.
///
/// An empty accepted set on any categorical field means no rows pass that
/// field, not "all rows".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterSelection {
    /// Accepted city values.
    pub cities: BTreeSet<String>,
    /// Accepted product line values.
    pub product_lines: BTreeSet<String>,
    /// Accepted payment method values.
    pub payments: BTreeSet<String>,
    /// Inclusive date interval.
    pub date_range: DateRange,
}

impl FilterSelection {
    /// Builds the default selection for a dataset: all observed category
    /// values and the full observed date span.
    ///
    /// Returns `None` for an empty dataset, which has no observed span.
    #[must_use]
    pub fn select_all(dataset: &Dataset) -> Option<Self> {
        let (start, end) = dataset.date_span()?;
        Some(Self {
            cities: dataset.observed_cities(),
            product_lines: dataset.observed_product_lines(),
            payments: dataset.observed_payments(),
            date_range: DateRange { start, end },
        })
    }

    /// Returns true if the row satisfies every active predicate (logical
    /// AND across the three category filters and the date interval).
    #[must_use]
    pub fn matches(&self, tx: &Transaction) -> bool {
        self.cities.contains(&tx.city)
            && self.product_lines.contains(&tx.product_line)
            && self.payments.contains(&tx.payment)
            && self.date_range.contains(tx.date)
    }
}
