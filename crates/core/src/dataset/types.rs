//! Dataset and transaction record types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One retail transaction row. Immutable once ingested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Branch city.
    pub city: String,
    /// Product line category.
    pub product_line: String,
    /// Payment method.
    pub payment: String,
    /// Transaction date.
    pub date: NaiveDate,
    /// Revenue for the transaction.
    pub total: Decimal,
    /// Profit for the transaction.
    pub gross_income: Decimal,
    /// Units sold. Integral in practice, decimal to survive coercion.
    pub quantity: Decimal,
}

/// An ordered sequence of transactions sharing one schema.
///
/// Created once per upload and never mutated afterwards; filters derive
/// views from it without touching the rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    rows: Vec<Transaction>,
}

impl Dataset {
    /// Wraps ingested rows into a dataset.
    #[must_use]
    pub fn new(rows: Vec<Transaction>) -> Self {
        Self { rows }
    }

    /// Returns the transaction rows in ingestion order.
    #[must_use]
    pub fn rows(&self) -> &[Transaction] {
        &self.rows
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the dataset holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the distinct city values, ascending.
    #[must_use]
    pub fn observed_cities(&self) -> BTreeSet<String> {
        self.rows.iter().map(|tx| tx.city.clone()).collect()
    }

    /// Returns the distinct product line values, ascending.
    #[must_use]
    pub fn observed_product_lines(&self) -> BTreeSet<String> {
        self.rows.iter().map(|tx| tx.product_line.clone()).collect()
    }

    /// Returns the distinct payment method values, ascending.
    #[must_use]
    pub fn observed_payments(&self) -> BTreeSet<String> {
        self.rows.iter().map(|tx| tx.payment.clone()).collect()
    }

    /// Returns the observed `[min, max]` date span, or `None` for an empty
    /// dataset.
    #[must_use]
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.rows.iter().map(|tx| tx.date).min()?;
        let max = self.rows.iter().map(|tx| tx.date).max()?;
        Some((min, max))
    }
}
