//! Ingestion error types.
//!
//! Every variant is fatal for the upload that produced it: no partial
//! dataset is ever exposed.

use thiserror::Error;

/// Ingestion-related errors.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Workbook bytes could not be opened or read.
    #[error("Workbook could not be read: {0}")]
    Workbook(#[from] calamine::Error),

    /// Workbook contains no sheets.
    #[error("Workbook has no sheets")]
    NoSheets,

    /// A required column is absent from the header row.
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    /// Sheet has a header but no data rows.
    #[error("Sheet has no data rows")]
    NoRows,

    /// A date cell could not be coerced to a calendar date.
    #[error("Row {row}: unparseable date value '{value}'")]
    InvalidDate {
        /// 1-based spreadsheet row number.
        row: usize,
        /// Raw cell content.
        value: String,
    },

    /// A measure cell could not be coerced to a decimal.
    #[error("Row {row}, column '{column}': unparseable numeric value '{value}'")]
    InvalidNumber {
        /// 1-based spreadsheet row number.
        row: usize,
        /// Offending column name.
        column: &'static str,
        /// Raw cell content.
        value: String,
    },
}
