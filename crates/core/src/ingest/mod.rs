//! Spreadsheet parsing and normalization.

pub mod error;
pub mod service;

pub use error::IngestError;
pub use service::{IngestService, REQUIRED_COLUMNS};
