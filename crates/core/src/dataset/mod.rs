//! The in-memory transaction table.

pub mod types;

pub use types::{Dataset, Transaction};
