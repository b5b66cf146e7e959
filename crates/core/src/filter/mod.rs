//! Filter selections over the dataset.

pub mod error;
pub mod types;

pub use error::FilterError;
pub use types::{DateRange, FilterSelection};
