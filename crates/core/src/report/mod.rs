//! The filter-aggregate pipeline.

pub mod service;
pub mod types;

pub use service::ReportService;
pub use types::{DashboardReport, KpiSummary};

#[cfg(test)]
mod props;
#[cfg(test)]
mod tests;
