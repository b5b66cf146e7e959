//! Report data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// Scalar KPIs computed over the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct KpiSummary {
    /// Sum of `Total` over the filtered view.
    pub total_revenue: Decimal,
    /// Sum of `gross income` over the filtered view.
    pub total_profit: Decimal,
    /// Sum of `Quantity`, rounded half-to-even to a whole number.
    pub total_quantity: i64,
}

/// The full dashboard report: KPIs plus the five grouped aggregations.
///
/// Every aggregation derives from the same filtered view, so they always
/// agree on which rows are included. Map keys iterate ascending.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DashboardReport {
    /// Scalar KPI summary.
    pub kpis: KpiSummary,
    /// Revenue grouped by product line.
    pub revenue_by_product_line: BTreeMap<String, Decimal>,
    /// Revenue grouped by city.
    pub revenue_by_city: BTreeMap<String, Decimal>,
    /// Transaction count grouped by payment method.
    pub payment_counts: BTreeMap<String, u64>,
    /// Revenue grouped by day. Days with no matching rows are absent.
    pub revenue_by_date: BTreeMap<NaiveDate, Decimal>,
    /// Quantity grouped by product line.
    pub quantity_by_product_line: BTreeMap<String, Decimal>,
}
