//! Report generation service.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::types::{DashboardReport, KpiSummary};
use crate::dataset::Dataset;
use crate::filter::FilterSelection;

/// Service for running the filter-aggregate pipeline.
///
/// The pipeline is a pure, stateless transform: it is re-run in full on
/// every filter change, and identical inputs always produce identical
/// output.
pub struct ReportService;

impl ReportService {
    /// Computes the dashboard report for one dataset and filter selection.
    ///
    /// Rows failing any predicate are excluded everywhere at once; the KPIs
    /// and all five aggregations are accumulated from a single pass over
    /// the filtered view. An empty filtered view yields zero KPIs and empty
    /// aggregations.
    #[must_use]
    pub fn generate_dashboard(dataset: &Dataset, selection: &FilterSelection) -> DashboardReport {
        let mut report = DashboardReport::default();
        let mut quantity_sum = Decimal::ZERO;

        for tx in dataset.rows().iter().filter(|tx| selection.matches(tx)) {
            report.kpis.total_revenue += tx.total;
            report.kpis.total_profit += tx.gross_income;
            quantity_sum += tx.quantity;

            *report
                .revenue_by_product_line
                .entry(tx.product_line.clone())
                .or_insert(Decimal::ZERO) += tx.total;
            *report
                .revenue_by_city
                .entry(tx.city.clone())
                .or_insert(Decimal::ZERO) += tx.total;
            *report.payment_counts.entry(tx.payment.clone()).or_insert(0) += 1;
            *report
                .revenue_by_date
                .entry(tx.date)
                .or_insert(Decimal::ZERO) += tx.total;
            *report
                .quantity_by_product_line
                .entry(tx.product_line.clone())
                .or_insert(Decimal::ZERO) += tx.quantity;
        }

        // Half-to-even before integer rendering; a fractional quantity sum
        // only arises from fractional source cells.
        report.kpis.total_quantity = quantity_sum.round_dp(0).to_i64().unwrap_or_default();
        report
    }
}
