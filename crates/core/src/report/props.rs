//! Property-based tests for the report pipeline.
//!
//! - Subset: the filtered view never exceeds the dataset
//! - Conjunction: select-all reproduces the whole dataset
//! - Empty selection: one empty category set empties everything
//! - Aggregation consistency: grouped sums equal the scalar KPIs
//! - Determinism: identical inputs produce identical reports

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::BTreeSet;

use crate::dataset::{Dataset, Transaction};
use crate::filter::{DateRange, FilterSelection};
use crate::report::ReportService;

const CITIES: [&str; 3] = ["Jakarta", "Surabaya", "Medan"];
const PRODUCTS: [&str; 3] = ["Drinks", "Food", "Household"];
const PAYMENTS: [&str; 3] = ["Cash", "Card", "Ewallet"];

/// Strategy to generate non-negative amounts with two decimal places.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate dates within a two-month observation window.
fn arb_day() -> impl Strategy<Value = NaiveDate> {
    (0u64..60).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(offset))
            .unwrap()
    })
}

/// Strategy to generate a single transaction over the fixed category pools.
fn arb_transaction() -> impl Strategy<Value = Transaction> {
    (
        prop::sample::select(&CITIES[..]),
        prop::sample::select(&PRODUCTS[..]),
        prop::sample::select(&PAYMENTS[..]),
        arb_day(),
        arb_amount(),
        arb_amount(),
        0i64..100,
    )
        .prop_map(
            |(city, product_line, payment, date, total, gross_income, quantity)| Transaction {
                city: city.to_string(),
                product_line: product_line.to_string(),
                payment: payment.to_string(),
                date,
                total,
                gross_income,
                quantity: Decimal::from(quantity),
            },
        )
}

/// Strategy to generate a non-empty dataset.
fn arb_dataset() -> impl Strategy<Value = Dataset> {
    prop::collection::vec(arb_transaction(), 1..40).prop_map(Dataset::new)
}

/// Strategy to generate an arbitrary subset of a category pool.
fn arb_subset(pool: [&'static str; 3]) -> impl Strategy<Value = BTreeSet<String>> {
    prop::array::uniform3(any::<bool>()).prop_map(move |mask| {
        pool.iter()
            .zip(mask)
            .filter(|(_, keep)| *keep)
            .map(|(value, _)| (*value).to_string())
            .collect()
    })
}

/// Strategy to generate an arbitrary well-formed filter selection.
fn arb_selection() -> impl Strategy<Value = FilterSelection> {
    (
        arb_subset(CITIES),
        arb_subset(PRODUCTS),
        arb_subset(PAYMENTS),
        arb_day(),
        arb_day(),
    )
        .prop_map(|(cities, product_lines, payments, a, b)| {
            let (start, end) = if a <= b { (a, b) } else { (b, a) };
            FilterSelection {
                cities,
                product_lines,
                payments,
                date_range: DateRange::new(start, end).unwrap(),
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The filtered view is always a subset of the dataset: the number of
    /// counted transactions can never exceed the row count.
    #[test]
    fn prop_filtered_view_is_subset(
        dataset in arb_dataset(),
        selection in arb_selection(),
    ) {
        let report = ReportService::generate_dashboard(&dataset, &selection);
        let counted: u64 = report.payment_counts.values().sum();
        prop_assert!(counted <= dataset.len() as u64);
    }

    /// A row passes iff it satisfies every predicate simultaneously.
    #[test]
    fn prop_predicates_conjoin(
        dataset in arb_dataset(),
        selection in arb_selection(),
    ) {
        for tx in dataset.rows() {
            let expected = selection.cities.contains(&tx.city)
                && selection.product_lines.contains(&tx.product_line)
                && selection.payments.contains(&tx.payment)
                && tx.date >= selection.date_range.start()
                && tx.date <= selection.date_range.end();
            prop_assert_eq!(selection.matches(tx), expected);
        }
    }

    /// Selecting all observed categories and the full observed span
    /// reproduces the entire dataset.
    #[test]
    fn prop_select_all_is_identity(dataset in arb_dataset()) {
        let selection = FilterSelection::select_all(&dataset).unwrap();
        let report = ReportService::generate_dashboard(&dataset, &selection);

        let counted: u64 = report.payment_counts.values().sum();
        prop_assert_eq!(counted, dataset.len() as u64);

        let expected_revenue: Decimal = dataset.rows().iter().map(|tx| tx.total).sum();
        prop_assert_eq!(report.kpis.total_revenue, expected_revenue);
    }

    /// An empty accepted set on any one categorical field empties the view
    /// regardless of the other filters.
    #[test]
    fn prop_empty_category_set_empties_view(
        dataset in arb_dataset(),
        field in 0usize..3,
    ) {
        let mut selection = FilterSelection::select_all(&dataset).unwrap();
        match field {
            0 => selection.cities.clear(),
            1 => selection.product_lines.clear(),
            _ => selection.payments.clear(),
        }

        let report = ReportService::generate_dashboard(&dataset, &selection);
        prop_assert_eq!(report.kpis.total_revenue, Decimal::ZERO);
        prop_assert_eq!(report.kpis.total_quantity, 0);
        prop_assert!(report.revenue_by_date.is_empty());
        prop_assert!(report.payment_counts.is_empty());
    }

    /// Every grouped revenue aggregation sums to the scalar revenue KPI,
    /// and grouped quantities agree with each other.
    #[test]
    fn prop_aggregations_are_consistent(
        dataset in arb_dataset(),
        selection in arb_selection(),
    ) {
        let report = ReportService::generate_dashboard(&dataset, &selection);

        let by_product: Decimal = report.revenue_by_product_line.values().sum();
        let by_city: Decimal = report.revenue_by_city.values().sum();
        let by_date: Decimal = report.revenue_by_date.values().sum();

        prop_assert_eq!(by_product, report.kpis.total_revenue);
        prop_assert_eq!(by_city, report.kpis.total_revenue);
        prop_assert_eq!(by_date, report.kpis.total_revenue);
    }

    /// Running the pipeline twice with identical inputs yields identical
    /// outputs.
    #[test]
    fn prop_pipeline_is_deterministic(
        dataset in arb_dataset(),
        selection in arb_selection(),
    ) {
        let first = ReportService::generate_dashboard(&dataset, &selection);
        let second = ReportService::generate_dashboard(&dataset, &selection);
        prop_assert_eq!(first, second);
    }
}
