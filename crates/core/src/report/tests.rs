//! Example-based tests for the report pipeline.

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use std::collections::BTreeSet;

use crate::dataset::{Dataset, Transaction};
use crate::filter::{DateRange, FilterSelection};
use crate::report::ReportService;

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn sample_dataset() -> Dataset {
    Dataset::new(vec![
        Transaction {
            city: "A".to_string(),
            product_line: "Drinks".to_string(),
            payment: "Cash".to_string(),
            date: date("2024-01-01"),
            total: dec!(100),
            gross_income: dec!(10),
            quantity: dec!(5),
        },
        Transaction {
            city: "B".to_string(),
            product_line: "Food".to_string(),
            payment: "Card".to_string(),
            date: date("2024-01-02"),
            total: dec!(200),
            gross_income: dec!(20),
            quantity: dec!(3),
        },
        Transaction {
            city: "A".to_string(),
            product_line: "Drinks".to_string(),
            payment: "Card".to_string(),
            date: date("2024-01-03"),
            total: dec!(50),
            gross_income: dec!(5),
            quantity: dec!(1),
        },
    ])
}

#[test]
fn test_city_filter_restricts_all_outputs() {
    let dataset = sample_dataset();
    let mut selection = FilterSelection::select_all(&dataset).unwrap();
    selection.cities = BTreeSet::from(["A".to_string()]);

    let report = ReportService::generate_dashboard(&dataset, &selection);

    assert_eq!(report.kpis.total_revenue, dec!(150));
    assert_eq!(report.kpis.total_profit, dec!(15));
    assert_eq!(report.kpis.total_quantity, 6);

    assert_eq!(report.revenue_by_product_line.len(), 1);
    assert_eq!(report.revenue_by_product_line["Drinks"], dec!(150));
    assert_eq!(report.revenue_by_city.len(), 1);
    assert_eq!(report.revenue_by_city["A"], dec!(150));
}

#[test]
fn test_empty_category_selection_zeroes_everything() {
    let dataset = sample_dataset();
    let mut selection = FilterSelection::select_all(&dataset).unwrap();
    selection.product_lines.clear();

    let report = ReportService::generate_dashboard(&dataset, &selection);

    assert_eq!(report.kpis.total_revenue, dec!(0));
    assert_eq!(report.kpis.total_profit, dec!(0));
    assert_eq!(report.kpis.total_quantity, 0);
    assert!(report.revenue_by_product_line.is_empty());
    assert!(report.revenue_by_city.is_empty());
    assert!(report.payment_counts.is_empty());
    assert!(report.revenue_by_date.is_empty());
    assert!(report.quantity_by_product_line.is_empty());
}

#[test]
fn test_single_day_date_filter() {
    let dataset = sample_dataset();
    let mut selection = FilterSelection::select_all(&dataset).unwrap();
    selection.date_range = DateRange::new(date("2024-01-02"), date("2024-01-02")).unwrap();

    let report = ReportService::generate_dashboard(&dataset, &selection);

    assert_eq!(report.kpis.total_revenue, dec!(200));
    assert_eq!(report.revenue_by_city.len(), 1);
    assert_eq!(report.revenue_by_city["B"], dec!(200));
}

#[test]
fn test_select_all_aggregations() {
    let dataset = sample_dataset();
    let selection = FilterSelection::select_all(&dataset).unwrap();

    let report = ReportService::generate_dashboard(&dataset, &selection);

    assert_eq!(report.kpis.total_revenue, dec!(350));
    assert_eq!(report.kpis.total_profit, dec!(35));
    assert_eq!(report.kpis.total_quantity, 9);

    assert_eq!(report.revenue_by_product_line["Drinks"], dec!(150));
    assert_eq!(report.revenue_by_product_line["Food"], dec!(200));
    assert_eq!(report.quantity_by_product_line["Drinks"], dec!(6));
    assert_eq!(report.quantity_by_product_line["Food"], dec!(3));

    // Payment chart is a frequency count, not a sum.
    assert_eq!(report.payment_counts["Cash"], 1);
    assert_eq!(report.payment_counts["Card"], 2);

    // Daily series holds one entry per observed day, ascending.
    let days: Vec<_> = report.revenue_by_date.keys().copied().collect();
    assert_eq!(
        days,
        vec![date("2024-01-01"), date("2024-01-02"), date("2024-01-03")]
    );
    assert_eq!(report.revenue_by_date[&date("2024-01-02")], dec!(200));
}

#[test]
fn test_days_without_rows_are_absent_not_zero() {
    let dataset = sample_dataset();
    let mut selection = FilterSelection::select_all(&dataset).unwrap();
    selection.cities = BTreeSet::from(["A".to_string()]);

    let report = ReportService::generate_dashboard(&dataset, &selection);

    // 2024-01-02 belongs to city B only; it must not appear as a zero.
    assert!(!report.revenue_by_date.contains_key(&date("2024-01-02")));
    assert_eq!(report.revenue_by_date.len(), 2);
}

#[test]
fn test_fractional_quantity_rounds_half_to_even() {
    let mut rows = sample_dataset().rows().to_vec();
    rows[0].quantity = dec!(1.25);
    rows[1].quantity = dec!(1.25);
    let dataset = Dataset::new(rows);
    let selection = FilterSelection::select_all(&dataset).unwrap();

    let report = ReportService::generate_dashboard(&dataset, &selection);

    // 1.25 + 1.25 + 1 = 3.5, which rounds half-to-even to 4.
    assert_eq!(report.kpis.total_quantity, 4);
}

#[test]
fn test_category_output_is_key_ascending() {
    let dataset = sample_dataset();
    let selection = FilterSelection::select_all(&dataset).unwrap();

    let report = ReportService::generate_dashboard(&dataset, &selection);

    let keys: Vec<_> = report.revenue_by_product_line.keys().cloned().collect();
    assert_eq!(keys, vec!["Drinks".to_string(), "Food".to_string()]);
}
