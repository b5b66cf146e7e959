//! Dashboard routes.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use niaga_core::report::DashboardReport;
use niaga_core::session::SessionError;
use niaga_shared::types::{format_grouped, format_integer, SessionId};
use niaga_shared::{AppError, Locale};

use crate::error::{session_not_found, ApiError};
use crate::AppState;

/// Creates the dashboard routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/sessions/{id}/dashboard", get(get_dashboard))
}

// ============================================================================
// Response Types
// ============================================================================

/// Localized dashboard payload for the display layer.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    /// Display locale the labels are rendered in.
    pub locale: Locale,
    /// Localized dashboard title.
    pub title: &'static str,
    /// The three labeled scalar metrics.
    pub kpis: Vec<KpiCard>,
    /// The five labeled chart series.
    pub charts: Vec<Chart>,
}

/// A single labeled scalar metric.
#[derive(Debug, Serialize)]
pub struct KpiCard {
    /// Stable metric identifier.
    pub id: &'static str,
    /// Localized label.
    pub label: &'static str,
    /// Rendered value.
    pub value: String,
}

/// Chart rendering shape.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Bar chart.
    Bar,
    /// Pie chart.
    Pie,
    /// Line-over-time chart.
    Line,
}

/// A single labeled chart consuming one key/value series.
#[derive(Debug, Serialize)]
pub struct Chart {
    /// Stable chart identifier.
    pub id: &'static str,
    /// Rendering shape.
    pub kind: ChartKind,
    /// Localized chart title.
    pub title: &'static str,
    /// Series keys, ascending.
    pub labels: Vec<String>,
    /// Series values, aligned with `labels`.
    pub values: Vec<Decimal>,
}

impl DashboardResponse {
    /// Assembles the localized payload from a computed report.
    #[must_use]
    pub fn build(locale: Locale, report: &DashboardReport) -> Self {
        let labels = locale.labels();

        let kpis = vec![
            KpiCard {
                id: "total_revenue",
                label: labels.total_revenue,
                value: format_grouped(report.kpis.total_revenue),
            },
            KpiCard {
                id: "total_profit",
                label: labels.total_profit,
                value: format_grouped(report.kpis.total_profit),
            },
            KpiCard {
                id: "total_quantity",
                label: labels.total_quantity,
                value: format_integer(Decimal::from(report.kpis.total_quantity)),
            },
        ];

        let charts = vec![
            category_chart(
                "revenue_by_product_line",
                ChartKind::Bar,
                labels.revenue_by_product_line,
                &report.revenue_by_product_line,
            ),
            category_chart(
                "revenue_by_city",
                ChartKind::Bar,
                labels.revenue_by_city,
                &report.revenue_by_city,
            ),
            count_chart(
                "payment_distribution",
                ChartKind::Pie,
                labels.payment_distribution,
                &report.payment_counts,
            ),
            date_chart(
                "daily_revenue",
                ChartKind::Line,
                labels.daily_revenue,
                &report.revenue_by_date,
            ),
            category_chart(
                "quantity_by_product_line",
                ChartKind::Bar,
                labels.quantity_by_product_line,
                &report.quantity_by_product_line,
            ),
        ];

        Self {
            locale,
            title: labels.title,
            kpis,
            charts,
        }
    }
}

fn category_chart(
    id: &'static str,
    kind: ChartKind,
    title: &'static str,
    series: &BTreeMap<String, Decimal>,
) -> Chart {
    Chart {
        id,
        kind,
        title,
        labels: series.keys().cloned().collect(),
        values: series.values().copied().collect(),
    }
}

fn count_chart(
    id: &'static str,
    kind: ChartKind,
    title: &'static str,
    series: &BTreeMap<String, u64>,
) -> Chart {
    Chart {
        id,
        kind,
        title,
        labels: series.keys().cloned().collect(),
        values: series.values().map(|count| Decimal::from(*count)).collect(),
    }
}

fn date_chart(
    id: &'static str,
    kind: ChartKind,
    title: &'static str,
    series: &BTreeMap<NaiveDate, Decimal>,
) -> Chart {
    Chart {
        id,
        kind,
        title,
        labels: series.keys().map(NaiveDate::to_string).collect(),
        values: series.values().copied().collect(),
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Runs the pipeline for a session and returns the localized dashboard.
async fn get_dashboard(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
) -> impl IntoResponse {
    let Some(session) = state.sessions.get(&id) else {
        return session_not_found();
    };

    let labels = session.locale().labels();
    match session.dashboard() {
        Ok(report) => Json(DashboardResponse::build(session.locale(), &report)).into_response(),
        // The idle state surfaces the localized upload prompt.
        Err(SessionError::DatasetNotLoaded) => {
            ApiError(AppError::Conflict(labels.idle.to_string())).into_response()
        }
        Err(e) => ApiError(AppError::Conflict(e.to_string())).into_response(),
    }
}
