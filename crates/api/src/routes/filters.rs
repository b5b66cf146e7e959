//! Filter selection routes.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::put,
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use niaga_core::filter::{DateRange, FilterSelection};
use niaga_shared::types::SessionId;
use niaga_shared::AppError;

use crate::error::{session_not_found, ApiError};
use crate::AppState;

/// Creates the filter routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/sessions/{id}/filters", put(update_filters))
}

// ============================================================================
// Request / Response Types
// ============================================================================

/// Request body for replacing the filter selection.
///
/// Empty category lists are legal and mean "accept nothing" for that field.
#[derive(Debug, Deserialize)]
pub struct UpdateFiltersRequest {
    /// Accepted city values.
    pub cities: Vec<String>,
    /// Accepted product line values.
    pub product_lines: Vec<String>,
    /// Accepted payment method values.
    pub payments: Vec<String>,
    /// Inclusive range start; required.
    pub date_from: Option<NaiveDate>,
    /// Inclusive range end; required.
    pub date_to: Option<NaiveDate>,
}

/// The active filter selection as returned to the display layer.
#[derive(Debug, Clone, Serialize)]
pub struct SelectionResponse {
    /// Accepted city values, ascending.
    pub cities: Vec<String>,
    /// Accepted product line values, ascending.
    pub product_lines: Vec<String>,
    /// Accepted payment method values, ascending.
    pub payments: Vec<String>,
    /// Inclusive range start.
    pub date_from: NaiveDate,
    /// Inclusive range end.
    pub date_to: NaiveDate,
}

impl From<&FilterSelection> for SelectionResponse {
    fn from(selection: &FilterSelection) -> Self {
        Self {
            cities: selection.cities.iter().cloned().collect(),
            product_lines: selection.product_lines.iter().cloned().collect(),
            payments: selection.payments.iter().cloned().collect(),
            date_from: selection.date_range.start(),
            date_to: selection.date_range.end(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Replaces the session's filter selection.
async fn update_filters(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
    Json(request): Json<UpdateFiltersRequest>,
) -> impl IntoResponse {
    let date_range = match DateRange::from_bounds(request.date_from, request.date_to) {
        Ok(range) => range,
        Err(e) => {
            return ApiError(AppError::Validation(e.to_string())).into_response();
        }
    };

    let selection = FilterSelection {
        cities: request.cities.into_iter().collect(),
        product_lines: request.product_lines.into_iter().collect(),
        payments: request.payments.into_iter().collect(),
        date_range,
    };

    let Some(mut session) = state.sessions.get_mut(&id) else {
        return session_not_found();
    };

    match session.set_selection(selection) {
        Ok(()) => {
            let response = session.selection().map(SelectionResponse::from);
            Json(response).into_response()
        }
        Err(e) => ApiError(AppError::Conflict(e.to_string())).into_response(),
    }
}
