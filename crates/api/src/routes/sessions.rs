//! Session lifecycle routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use niaga_core::session::SessionContext;
use niaga_shared::types::SessionId;
use niaga_shared::Locale;

use crate::error::session_not_found;
use crate::AppState;

/// Creates the session routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sessions", post(create_session))
        .route("/sessions/{id}", delete(delete_session))
        .route("/sessions/{id}/locale", put(set_locale))
}

// ============================================================================
// Request / Response Types
// ============================================================================

/// Request body for creating a session.
#[derive(Debug, Default, Deserialize)]
pub struct CreateSessionRequest {
    /// Display locale; falls back to the configured default.
    pub locale: Option<Locale>,
}

/// Request body for switching the display locale.
#[derive(Debug, Deserialize)]
pub struct SetLocaleRequest {
    /// New display locale.
    pub locale: Locale,
}

/// Session info response.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    /// Session identifier.
    pub session_id: SessionId,
    /// Resolved display locale.
    pub locale: Locale,
}

// ============================================================================
// Handlers
// ============================================================================

/// Creates a new idle session.
async fn create_session(
    State(state): State<AppState>,
    body: Option<Json<CreateSessionRequest>>,
) -> impl IntoResponse {
    let request = body.map(|Json(request)| request).unwrap_or_default();
    let locale = request
        .locale
        .unwrap_or(state.config.display.default_locale);

    let session = SessionContext::new(locale);
    let response = SessionResponse {
        session_id: session.id(),
        locale: session.locale(),
    };
    state.sessions.insert(session.id(), session);

    (StatusCode::CREATED, Json(response))
}

/// Drops a session and everything it owns.
async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
) -> impl IntoResponse {
    if state.sessions.remove(&id).is_none() {
        return session_not_found();
    }
    StatusCode::NO_CONTENT.into_response()
}

/// Switches the session's display locale. Labels only; data semantics are
/// untouched.
async fn set_locale(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
    Json(request): Json<SetLocaleRequest>,
) -> impl IntoResponse {
    let Some(mut session) = state.sessions.get_mut(&id) else {
        return session_not_found();
    };

    session.set_locale(request.locale);
    Json(SessionResponse {
        session_id: session.id(),
        locale: session.locale(),
    })
    .into_response()
}
