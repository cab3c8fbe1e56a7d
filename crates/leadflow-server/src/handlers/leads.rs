//! Lead intake and listing handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::error::ApiError;
use crate::schema::leads::{IntakeResponse, Lead, LeadListResponse, INVALID_BODY, LEAD_SAVED};
use crate::state::AppState;

/// Accepts a form submission.
///
/// `POST /api/leads`
///
/// A body that is not a JSON lead gets the 400 failure envelope.
pub async fn create_lead(
    State(state): State<AppState>,
    payload: Result<Json<Lead>, JsonRejection>,
) -> Result<Json<IntakeResponse>, ApiError> {
    let Json(lead) = payload.map_err(|rejection| {
        tracing::warn!(status = %rejection.status(), error = %rejection.body_text(), "unreadable lead body");
        ApiError::BadRequest(INVALID_BODY.to_string())
    })?;
    let mut service = state.service.lock().await;
    let record = service.intake(lead)?;
    Ok(Json(IntakeResponse::saved(LEAD_SAVED, record.id)))
}

/// Lists every stored lead.
///
/// `GET /api/leads`
pub async fn list_leads(State(state): State<AppState>) -> Json<LeadListResponse> {
    let service = state.service.lock().await;
    Json(LeadListResponse {
        success: true,
        leads: service.list(),
    })
}
