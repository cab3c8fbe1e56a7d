//! Scheduling-integration webhook handler.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde_json::Value;

use crate::error::ApiError;
use crate::schema::common::Acknowledged;
use crate::schema::webhook::WEBHOOK_FAILED;
use crate::service::booking_from_event;

/// Receives a booking event from the scheduling system.
///
/// `POST /api/calendly-webhook`
///
/// Acknowledges every well-formed delivery, recognized or not, so the
/// sender does not retry. A body that is not JSON fails like a malformed
/// booking. Does not touch the lead store.
pub async fn calendly_webhook(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Acknowledged>, ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::error!(status = %rejection.status(), error = %rejection.body_text(), "unreadable webhook body");
        ApiError::InternalError(WEBHOOK_FAILED.to_string())
    })?;
    booking_from_event(&body)?;
    Ok(Json(Acknowledged::ok()))
}
