// src/routes/notify_routes.rs

use axum::{extract::State, routing::post, Json, Router};

use crate::{
    error::ApiError,
    models::{AppState, DeliveryStatus, NewDeliveryRecord, SendSmsRequest, SendSmsResponse},
};

pub fn router() -> Router<AppState> {
    Router::new().route("/notifications/sms", post(send_sms))
}

/// Presence/non-empty check only. Phone number shape is deliberately not
/// validated here; the gateway is the authority on recipient validity.
fn validate(req: &SendSmsRequest) -> Result<(String, String), ApiError> {
    let phone_number = req.phone_number.as_deref().unwrap_or("");
    let message = req.message.as_deref().unwrap_or("");

    if phone_number.is_empty() || message.is_empty() {
        return Err(ApiError::missing_fields());
    }

    Ok((phone_number.to_string(), message.to_string()))
}

/// Dispatch path: validate, send via gateway, fire-and-forget record, respond.
/// At most one delivery attempt per request; no retry, no idempotency key, so
/// a client-side retry produces a duplicate send.
pub async fn send_sms(
    State(state): State<AppState>,
    Json(req): Json<SendSmsRequest>,
) -> Result<Json<SendSmsResponse>, ApiError> {
    let (phone_number, message) = validate(&req)?;

    match state
        .gateway
        .send(&phone_number, &message, &state.from_number)
        .await
    {
        Ok(sid) => {
            tracing::info!(
                provider = state.gateway.name(),
                message_sid = %sid,
                "sms sent"
            );
            record_attempt(&state, phone_number, message, DeliveryStatus::Sent);
            Ok(Json(SendSmsResponse {
                success: true,
                message_sid: sid,
            }))
        }
        Err(e) => {
            tracing::error!(
                provider = state.gateway.name(),
                error = %e,
                "sms send failed"
            );
            record_attempt(&state, phone_number, message, DeliveryStatus::Failed);
            Err(e.into())
        }
    }
}

/// Detached append: the response path never awaits the record write, and a
/// failed write (reported as `false` and logged by the store) changes nothing
/// for the HTTP caller.
fn record_attempt(
    state: &AppState,
    phone_number: String,
    message: String,
    status: DeliveryStatus,
) {
    let records = state.records.clone();
    tokio::spawn(async move {
        let _ = records
            .append(NewDeliveryRecord {
                phone_number,
                message,
                status,
            })
            .await;
    });
}
