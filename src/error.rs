use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::gateway::GatewayError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Internal error taxonomy. Over HTTP everything flattens to `{ "error": <message> }`;
/// the variants exist so a later revision can expose more detail without
/// changing the external contract.
#[derive(Debug)]
pub enum ApiError {
    InvalidArgument(String),
    Gateway(String),
    /// Record-append failures are logged and swallowed on the dispatch path;
    /// this variant never reaches an HTTP response today.
    #[allow(dead_code)]
    RecordWrite(String),
    NotFound(String),
    Internal(String),
}

impl ApiError {
    /// Fixed 400 body for the dispatch endpoint.
    pub fn missing_fields() -> Self {
        ApiError::InvalidArgument("Missing phoneNumber or message".into())
    }

    fn to_error_response(message: &str) -> Json<ErrorResponse> {
        Json(ErrorResponse {
            error: message.to_string(),
        })
    }
}

impl From<GatewayError> for ApiError {
    fn from(e: GatewayError) -> Self {
        ApiError::Gateway(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidArgument(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::to_error_response(&msg)).into_response()
            }
            ApiError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, ApiError::to_error_response(&msg)).into_response()
            }
            ApiError::Gateway(msg) | ApiError::RecordWrite(msg) | ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::to_error_response(&msg),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::missing_fields().into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("sms not found".into())
                .into_response()
                .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Gateway("provider rejected".into())
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Internal("db error".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_missing_fields_body_is_fixed() {
        let resp = ApiError::missing_fields().into_response();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let v: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(v["error"], "Missing phoneNumber or message");
        assert!(v.get("messageSid").is_none());
    }
}
