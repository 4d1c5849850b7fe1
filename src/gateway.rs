// src/gateway.rs

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

const TWILIO_API_BASE: &str = "https://api.twilio.com/2010-04-01";

/// Single error surface for the gateway. Auth failures, network errors,
/// invalid recipients and rate limits all land here; provider error codes
/// are carried only in the message text.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("gateway request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("gateway rejected message (HTTP {status}): {message}")]
    Provider { status: u16, message: String },
}

/// One operation: hand the provider a message, get back its opaque identifier.
#[async_trait]
pub trait SmsGateway: Send + Sync {
    async fn send(&self, to: &str, body: &str, from: &str) -> Result<String, GatewayError>;

    /// Provider name for logging.
    fn name(&self) -> &'static str;
}

pub struct TwilioGateway {
    http: reqwest::Client,
    account_sid: String,
    auth_token: String,
}

#[derive(Debug, Deserialize)]
struct TwilioMessageResponse {
    sid: String,
}

#[derive(Debug, Deserialize)]
struct TwilioErrorResponse {
    message: Option<String>,
}

impl TwilioGateway {
    pub fn new(account_sid: String, auth_token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            account_sid,
            auth_token,
        }
    }

    fn messages_url(&self) -> String {
        format!("{TWILIO_API_BASE}/Accounts/{}/Messages.json", self.account_sid)
    }
}

#[async_trait]
impl SmsGateway for TwilioGateway {
    async fn send(&self, to: &str, body: &str, from: &str) -> Result<String, GatewayError> {
        let resp = self
            .http
            .post(self.messages_url())
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[("To", to), ("From", from), ("Body", body)])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp
                .json::<TwilioErrorResponse>()
                .await
                .ok()
                .and_then(|e| e.message)
                .unwrap_or_else(|| "unknown provider error".to_string());
            return Err(GatewayError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let msg: TwilioMessageResponse = resp.json().await?;
        Ok(msg.sid)
    }

    fn name(&self) -> &'static str {
        "twilio"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_url() {
        let gw = TwilioGateway::new("AC123".into(), "token".into());
        assert_eq!(
            gw.messages_url(),
            "https://api.twilio.com/2010-04-01/Accounts/AC123/Messages.json"
        );
    }

    #[test]
    fn test_provider_error_display_includes_status_and_message() {
        let e = GatewayError::Provider {
            status: 401,
            message: "Authentication Error".into(),
        };
        let s = e.to_string();
        assert!(s.contains("401"));
        assert!(s.contains("Authentication Error"));
    }
}
