use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::sync::Arc;
use uuid::Uuid;

use crate::gateway::SmsGateway;
use crate::store::DeliveryStore;

#[derive(Clone)]
pub struct AppState {
    pub db: sqlx::PgPool,
    pub gateway: Arc<dyn SmsGateway>,
    pub records: Arc<dyn DeliveryStore>,
    /// Fixed sender identity, read from config at startup.
    pub from_number: String,
}

/* -------------------------
   API DTOs
--------------------------*/

/// Both fields optional at the serde level so a missing field reaches the
/// handler and gets the contract's fixed 400 body instead of a 422 from the
/// JSON extractor.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendSmsRequest {
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendSmsResponse {
    pub success: bool,
    pub message_sid: String,
}

#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub data: OkData,
}

#[derive(Debug, Serialize)]
pub struct OkData {
    pub ok: bool,
}

/* -------------------------
   DB Row Models
--------------------------*/

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, sqlx::Type)]
#[sqlx(type_name = "smallint")]
#[repr(i16)]
pub enum DeliveryStatus {
    Sent = 0,
    Failed = 1,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DeliveryRecordRow {
    pub sms_id: Uuid,
    pub phone_number: String,
    pub message: String,
    pub timestamp: DateTime<Utc>, // server-assigned at insert
    pub status: DeliveryStatus,
}

/// Insert payload for the delivery record store; `sms_id` and `timestamp`
/// are assigned by the database.
#[derive(Debug, Clone)]
pub struct NewDeliveryRecord {
    pub phone_number: String,
    pub message: String,
    pub status: DeliveryStatus,
}
