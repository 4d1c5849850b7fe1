// src/routes/record_routes.rs

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::QueryBuilder;
use uuid::Uuid;

use crate::{
    error::ApiError,
    models::{AppState, DeliveryRecordRow},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sms", get(search_records))
        .route("/sms/{sms_id}", get(get_record))
}

// --------------------------
// Records: GET one
// --------------------------

pub async fn get_record(
    State(state): State<AppState>,
    Path(sms_id): Path<Uuid>,
) -> Result<Json<DeliveryRecordRow>, ApiError> {
    let row: DeliveryRecordRow = sqlx::query_as::<_, DeliveryRecordRow>(
        r#"
        SELECT
          sms_id,
          phone_number,
          message,
          "timestamp",
          status
        FROM sms
        WHERE sms_id = $1
        "#,
    )
    .bind(sms_id)
    .fetch_optional(&state.db)
    .await
    .map_err(|e| ApiError::Internal(format!("db error: {e}")))?
    .ok_or_else(|| ApiError::NotFound("sms record not found".into()))?;

    Ok(Json(row))
}

// --------------------------
// Records: search
// --------------------------

#[derive(Debug, Deserialize)]
pub struct RecordSearchQuery {
    pub status: Option<i16>, // 0=sent, 1=failed
    pub phone_number: Option<String>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub q: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

pub async fn search_records(
    State(state): State<AppState>,
    Query(q): Query<RecordSearchQuery>,
) -> Result<Json<Vec<DeliveryRecordRow>>, ApiError> {
    if let Some(s) = q.status {
        validate_status(s)?;
    }

    let limit = q.limit.unwrap_or(50).clamp(1, 200);
    let offset = q.offset.unwrap_or(0).max(0);

    // QueryBuilder for safe dynamic SQL
    let mut qb: QueryBuilder<sqlx::Postgres> = QueryBuilder::new(
        r#"
        SELECT
          sms_id,
          phone_number,
          message,
          "timestamp",
          status
        FROM sms
        WHERE 1=1
        "#,
    );

    if let Some(status) = q.status {
        qb.push(" AND status = ");
        qb.push_bind(status);
    }
    if let Some(phone) = q.phone_number.as_ref().map(|s| s.trim()).filter(|s| !s.is_empty()) {
        qb.push(" AND phone_number = ");
        qb.push_bind(phone.to_string());
    }
    if let Some(from) = q.from {
        qb.push(r#" AND "timestamp" >= "#);
        qb.push_bind(from);
    }
    if let Some(to) = q.to {
        qb.push(r#" AND "timestamp" <= "#);
        qb.push_bind(to);
    }
    if let Some(keyword) = q.q.as_ref().map(|s| s.trim()).filter(|s| !s.is_empty()) {
        let like = format!("%{}%", keyword);
        qb.push(" AND message ILIKE ");
        qb.push_bind(like);
    }

    qb.push(r#" ORDER BY "timestamp" DESC "#);
    qb.push(" LIMIT ");
    qb.push_bind(limit);
    qb.push(" OFFSET ");
    qb.push_bind(offset);

    let rows: Vec<DeliveryRecordRow> = qb
        .build_query_as::<DeliveryRecordRow>()
        .fetch_all(&state.db)
        .await
        .map_err(|e| ApiError::Internal(format!("db error: {e}")))?;

    Ok(Json(rows))
}

fn validate_status(status: i16) -> Result<(), ApiError> {
    if status == 0 || status == 1 {
        Ok(())
    } else {
        Err(ApiError::InvalidArgument(
            "status must be 0 (sent) or 1 (failed)".into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_status() {
        assert!(validate_status(0).is_ok());
        assert!(validate_status(1).is_ok());
        assert!(validate_status(-1).is_err());
        assert!(validate_status(2).is_err());
    }
}
