// src/store.rs

use async_trait::async_trait;

use crate::models::NewDeliveryRecord;

/// Append-only audit trail of notification attempts.
///
/// `append` is best-effort: implementations log failures and report them as
/// `false`. A failed write never surfaces to the dispatch path's caller and
/// never reverses a send that already happened.
#[async_trait]
pub trait DeliveryStore: Send + Sync {
    async fn append(&self, record: NewDeliveryRecord) -> bool;
}

pub struct PgDeliveryStore {
    pool: sqlx::PgPool,
}

impl PgDeliveryStore {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DeliveryStore for PgDeliveryStore {
    async fn append(&self, record: NewDeliveryRecord) -> bool {
        // sms_id and "timestamp" are server-assigned (gen_random_uuid(), now()).
        let res = sqlx::query(
            r#"
            INSERT INTO sms (phone_number, message, status)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(&record.phone_number)
        .bind(&record.message)
        .bind(record.status as i16)
        .execute(&self.pool)
        .await;

        match res {
            Ok(_) => true,
            Err(e) => {
                tracing::error!(
                    phone_number = %record.phone_number,
                    error = %e,
                    "failed to append delivery record"
                );
                false
            }
        }
    }
}
