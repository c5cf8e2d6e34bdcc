use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{ReportStore, StoreError};
use crate::features::locations::models::{NewPowerReport, PowerReport};

/// PostgreSQL-backed report store.
///
/// Insertion order comes from the `seq` BIGSERIAL column; each append is a
/// single `INSERT ... RETURNING`, so concurrent writers need no extra locking.
#[derive(Clone)]
pub struct PgReportStore {
    pool: PgPool,
}

impl PgReportStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Pool exhaustion and shutdown mean the database is out of reach rather than
/// that the statement failed
fn classify(e: sqlx::Error) -> StoreError {
    match e {
        sqlx::Error::PoolTimedOut => {
            StoreError::Unavailable("timed out acquiring a connection".to_string())
        }
        sqlx::Error::PoolClosed => StoreError::Unavailable("connection pool closed".to_string()),
        other => StoreError::Database(other),
    }
}

#[async_trait]
impl ReportStore for PgReportStore {
    async fn append(&self, report: NewPowerReport) -> Result<PowerReport, StoreError> {
        let stored = sqlx::query_as::<_, PowerReport>(
            r#"
            INSERT INTO power_reports (id, lat, lng, is_hot, date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, lat, lng, is_hot, date, received_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(report.lat)
        .bind(report.lng)
        .bind(report.is_hot)
        .bind(report.date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert power report: {:?}", e);
            classify(e)
        })?;

        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<PowerReport>, StoreError> {
        let reports = sqlx::query_as::<_, PowerReport>(
            r#"
            SELECT id, lat, lng, is_hot, date, received_at
            FROM power_reports
            ORDER BY seq ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list power reports: {:?}", e);
            classify(e)
        })?;

        Ok(reports)
    }

    async fn get(&self, id: Uuid) -> Result<Option<PowerReport>, StoreError> {
        let report = sqlx::query_as::<_, PowerReport>(
            r#"
            SELECT id, lat, lng, is_hot, date, received_at
            FROM power_reports
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch power report {}: {:?}", id, e);
            classify(e)
        })?;

        Ok(report)
    }
}
