//! Persistence for power reports.
//!
//! The service only sees [`ReportStore`]; the backend is picked at startup
//! from `STORAGE_BACKEND` and injected as `Arc<dyn ReportStore>`.

mod memory_store;
mod pg_store;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::features::locations::models::{NewPowerReport, PowerReport};

pub use memory_store::MemoryReportStore;
pub use pg_store::PgReportStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Append-only collection of power reports
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Persist a validated report, assigning its id and receive time
    async fn append(&self, report: NewPowerReport) -> Result<PowerReport, StoreError>;

    /// Snapshot of every stored report in insertion order
    async fn list_all(&self) -> Result<Vec<PowerReport>, StoreError>;

    async fn get(&self, id: Uuid) -> Result<Option<PowerReport>, StoreError>;
}
