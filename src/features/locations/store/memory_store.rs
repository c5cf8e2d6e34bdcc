use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{ReportStore, StoreError};
use crate::features::locations::models::{NewPowerReport, PowerReport};

/// In-process report store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryReportStore {
    reports: RwLock<Vec<PowerReport>>,
}

impl MemoryReportStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReportStore for MemoryReportStore {
    async fn append(&self, report: NewPowerReport) -> Result<PowerReport, StoreError> {
        let stored = report.into_stored(Utc::now());
        self.reports.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<PowerReport>, StoreError> {
        Ok(self.reports.read().await.clone())
    }

    async fn get(&self, id: Uuid) -> Result<Option<PowerReport>, StoreError> {
        Ok(self
            .reports
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }
}
