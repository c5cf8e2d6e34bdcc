#[cfg(test)]
use std::{sync::Arc, time::Duration};

#[cfg(test)]
use async_trait::async_trait;
#[cfg(test)]
use uuid::Uuid;

#[cfg(test)]
use crate::features::locations::{
    models::{NewPowerReport, PowerReport},
    store::{MemoryReportStore, ReportStore, StoreError},
    ReportService,
};

#[cfg(test)]
pub fn memory_service() -> ReportService {
    ReportService::new(Arc::new(MemoryReportStore::new()), Duration::from_secs(5))
}

/// Store whose every call fails as if the database were down
#[cfg(test)]
pub struct FailingStore;

#[cfg(test)]
#[async_trait]
impl ReportStore for FailingStore {
    async fn append(&self, _report: NewPowerReport) -> Result<PowerReport, StoreError> {
        Err(StoreError::Unavailable("test store is down".to_string()))
    }

    async fn list_all(&self) -> Result<Vec<PowerReport>, StoreError> {
        Err(StoreError::Unavailable("test store is down".to_string()))
    }

    async fn get(&self, _id: Uuid) -> Result<Option<PowerReport>, StoreError> {
        Err(StoreError::Unavailable("test store is down".to_string()))
    }
}

/// Wraps a store and delays every call
#[cfg(test)]
pub struct SlowStore<S> {
    inner: S,
    delay: Duration,
}

#[cfg(test)]
impl<S> SlowStore<S> {
    pub fn new(inner: S, delay: Duration) -> Self {
        Self { inner, delay }
    }
}

#[cfg(test)]
#[async_trait]
impl<S: ReportStore> ReportStore for SlowStore<S> {
    async fn append(&self, report: NewPowerReport) -> Result<PowerReport, StoreError> {
        tokio::time::sleep(self.delay).await;
        self.inner.append(report).await
    }

    async fn list_all(&self) -> Result<Vec<PowerReport>, StoreError> {
        tokio::time::sleep(self.delay).await;
        self.inner.list_all().await
    }

    async fn get(&self, id: Uuid) -> Result<Option<PowerReport>, StoreError> {
        tokio::time::sleep(self.delay).await;
        self.inner.get(id).await
    }
}
