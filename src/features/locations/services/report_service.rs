use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::locations::models::{NewPowerReport, PowerReport};
use crate::features::locations::store::{ReportStore, StoreError};

/// Service for accepting and listing power-status reports
pub struct ReportService {
    store: Arc<dyn ReportStore>,
    timeout: Duration,
}

impl ReportService {
    pub fn new(store: Arc<dyn ReportStore>, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    /// Validate and persist a new report
    pub async fn submit_report(
        &self,
        lat: f64,
        lng: f64,
        is_hot: bool,
        date: i64,
    ) -> Result<PowerReport> {
        let report = NewPowerReport {
            lat,
            lng,
            is_hot,
            date,
        };
        if let Err(e) = report.check() {
            tracing::warn!("Rejected power report: {}", e);
            return Err(e);
        }

        let stored = self.bounded(self.store.append(report)).await?;

        tracing::info!(
            "Power report stored: id={}, is_hot={}, date={}",
            stored.id,
            stored.is_hot,
            stored.date
        );

        Ok(stored)
    }

    /// Every stored report in submission order
    pub async fn list_reports(&self) -> Result<Vec<PowerReport>> {
        let reports = self.bounded(self.store.list_all()).await?;
        tracing::debug!("Listed {} power reports", reports.len());
        Ok(reports)
    }

    pub async fn get_report(&self, id: Uuid) -> Result<PowerReport> {
        self.bounded(self.store.get(id))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))
    }

    async fn bounded<T, F>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = std::result::Result<T, StoreError>>,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => result.map_err(AppError::from),
            Err(_) => Err(AppError::Timeout(self.timeout)),
        }
    }
}
