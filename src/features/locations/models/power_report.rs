use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::locations::dtos::PowerReportDto;
use crate::shared::validation::ensure_finite;

/// A stored power-status report. Immutable once appended.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct PowerReport {
    pub id: Uuid,
    pub lat: f64,
    pub lng: f64,
    /// `true` when the reporter has power
    pub is_hot: bool,
    /// Client-side submission time, milliseconds since the Unix epoch
    pub date: i64,
    pub received_at: DateTime<Utc>,
}

/// Data for appending a new report
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewPowerReport {
    #[validate(range(min = -90.0, max = 90.0, message = "lat must be between -90 and 90"))]
    pub lat: f64,

    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "lng must be between -180 and 180"
    ))]
    pub lng: f64,

    pub is_hot: bool,

    #[validate(range(min = 0, message = "date must not be negative"))]
    pub date: i64,
}

impl NewPowerReport {
    /// Range checks skip NaN, so finiteness is checked first
    pub fn check(&self) -> Result<()> {
        ensure_finite("lat", self.lat).map_err(AppError::Validation)?;
        ensure_finite("lng", self.lng).map_err(AppError::Validation)?;
        self.validate()
            .map_err(|e| AppError::Validation(e.to_string()))
    }

    /// Materialise the stored form with a fresh time-ordered id
    pub fn into_stored(self, received_at: DateTime<Utc>) -> PowerReport {
        PowerReport {
            id: Uuid::now_v7(),
            lat: self.lat,
            lng: self.lng,
            is_hot: self.is_hot,
            date: self.date,
            received_at,
        }
    }
}

impl From<PowerReport> for PowerReportDto {
    fn from(r: PowerReport) -> Self {
        Self {
            id: r.id,
            lat: r.lat,
            lng: r.lng,
            is_hot: r.is_hot,
            date: r.date,
            received_at: r.received_at,
        }
    }
}
