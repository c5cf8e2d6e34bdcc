use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Request DTO for submitting a power-status report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePowerReportDto {
    /// Latitude in degrees, -90 to 90
    #[schema(example = 51.5)]
    pub lat: f64,

    /// Longitude in degrees, -180 to 180
    #[schema(example = -0.13)]
    pub lng: f64,

    /// `true` when the reporter currently has power
    pub is_hot: bool,

    /// Client submission time in milliseconds since the Unix epoch
    #[schema(example = 1700000000000_i64)]
    pub date: i64,
}

/// Response DTO for a stored report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PowerReportDto {
    pub id: Uuid,
    pub lat: f64,
    pub lng: f64,
    pub is_hot: bool,
    pub date: i64,
    pub received_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_dto_reads_client_field_names() {
        let dto: CreatePowerReportDto = serde_json::from_value(json!({
            "lat": 51.5,
            "lng": -0.13,
            "isHot": true,
            "date": 1700000000000_i64
        }))
        .unwrap();

        assert!(dto.is_hot);
        assert_eq!(dto.date, 1_700_000_000_000);
    }

    #[test]
    fn test_create_dto_requires_date() {
        let result = serde_json::from_value::<CreatePowerReportDto>(json!({
            "lat": 51.5,
            "lng": -0.13,
            "isHot": false
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_response_dto_uses_camel_case() {
        let dto = PowerReportDto {
            id: Uuid::nil(),
            lat: 1.0,
            lng: 2.0,
            is_hot: false,
            date: 5,
            received_at: Utc::now(),
        };
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["isHot"], json!(false));
        assert!(value.get("receivedAt").is_some());
        assert!(value.get("is_hot").is_none());
    }
}
