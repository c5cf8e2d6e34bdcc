use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath};
use crate::features::locations::dtos::{CreatePowerReportDto, PowerReportDto};
use crate::features::locations::services::ReportService;

/// List every power report
///
/// Returns a bare JSON array in submission order so map clients can render
/// it directly.
#[utoipa::path(
    get,
    path = "/locations",
    responses(
        (status = 200, description = "All stored reports", body = Vec<PowerReportDto>),
        (status = 500, description = "Storage error"),
        (status = 504, description = "Storage timed out")
    ),
    tag = "locations"
)]
pub async fn list_locations(
    State(service): State<Arc<ReportService>>,
) -> Result<Json<Vec<PowerReportDto>>> {
    let reports = service.list_reports().await?;
    Ok(Json(reports.into_iter().map(Into::into).collect()))
}

/// Submit a power report for the caller's location
#[utoipa::path(
    post,
    path = "/locations",
    request_body = CreatePowerReportDto,
    responses(
        (status = 201, description = "Report stored", body = PowerReportDto),
        (status = 400, description = "Validation error or malformed body"),
        (status = 500, description = "Storage error"),
        (status = 504, description = "Storage timed out")
    ),
    tag = "locations"
)]
pub async fn create_location(
    State(service): State<Arc<ReportService>>,
    AppJson(dto): AppJson<CreatePowerReportDto>,
) -> Result<(StatusCode, Json<PowerReportDto>)> {
    let report = service
        .submit_report(dto.lat, dto.lng, dto.is_hot, dto.date)
        .await?;
    Ok((StatusCode::CREATED, Json(report.into())))
}

/// Get a single report by its server-assigned id
#[utoipa::path(
    get,
    path = "/locations/{id}",
    params(
        ("id" = Uuid, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report found", body = PowerReportDto),
        (status = 400, description = "Malformed report id"),
        (status = 404, description = "Report not found")
    ),
    tag = "locations"
)]
pub async fn get_location(
    State(service): State<Arc<ReportService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<PowerReportDto>> {
    let report = service.get_report(id).await?;
    Ok(Json(report.into()))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::features::locations::dtos::PowerReportDto;
    use crate::features::locations::routes;
    use crate::features::locations::services::ReportService;
    use crate::shared::test_helpers::{memory_service, FailingStore};

    use super::*;

    fn server() -> TestServer {
        TestServer::new(routes::routes(Arc::new(memory_service()))).unwrap()
    }

    #[tokio::test]
    async fn test_list_empty() {
        let server = server();
        let response = server.get("/locations").await;
        response.assert_status_ok();
        response.assert_json(&json!([]));
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let server = server();

        let response = server
            .post("/locations")
            .json(&json!({"lat": 51.5, "lng": -0.13, "isHot": true, "date": 1700000000000_i64}))
            .await;
        response.assert_status(StatusCode::CREATED);
        let created: PowerReportDto = response.json();
        assert_eq!(created.lat, 51.5);
        assert_eq!(created.lng, -0.13);
        assert!(created.is_hot);
        assert_eq!(created.date, 1_700_000_000_000);

        server
            .post("/locations")
            .json(&json!({"lat": 51.5, "lng": -0.13, "isHot": false, "date": 1700000000001_i64}))
            .await
            .assert_status(StatusCode::CREATED);

        let listed: Vec<Value> = server.get("/locations").await.json();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0]["id"], json!(created.id));
        assert_eq!(listed[0]["isHot"], json!(true));
        assert_eq!(listed[1]["isHot"], json!(false));
        assert_eq!(listed[1]["date"], json!(1700000000001_i64));
    }

    #[tokio::test]
    async fn test_create_rejects_out_of_range() {
        let server = server();

        let response = server
            .post("/locations")
            .json(&json!({"lat": 95.0, "lng": 0.0, "isHot": true, "date": 0}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], json!(false));
        assert!(body["errors"].is_array());

        let listed: Vec<Value> = server.get("/locations").await.json();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_body() {
        let server = server();

        server
            .post("/locations")
            .json(&json!({"lat": "north", "lng": 0.0, "isHot": true, "date": 0}))
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        server
            .post("/locations")
            .json(&json!({"lat": 1.0, "lng": 0.0, "date": 0}))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let server = server();
        let created: PowerReportDto = server
            .post("/locations")
            .json(&json!({"lat": -15.4, "lng": 28.3, "isHot": true, "date": 42}))
            .await
            .json();

        let fetched: PowerReportDto = server
            .get(&format!("/locations/{}", created.id))
            .await
            .json();
        assert_eq!(fetched, created);

        server
            .get(&format!("/locations/{}", Uuid::now_v7()))
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn test_get_with_malformed_id_uses_envelope() {
        let response = server().get("/locations/not-a-uuid").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["data"], Value::Null);
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn test_storage_failure_is_500() {
        let service = ReportService::new(Arc::new(FailingStore), Duration::from_secs(1));
        let server = TestServer::new(routes::routes(Arc::new(service))).unwrap();

        server
            .get("/locations")
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        server
            .post("/locations")
            .json(&json!({"lat": 0.0, "lng": 0.0, "isHot": true, "date": 0}))
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }
}
