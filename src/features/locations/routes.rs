use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::locations::handlers;
use crate::features::locations::services::ReportService;

/// Create routes for the locations feature
///
/// All routes are public (no authentication).
pub fn routes(service: Arc<ReportService>) -> Router {
    Router::new()
        .route(
            "/locations",
            get(handlers::list_locations).post(handlers::create_location),
        )
        .route("/locations/{id}", get(handlers::get_location))
        .with_state(service)
}
