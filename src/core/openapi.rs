use utoipa::{Modify, OpenApi};

use crate::features::locations::{dtos as locations_dtos, handlers as locations_handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        locations_handlers::list_locations,
        locations_handlers::create_location,
        locations_handlers::get_location,
    ),
    components(
        schemas(
            locations_dtos::CreatePowerReportDto,
            locations_dtos::PowerReportDto,
        )
    ),
    tags(
        (name = "locations", description = "Power availability reports"),
    ),
    info(
        title = "Load Shedding Tracker API",
        version = "0.1.0",
        description = "Crowd-sourced power availability reports",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_location_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/locations"));
        assert!(doc.paths.paths.contains_key("/locations/{id}"));
    }

    #[test]
    fn test_info_modifier() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Tracker".to_string(),
            version: "9.9.9".to_string(),
            description: "desc".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Tracker");
        assert_eq!(doc.info.version, "9.9.9");
        assert_eq!(doc.info.description.as_deref(), Some("desc"));
    }
}
