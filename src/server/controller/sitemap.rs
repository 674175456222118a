use axum::{http::StatusCode, response::IntoResponse, Json};
use utoipa::openapi::OpenApi;

use crate::model::api::SitemapDto;

impl SitemapDto {
    /// Collects every path documented in the OpenAPI document
    pub fn from_openapi(api: &OpenApi) -> Self {
        Self {
            endpoints: api.paths.paths.keys().cloned().collect(),
        }
    }
}

/// List every documented endpoint
pub async fn sitemap(sitemap: SitemapDto) -> impl IntoResponse {
    (StatusCode::OK, Json(sitemap))
}
