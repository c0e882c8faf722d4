use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::regions::handlers;
use crate::features::regions::services::RegionService;

/// Create routes for the regions feature
pub fn routes(service: Arc<RegionService>) -> Router {
    Router::new()
        .route("/api/v1/regions", get(handlers::list_regions))
        .route("/api/v1/regions/{id}", get(handlers::get_region))
        .with_state(service)
}
