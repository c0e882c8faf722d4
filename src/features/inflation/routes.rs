use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::inflation::handlers;
use crate::features::inflation::services::InflationService;

/// Create routes for the inflation feature
pub fn routes(service: Arc<InflationService>) -> Router {
    Router::new()
        .route("/api/v1/inflation", get(handlers::list_inflation))
        .with_state(service)
}
