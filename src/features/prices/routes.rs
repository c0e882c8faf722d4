use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::prices::handlers;
use crate::features::prices::services::PriceService;

/// Create routes for the prices feature
pub fn routes(service: Arc<PriceService>) -> Router {
    Router::new()
        .route("/api/v1/prices", get(handlers::list_prices))
        .with_state(service)
}
