use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::wages::handlers;
use crate::features::wages::services::WageService;

/// Create routes for the wages feature
pub fn routes(service: Arc<WageService>) -> Router {
    Router::new()
        .route("/api/v1/wages", get(handlers::list_wages))
        .route("/api/v1/wages/{id}", get(handlers::get_wage))
        .with_state(service)
}
