pub mod inflation;
pub mod prices;
pub mod regions;
pub mod stats;
pub mod wages;

use std::sync::Arc;

use axum::{http::StatusCode, routing::get, Router};

use crate::core::database::Database;
use inflation::{routes as inflation_routes, InflationService};
use prices::{routes as prices_routes, PriceService};
use regions::{routes as regions_routes, RegionService};
use stats::{routes as stats_routes, StatsService};
use wages::{routes as wages_routes, WageService};

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Liveness probe outside `/api/v1`
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Build the `/api/v1` routes of every feature on top of one shared database handle
pub fn router(database: Database) -> Router {
    let stats_service = Arc::new(StatsService::new(database.clone()));
    let wage_service = Arc::new(WageService::new(database.clone()));
    let price_service = Arc::new(PriceService::new(database.clone()));
    let inflation_service = Arc::new(InflationService::new(database.clone()));
    let region_service = Arc::new(RegionService::new(database));
    tracing::debug!("Feature services initialized");

    Router::new()
        .merge(stats_routes::routes(stats_service))
        .merge(wages_routes::routes(wage_service))
        .merge(prices_routes::routes(price_service))
        .merge(inflation_routes::routes(inflation_service))
        .merge(regions_routes::routes(region_service))
}

#[cfg(test)]
mod tests {
    use crate::shared::test_helpers::{empty_database, test_server};

    #[tokio::test]
    async fn test_health_check() {
        let server = test_server(empty_database());

        let response = server.get("/health").await;
        response.assert_status_ok();
        assert!(response.text().is_empty());
    }
}
