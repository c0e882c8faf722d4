use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppQuery;
use crate::features::inflation::dtos::{InflationListQuery, InflationResponseDto};
use crate::features::inflation::services::InflationService;
use crate::shared::types::{ApiResponse, ErrorResponse};

/// List monthly inflation readings
#[utoipa::path(
    get,
    path = "/api/v1/inflation",
    params(InflationListQuery),
    responses(
        (status = 200, description = "List of inflation readings", body = ApiResponse<Vec<InflationResponseDto>>),
        (status = 500, description = "Query failed", body = ErrorResponse)
    ),
    tag = "inflation"
)]
pub async fn list_inflation(
    State(service): State<Arc<InflationService>>,
    AppQuery(query): AppQuery<InflationListQuery>,
) -> Result<Json<ApiResponse<Vec<InflationResponseDto>>>> {
    let items = service.list(&query).await?;
    let dtos: Vec<InflationResponseDto> = items.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::list(dtos)))
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use crate::shared::test_helpers::{empty_database, seeded_database, test_server};

    #[tokio::test]
    async fn test_year_zero_returns_all_years() {
        let server = test_server(seeded_database());

        let all: Value = server.get("/api/v1/inflation").await.json();
        let zero: Value = server
            .get("/api/v1/inflation")
            .add_query_param("year", "0")
            .await
            .json();

        assert_eq!(all["meta"]["total"], 5);
        assert_eq!(all, zero);
    }

    #[tokio::test]
    async fn test_percentages_are_floats() {
        let server = test_server(seeded_database());

        let body: Value = server
            .get("/api/v1/inflation")
            .add_query_param("year", "2025")
            .await
            .json();

        assert_eq!(body["meta"]["total"], 2);
        assert!(body["data"][0]["yoy"].is_f64());
        assert!(body["data"][0]["mtm"].is_f64());
        assert_eq!(body["data"][0]["month"], 2);
    }

    #[tokio::test]
    async fn test_unknown_year_is_empty() {
        let server = test_server(seeded_database());

        let body: Value = server
            .get("/api/v1/inflation")
            .add_query_param("year", "1999")
            .await
            .json();
        assert_eq!(body, json!({"data": [], "meta": {"total": 0}}));
    }

    #[tokio::test]
    async fn test_repeated_year_uses_first_value() {
        let server = test_server(seeded_database());

        let response = server.get("/api/v1/inflation?year=2024&year=2025").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["meta"]["total"], 2);
        assert!(body["data"]
            .as_array()
            .unwrap()
            .iter()
            .all(|item| item["year"] == 2024));
    }

    #[tokio::test]
    async fn test_empty_table() {
        let server = test_server(empty_database());

        let body: Value = server.get("/api/v1/inflation").await.json();
        assert_eq!(body, json!({"data": [], "meta": {"total": 0}}));
    }
}
