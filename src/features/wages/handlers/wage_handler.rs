use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::{AppQuery, IdPath};
use crate::features::wages::dtos::{WageListQuery, WageResponseDto};
use crate::features::wages::services::WageService;
use crate::shared::types::{ApiResponse, ErrorResponse, Meta};

/// List minimum regional wages
#[utoipa::path(
    get,
    path = "/api/v1/wages",
    params(WageListQuery),
    responses(
        (status = 200, description = "Paginated list of wages", body = ApiResponse<Vec<WageResponseDto>>),
        (status = 500, description = "Query failed", body = ErrorResponse)
    ),
    tag = "wages"
)]
pub async fn list_wages(
    State(service): State<Arc<WageService>>,
    AppQuery(query): AppQuery<WageListQuery>,
) -> Result<Json<ApiResponse<Vec<WageResponseDto>>>> {
    let pagination = query.pagination();
    let (wages, total) = service.list(&query).await?;
    let dtos: Vec<WageResponseDto> = wages.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(
        dtos,
        Some(Meta::paginated(total, pagination)),
    )))
}

/// Get a wage by ID
#[utoipa::path(
    get,
    path = "/api/v1/wages/{id}",
    params(
        ("id" = i64, Path, description = "Wage ID")
    ),
    responses(
        (status = 200, description = "Wage details", body = ApiResponse<WageResponseDto>),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Wage not found", body = ErrorResponse),
        (status = 500, description = "Query failed", body = ErrorResponse)
    ),
    tag = "wages"
)]
pub async fn get_wage(
    State(service): State<Arc<WageService>>,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<WageResponseDto>>> {
    let wage = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(wage.into(), None)))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    use crate::shared::test_helpers::{empty_database, seeded_database, test_server};

    #[tokio::test]
    async fn test_list_wages_envelope() {
        let server = test_server(seeded_database());

        let response = server.get("/api/v1/wages").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["meta"], json!({"total": 6, "page": 1, "per_page": 20}));
        assert_eq!(body["data"].as_array().unwrap().len(), 6);
        assert!(body["data"][0]["umr"].is_f64());
    }

    #[tokio::test]
    async fn test_list_wages_pagination_defaults_silently() {
        let server = test_server(seeded_database());

        for (page, per_page) in [("0", "0"), ("-1", "-5"), ("abc", "500")] {
            let response = server
                .get("/api/v1/wages")
                .add_query_param("page", page)
                .add_query_param("per_page", per_page)
                .await;
            response.assert_status_ok();

            let body: Value = response.json();
            assert_eq!(body["meta"]["page"], 1);
            assert_eq!(body["meta"]["per_page"], 20);
        }
    }

    #[tokio::test]
    async fn test_list_wages_huge_page_is_empty() {
        let server = test_server(seeded_database());

        let response = server
            .get("/api/v1/wages")
            .add_query_param("page", i64::MAX)
            .add_query_param("per_page", 100)
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["data"], json!([]));
        assert_eq!(body["meta"], json!({"total": 6, "page": i64::MAX, "per_page": 100}));
    }

    #[tokio::test]
    async fn test_list_wages_repeated_key_uses_first_value() {
        let server = test_server(seeded_database());

        let response = server.get("/api/v1/wages?page=1&page=2&per_page=2").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["meta"], json!({"total": 6, "page": 1, "per_page": 2}));
    }

    #[tokio::test]
    async fn test_list_wages_garbage_sort_order_is_descending() {
        let server = test_server(seeded_database());

        let response = server
            .get("/api/v1/wages")
            .add_query_param("sort_order", "garbage")
            .await;
        let body: Value = response.json();
        let umrs: Vec<f64> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|w| w["umr"].as_f64().unwrap())
            .collect();

        assert!(umrs.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[tokio::test]
    async fn test_list_wages_empty_result_is_empty_array() {
        let server = test_server(empty_database());

        let response = server.get("/api/v1/wages").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["data"], json!([]));
        assert_eq!(body["meta"]["total"], 0);
    }

    #[tokio::test]
    async fn test_get_wage_ok() {
        let server = test_server(seeded_database());

        let response = server.get("/api/v1/wages/1").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["data"]["region"], "Jakarta Pusat");
        assert_eq!(body["data"]["province"], "DKI Jakarta");
        assert_eq!(body["data"]["type"], "kota");
        assert_eq!(body["data"]["umr"], 5396760.5);
        assert!(body.get("meta").is_none());
    }

    #[tokio::test]
    async fn test_get_wage_invalid_id() {
        let server = test_server(seeded_database());

        let response = server.get("/api/v1/wages/abc").await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_get_wage_not_found() {
        let server = test_server(seeded_database());

        let response = server.get("/api/v1/wages/999999").await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

        let body: Value = response.json();
        assert_eq!(
            body,
            json!({"error": {"code": "NOT_FOUND", "message": "wage not found"}})
        );
    }
}
