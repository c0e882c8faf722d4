use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppQuery;
use crate::features::prices::dtos::{PriceListQuery, PriceResponseDto};
use crate::features::prices::services::PriceService;
use crate::shared::types::{ApiResponse, ErrorResponse};

/// List commodity prices
#[utoipa::path(
    get,
    path = "/api/v1/prices",
    params(PriceListQuery),
    responses(
        (status = 200, description = "List of prices", body = ApiResponse<Vec<PriceResponseDto>>),
        (status = 500, description = "Query failed", body = ErrorResponse)
    ),
    tag = "prices"
)]
pub async fn list_prices(
    State(service): State<Arc<PriceService>>,
    AppQuery(query): AppQuery<PriceListQuery>,
) -> Result<Json<ApiResponse<Vec<PriceResponseDto>>>> {
    let prices = service.list(&query).await?;
    let dtos: Vec<PriceResponseDto> = prices.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::list(dtos)))
}
