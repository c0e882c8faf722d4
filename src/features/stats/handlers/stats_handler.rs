use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::stats::dtos::StatsResponseDto;
use crate::features::stats::services::StatsService;
use crate::shared::types::{ApiResponse, ErrorResponse};

/// Get dataset-wide statistics
#[utoipa::path(
    get,
    path = "/api/v1/stats",
    responses(
        (status = 200, description = "Dataset summary", body = ApiResponse<StatsResponseDto>),
        (status = 500, description = "Query failed", body = ErrorResponse)
    ),
    tag = "stats"
)]
pub async fn get_stats(
    State(service): State<Arc<StatsService>>,
) -> Result<Json<ApiResponse<StatsResponseDto>>> {
    let stats = service.get_stats().await?;
    Ok(Json(ApiResponse::success(stats, None)))
}
