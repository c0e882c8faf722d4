use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::{AppQuery, IdPath};
use crate::features::regions::dtos::{
    ProvinceGroupResponseDto, RegionDetailResponseDto, RegionListQuery, RegionResponseDto,
};
use crate::features::regions::services::RegionService;
use crate::shared::types::{ApiResponse, ErrorResponse};

/// List regions, or region counts per province with `group_by=province`
#[utoipa::path(
    get,
    path = "/api/v1/regions",
    params(RegionListQuery),
    responses(
        (status = 200, description = "List of regions, or of province groups when group_by=province", body = ApiResponse<Vec<RegionResponseDto>>),
        (status = 500, description = "Query failed", body = ErrorResponse)
    ),
    tag = "regions"
)]
pub async fn list_regions(
    State(service): State<Arc<RegionService>>,
    AppQuery(query): AppQuery<RegionListQuery>,
) -> Result<Response> {
    if query.is_grouped_by_province() {
        let provinces = service.list_provinces().await?;
        let dtos: Vec<ProvinceGroupResponseDto> = provinces.into_iter().map(Into::into).collect();
        return Ok(Json(ApiResponse::list(dtos)).into_response());
    }

    let regions = service.list(&query).await?;
    let dtos: Vec<RegionResponseDto> = regions.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::list(dtos)).into_response())
}

/// Get a region by ID with its latest wage
#[utoipa::path(
    get,
    path = "/api/v1/regions/{id}",
    params(
        ("id" = i64, Path, description = "Region ID")
    ),
    responses(
        (status = 200, description = "Region details", body = ApiResponse<RegionDetailResponseDto>),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Region not found", body = ErrorResponse),
        (status = 500, description = "Query failed", body = ErrorResponse)
    ),
    tag = "regions"
)]
pub async fn get_region(
    State(service): State<Arc<RegionService>>,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<RegionDetailResponseDto>>> {
    let region = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(region.into(), None)))
}
