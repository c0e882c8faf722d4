use utoipa::{Modify, OpenApi};

use crate::features::inflation::{dtos as inflation_dtos, handlers as inflation_handlers};
use crate::features::prices::{dtos as prices_dtos, handlers as prices_handlers};
use crate::features::regions::{dtos as regions_dtos, handlers as regions_handlers};
use crate::features::stats::{dtos as stats_dtos, handlers as stats_handlers};
use crate::features::wages::{dtos as wages_dtos, handlers as wages_handlers};
use crate::shared::types::{ApiResponse, ErrorDetail, ErrorResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Stats
        stats_handlers::get_stats,
        // Wages
        wages_handlers::list_wages,
        wages_handlers::get_wage,
        // Prices
        prices_handlers::list_prices,
        // Inflation
        inflation_handlers::list_inflation,
        // Regions
        regions_handlers::list_regions,
        regions_handlers::get_region,
    ),
    components(
        schemas(
            Meta,
            ErrorResponse,
            ErrorDetail,
            stats_dtos::StatsResponseDto,
            wages_dtos::WageResponseDto,
            prices_dtos::PriceResponseDto,
            inflation_dtos::InflationResponseDto,
            regions_dtos::RegionResponseDto,
            regions_dtos::RegionDetailResponseDto,
            regions_dtos::ProvinceGroupResponseDto,
            ApiResponse<stats_dtos::StatsResponseDto>,
            ApiResponse<Vec<wages_dtos::WageResponseDto>>,
            ApiResponse<wages_dtos::WageResponseDto>,
            ApiResponse<Vec<prices_dtos::PriceResponseDto>>,
            ApiResponse<Vec<inflation_dtos::InflationResponseDto>>,
            ApiResponse<Vec<regions_dtos::RegionResponseDto>>,
            ApiResponse<Vec<regions_dtos::ProvinceGroupResponseDto>>,
            ApiResponse<regions_dtos::RegionDetailResponseDto>,
        )
    ),
    tags(
        (name = "stats", description = "Dataset-wide summary"),
        (name = "wages", description = "Minimum regional wages (UMR)"),
        (name = "prices", description = "Grocery commodity prices"),
        (name = "inflation", description = "Monthly inflation readings"),
        (name = "regions", description = "Indonesian regions (kabupaten/kota)"),
    ),
    info(
        title = "OpenData API",
        version = "0.1.0",
        description = "Read-only API over Indonesian open data",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_endpoint_is_documented() {
        let openapi = ApiDoc::openapi();
        let paths: Vec<&str> = openapi.paths.paths.keys().map(String::as_str).collect();

        for path in [
            "/api/v1/stats",
            "/api/v1/wages",
            "/api/v1/wages/{id}",
            "/api/v1/prices",
            "/api/v1/inflation",
            "/api/v1/regions",
            "/api/v1/regions/{id}",
        ] {
            assert!(paths.contains(&path), "missing {path}");
        }
    }

    #[test]
    fn test_info_modifier_overrides_title() {
        let mut openapi = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Custom".to_string(),
            version: "9.9.9".to_string(),
            description: "desc".to_string(),
        }
        .modify(&mut openapi);

        assert_eq!(openapi.info.title, "Custom");
        assert_eq!(openapi.info.version, "9.9.9");
        assert_eq!(openapi.info.description.as_deref(), Some("desc"));
    }
}
