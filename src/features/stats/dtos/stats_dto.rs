use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Dataset-wide summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatsResponseDto {
    pub total_regions: i64,
    pub total_provinces: i64,
    /// Mean UMR across all wage rows, 0 without wages
    pub avg_wage: f64,
    pub min_wage: f64,
    pub max_wage: f64,
    /// Year-over-year inflation of the most recent month, 0 without readings
    pub latest_inflation: f64,
    pub total_prices: i64,
    /// Most recent wage year
    pub wage_year: i32,
}
