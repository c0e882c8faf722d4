use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::inflation::models::Inflation;
use crate::shared::types::parse_int_or;

/// Query parameters for listing inflation readings
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct InflationListQuery {
    /// Restrict to one year; `0`, empty or unparsable means all years
    #[param(example = "2024")]
    pub year: Option<String>,
}

impl InflationListQuery {
    /// Year filter, with `0` standing for "all years"
    pub fn year(&self) -> Option<i64> {
        match parse_int_or(self.year.as_deref(), 0) {
            0 => None,
            year => Some(year),
        }
    }
}

/// Response DTO for inflation data
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InflationResponseDto {
    pub id: i64,
    pub year: i32,
    pub month: i32,
    pub yoy: f64,
    pub mtm: f64,
}

impl From<Inflation> for InflationResponseDto {
    fn from(inflation: Inflation) -> Self {
        Self {
            id: inflation.id,
            year: inflation.year,
            month: inflation.month,
            yoy: inflation.yoy,
            mtm: inflation.mtm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year(raw: Option<&str>) -> Option<i64> {
        InflationListQuery {
            year: raw.map(str::to_string),
        }
        .year()
    }

    #[test]
    fn test_year_zero_means_all_years() {
        assert_eq!(year(None), None);
        assert_eq!(year(Some("")), None);
        assert_eq!(year(Some("0")), None);
        assert_eq!(year(Some("twenty")), None);
        assert_eq!(year(Some("2024")), Some(2024));
    }
}
