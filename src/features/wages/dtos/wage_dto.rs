use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::wages::models::Wage;
use crate::shared::types::{Pagination, SortOrder};

/// Query parameters for listing wages
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct WageListQuery {
    /// Exact province name
    #[param(example = "Jawa Barat")]
    pub province: Option<String>,

    /// Case-insensitive match on region name or province
    #[param(example = "bandung")]
    pub search: Option<String>,

    /// Sort field: `umr` (default), `name` or `province`
    pub sort_by: Option<String>,

    /// `asc` for ascending; anything else sorts descending
    pub sort_order: Option<String>,

    /// Page number (1-indexed, default: 1)
    pub page: Option<String>,

    /// Items per page (default: 20, max: 100)
    pub per_page: Option<String>,
}

impl WageListQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination::from_params(self.page.as_deref(), self.per_page.as_deref())
    }

    pub fn sort_by(&self) -> WageSortBy {
        WageSortBy::from_param(self.sort_by.as_deref())
    }

    pub fn sort_order(&self) -> SortOrder {
        SortOrder::from_param(self.sort_order.as_deref())
    }
}

/// Allow-listed sort fields for the wage listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WageSortBy {
    Umr,
    Name,
    Province,
}

impl WageSortBy {
    /// Unrecognized fields fall back to `umr`
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("name") => WageSortBy::Name,
            Some("province") => WageSortBy::Province,
            _ => WageSortBy::Umr,
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            WageSortBy::Umr => "w.umr",
            WageSortBy::Name => "r.name",
            WageSortBy::Province => "r.province",
        }
    }
}

/// Response DTO for wage data
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WageResponseDto {
    pub id: i64,
    pub region_id: i64,
    /// Region name
    pub region: String,
    pub province: String,
    #[serde(rename = "type")]
    pub region_type: String,
    pub year: i32,
    pub umr: f64,
}

impl From<Wage> for WageResponseDto {
    fn from(wage: Wage) -> Self {
        Self {
            id: wage.id,
            region_id: wage.region_id,
            region: wage.region,
            province: wage.province,
            region_type: wage.region_type,
            year: wage.year,
            umr: wage.umr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_by_allow_list() {
        assert_eq!(WageSortBy::from_param(None), WageSortBy::Umr);
        assert_eq!(WageSortBy::from_param(Some("umr")), WageSortBy::Umr);
        assert_eq!(WageSortBy::from_param(Some("name")), WageSortBy::Name);
        assert_eq!(WageSortBy::from_param(Some("province")), WageSortBy::Province);
        assert_eq!(
            WageSortBy::from_param(Some("umr; DROP TABLE wages")),
            WageSortBy::Umr
        );
    }

    #[test]
    fn test_umr_serializes_as_float() {
        let dto = WageResponseDto {
            id: 1,
            region_id: 3,
            region: "Bandung".to_string(),
            province: "Jawa Barat".to_string(),
            region_type: "kota".to_string(),
            year: 2025,
            umr: 4482914.0,
        };
        let body = serde_json::to_string(&dto).unwrap();
        assert!(body.contains("\"umr\":4482914.0"));
        assert!(body.contains("\"type\":\"kota\""));
    }
}
