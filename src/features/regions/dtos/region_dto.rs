use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::regions::models::{ProvinceGroup, Region, RegionDetail};

/// Query parameters for listing regions
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct RegionListQuery {
    /// Exact province name
    #[param(example = "Jawa Barat")]
    pub province: Option<String>,

    /// Exact region type (e.g. `kota`, `kabupaten`)
    #[serde(rename = "type")]
    pub region_type: Option<String>,

    /// Search by name or province (case-insensitive, partial match)
    #[param(example = "jakarta")]
    pub search: Option<String>,

    /// `province` switches to a per-province count and ignores the other filters
    #[param(example = "province")]
    pub group_by: Option<String>,
}

impl RegionListQuery {
    pub fn is_grouped_by_province(&self) -> bool {
        self.group_by.as_deref() == Some("province")
    }
}

/// Response DTO for region data
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegionResponseDto {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub province: String,
    #[serde(rename = "type")]
    pub region_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

impl From<Region> for RegionResponseDto {
    fn from(region: Region) -> Self {
        Self {
            id: region.id,
            code: region.code,
            name: region.name,
            province: region.province,
            region_type: region.region_type,
            lat: region.lat,
            lng: region.lng,
        }
    }
}

/// Response DTO for a single region with its latest wage.
/// `wage` and `year` are `null` when the region has no wage record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegionDetailResponseDto {
    #[serde(flatten)]
    pub region: RegionResponseDto,
    pub wage: Option<f64>,
    pub year: Option<i32>,
}

impl From<RegionDetail> for RegionDetailResponseDto {
    fn from(detail: RegionDetail) -> Self {
        Self {
            region: detail.region.into(),
            wage: detail.wage,
            year: detail.year,
        }
    }
}

/// Response DTO for the per-province listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProvinceGroupResponseDto {
    pub province: String,
    pub count: i64,
}

impl From<ProvinceGroup> for ProvinceGroupResponseDto {
    fn from(group: ProvinceGroup) -> Self {
        Self {
            province: group.province,
            count: group.count,
        }
    }
}
