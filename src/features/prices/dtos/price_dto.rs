use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::prices::models::Price;

/// Query parameters for listing commodity prices
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct PriceListQuery {
    /// Exact market type (e.g. `tradisional`, `modern`)
    pub market_type: Option<String>,

    /// Exact region type (e.g. `kota`, `kabupaten`)
    pub region_type: Option<String>,

    /// Case-insensitive match on commodity name
    #[param(example = "beras")]
    pub search: Option<String>,
}

/// Response DTO for price data
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PriceResponseDto {
    pub id: i64,
    pub commodity: String,
    pub price: f64,
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    pub date: NaiveDate,
}

impl From<Price> for PriceResponseDto {
    fn from(price: Price) -> Self {
        Self {
            id: price.id,
            commodity: price.commodity,
            price: price.price,
            unit: price.unit,
            market_type: price.market_type,
            region_type: price.region_type,
            province: price.province,
            date: price.date,
        }
    }
}
