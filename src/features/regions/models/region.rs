use duckdb::Row;

use crate::core::database::FromRow;

/// Region (kabupaten/kota) with its province and urban/rural type
#[derive(Debug, Clone)]
pub struct Region {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub province: String,
    pub region_type: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl FromRow for Region {
    fn from_row(row: &Row<'_>) -> duckdb::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            code: row.get(1)?,
            name: row.get(2)?,
            province: row.get(3)?,
            region_type: row.get(4)?,
            lat: row.get(5)?,
            lng: row.get(6)?,
        })
    }
}

/// Region with its most recent wage, if any
#[derive(Debug, Clone)]
pub struct RegionDetail {
    pub region: Region,
    pub wage: Option<f64>,
    pub year: Option<i32>,
}

impl FromRow for RegionDetail {
    fn from_row(row: &Row<'_>) -> duckdb::Result<Self> {
        Ok(Self {
            region: Region::from_row(row)?,
            wage: row.get(7)?,
            year: row.get(8)?,
        })
    }
}

/// Number of regions in a province
#[derive(Debug, Clone)]
pub struct ProvinceGroup {
    pub province: String,
    pub count: i64,
}

impl FromRow for ProvinceGroup {
    fn from_row(row: &Row<'_>) -> duckdb::Result<Self> {
        Ok(Self {
            province: row.get(0)?,
            count: row.get(1)?,
        })
    }
}
