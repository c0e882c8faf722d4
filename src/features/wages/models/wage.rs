use duckdb::Row;

use crate::core::database::FromRow;

/// Minimum regional wage (UMR) joined with its region
#[derive(Debug, Clone)]
pub struct Wage {
    pub id: i64,
    pub region_id: i64,
    pub region: String,
    pub province: String,
    pub region_type: String,
    pub year: i32,
    pub umr: f64,
}

impl FromRow for Wage {
    fn from_row(row: &Row<'_>) -> duckdb::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            region_id: row.get(1)?,
            region: row.get(2)?,
            province: row.get(3)?,
            region_type: row.get(4)?,
            year: row.get(5)?,
            umr: row.get(6)?,
        })
    }
}
