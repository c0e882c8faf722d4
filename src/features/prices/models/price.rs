use chrono::NaiveDate;
use duckdb::Row;

use crate::core::database::FromRow;

/// Observed commodity price
#[derive(Debug, Clone)]
pub struct Price {
    pub id: i64,
    pub commodity: String,
    pub price: f64,
    pub unit: String,
    pub market_type: Option<String>,
    pub region_type: Option<String>,
    pub province: Option<String>,
    pub date: NaiveDate,
}

impl FromRow for Price {
    fn from_row(row: &Row<'_>) -> duckdb::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            commodity: row.get(1)?,
            price: row.get(2)?,
            unit: row.get(3)?,
            market_type: row.get(4)?,
            region_type: row.get(5)?,
            province: row.get(6)?,
            date: row.get(7)?,
        })
    }
}
