use duckdb::Row;

use crate::core::database::FromRow;

/// Monthly inflation reading
#[derive(Debug, Clone)]
pub struct Inflation {
    pub id: i64,
    pub year: i32,
    pub month: i32,
    /// Year-over-year change in percent
    pub yoy: f64,
    /// Month-to-month change in percent
    pub mtm: f64,
}

impl FromRow for Inflation {
    fn from_row(row: &Row<'_>) -> duckdb::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            year: row.get(1)?,
            month: row.get(2)?,
            yoy: row.get(3)?,
            mtm: row.get(4)?,
        })
    }
}
