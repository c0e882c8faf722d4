use duckdb::types::Value;
use duckdb::Row;

use crate::core::database::{fetch_one, Database, FromRow};
use crate::core::error::Result;
use crate::features::stats::dtos::StatsResponseDto;
use crate::shared::constants::DEFAULT_WAGE_YEAR;

const STATS_SQL: &str = r#"
    SELECT
        (SELECT COUNT(*) FROM regions),
        (SELECT COUNT(DISTINCT province) FROM regions),
        CAST((SELECT COALESCE(AVG(umr), 0) FROM wages) AS DOUBLE),
        CAST((SELECT COALESCE(MIN(umr), 0) FROM wages) AS DOUBLE),
        CAST((SELECT COALESCE(MAX(umr), 0) FROM wages) AS DOUBLE),
        CAST(COALESCE(
            (SELECT yoy FROM inflation ORDER BY year DESC, month DESC, id DESC LIMIT 1),
            0
        ) AS DOUBLE),
        (SELECT COUNT(*) FROM grocery_prices),
        CAST((SELECT COALESCE(MAX(year), ?) FROM wages) AS INTEGER)
"#;

impl FromRow for StatsResponseDto {
    fn from_row(row: &Row<'_>) -> duckdb::Result<Self> {
        Ok(Self {
            total_regions: row.get(0)?,
            total_provinces: row.get(1)?,
            avg_wage: row.get(2)?,
            min_wage: row.get(3)?,
            max_wage: row.get(4)?,
            latest_inflation: row.get(5)?,
            total_prices: row.get(6)?,
            wage_year: row.get(7)?,
        })
    }
}

/// Service for the dashboard summary
pub struct StatsService {
    db: Database,
}

impl StatsService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Compute the summary in a single round trip
    pub async fn get_stats(&self) -> Result<StatsResponseDto> {
        self.db
            .run(|conn| fetch_one(conn, STATS_SQL, &[Value::Int(DEFAULT_WAGE_YEAR)]))
            .await
            .inspect_err(|e| tracing::error!("Failed to compute stats: {:?}", e))
    }
}
