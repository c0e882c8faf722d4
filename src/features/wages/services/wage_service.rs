use duckdb::types::Value;

use crate::core::database::{fetch_all, fetch_count, fetch_optional, Database};
use crate::core::error::{AppError, Result};
use crate::features::wages::dtos::WageListQuery;
use crate::features::wages::models::Wage;
use crate::shared::query::QueryFilter;

const WAGE_SELECT: &str = r#"
    SELECT w.id, w.region_id, r.name, r.province, r.type, w.year, CAST(w.umr AS DOUBLE)
    FROM wages w
    JOIN regions r ON r.id = w.region_id
"#;

const WAGE_COUNT: &str = r#"
    SELECT COUNT(*)
    FROM wages w
    JOIN regions r ON r.id = w.region_id
"#;

/// SQL and bound values for one page of wages plus its total
#[derive(Debug)]
struct WageListStatement {
    count_sql: String,
    select_sql: String,
    filter_params: Vec<Value>,
    page_params: [Value; 2],
}

impl WageListStatement {
    fn build(query: &WageListQuery) -> Self {
        let filter = QueryFilter::new()
            .eq("r.province", query.province.as_deref())
            .contains(&["r.name", "r.province"], query.search.as_deref());
        let where_clause = filter.where_clause();
        let pagination = query.pagination();

        Self {
            count_sql: format!("{} {}", WAGE_COUNT, where_clause),
            select_sql: format!(
                "{} {} ORDER BY {} {}, w.id ASC LIMIT ? OFFSET ?",
                WAGE_SELECT,
                where_clause,
                query.sort_by().column(),
                query.sort_order().as_sql()
            ),
            filter_params: filter.params(),
            page_params: [
                Value::BigInt(pagination.limit()),
                Value::BigInt(pagination.offset()),
            ],
        }
    }

    fn select_params(&self) -> Vec<Value> {
        let mut params = self.filter_params.clone();
        params.extend(self.page_params.iter().cloned());
        params
    }
}

/// Service for minimum regional wage queries
pub struct WageService {
    db: Database,
}

impl WageService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// List one page of wages.
    /// Returns (wages, total matching rows)
    pub async fn list(&self, query: &WageListQuery) -> Result<(Vec<Wage>, i64)> {
        let statement = WageListStatement::build(query);

        self.db
            .run(move |conn| {
                let total = fetch_count(conn, &statement.count_sql, &statement.filter_params)?;
                let wages = fetch_all(conn, &statement.select_sql, &statement.select_params())?;
                Ok((wages, total))
            })
            .await
            .inspect_err(|e| tracing::error!("Failed to list wages: {:?}", e))
    }

    /// Get a wage by its ID
    pub async fn get_by_id(&self, id: i64) -> Result<Wage> {
        let sql = format!("{} WHERE w.id = ?", WAGE_SELECT);

        self.db
            .run(move |conn| fetch_optional(conn, &sql, &[Value::BigInt(id)]))
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch wage {}: {:?}", id, e))?
            .ok_or_else(|| AppError::NotFound("wage not found".to_string()))
    }
}
