use crate::core::database::{fetch_all, Database};
use crate::core::error::Result;
use crate::features::inflation::dtos::InflationListQuery;
use crate::features::inflation::models::Inflation;
use crate::shared::query::QueryFilter;

/// Service for inflation index queries
pub struct InflationService {
    db: Database,
}

impl InflationService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// List readings, most recent month first
    pub async fn list(&self, query: &InflationListQuery) -> Result<Vec<Inflation>> {
        let filter = QueryFilter::new().eq_int("year", query.year());
        let sql = format!(
            r#"
            SELECT id, year, month,
                CAST(COALESCE(yoy, 0) AS DOUBLE),
                CAST(COALESCE(mtm, 0) AS DOUBLE)
            FROM inflation
            {}
            ORDER BY year DESC, month DESC, id
            "#,
            filter.where_clause()
        );
        let params = filter.params();

        self.db
            .run(move |conn| fetch_all(conn, &sql, &params))
            .await
            .inspect_err(|e| tracing::error!("Failed to list inflation: {:?}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::seeded_database;

    #[tokio::test]
    async fn test_list_all_years_newest_first() {
        let service = InflationService::new(seeded_database());

        let items = service.list(&InflationListQuery::default()).await.unwrap();
        let periods: Vec<(i32, i32)> = items.iter().map(|i| (i.year, i.month)).collect();
        assert_eq!(
            periods,
            vec![(2025, 2), (2025, 1), (2024, 12), (2024, 11), (2023, 12)]
        );
    }

    #[tokio::test]
    async fn test_list_single_year() {
        let service = InflationService::new(seeded_database());

        let items = service
            .list(&InflationListQuery {
                year: Some("2024".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.year == 2024));
    }

    #[tokio::test]
    async fn test_null_percentages_coalesce_to_zero() {
        let service = InflationService::new(seeded_database());

        let items = service
            .list(&InflationListQuery {
                year: Some("2023".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].mtm, 0.0);
        assert!((items[0].yoy - 2.61).abs() < 1e-9);
    }
}
