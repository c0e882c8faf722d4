use crate::core::database::{fetch_all, Database};
use crate::core::error::Result;
use crate::features::prices::dtos::PriceListQuery;
use crate::features::prices::models::Price;
use crate::shared::query::QueryFilter;

/// Service for commodity price queries
pub struct PriceService {
    db: Database,
}

impl PriceService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// List prices ordered by commodity
    pub async fn list(&self, query: &PriceListQuery) -> Result<Vec<Price>> {
        let filter = list_filter(query);
        let sql = format!(
            r#"
            SELECT id, commodity, CAST(price AS DOUBLE), unit,
                NULLIF(market_type, ''),
                NULLIF(region_type, ''),
                NULLIF(province, ''),
                CAST(date AS DATE)
            FROM grocery_prices
            {}
            ORDER BY commodity, id
            "#,
            filter.where_clause()
        );
        let params = filter.params();

        self.db
            .run(move |conn| fetch_all(conn, &sql, &params))
            .await
            .inspect_err(|e| tracing::error!("Failed to list prices: {:?}", e))
    }
}

fn list_filter(query: &PriceListQuery) -> QueryFilter {
    QueryFilter::new()
        .eq("market_type", query.market_type.as_deref())
        .eq("region_type", query.region_type.as_deref())
        .contains(&["commodity"], query.search.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::seeded_database;

    #[test]
    fn test_list_filter() {
        let filter = list_filter(&PriceListQuery {
            market_type: Some("modern".to_string()),
            region_type: None,
            search: Some("beras".to_string()),
        });
        assert_eq!(
            filter.where_clause(),
            "WHERE market_type = ? AND (commodity ILIKE ?)"
        );
    }

    #[tokio::test]
    async fn test_list_all_ordered_by_commodity() {
        let service = PriceService::new(seeded_database());

        let prices = service.list(&PriceListQuery::default()).await.unwrap();
        let commodities: Vec<&str> = prices.iter().map(|p| p.commodity.as_str()).collect();
        assert_eq!(
            commodities,
            vec!["Beras Medium", "Beras Premium", "Cabai Merah", "Gula Pasir"]
        );
    }

    #[tokio::test]
    async fn test_list_normalizes_blank_optionals() {
        let service = PriceService::new(seeded_database());

        let prices = service
            .list(&PriceListQuery {
                search: Some("gula".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(prices.len(), 1);
        assert_eq!(prices[0].market_type, None);
        assert_eq!(prices[0].region_type, None);
        assert_eq!(prices[0].province, None);
        assert_eq!(prices[0].price, 17800.0);
    }

    #[tokio::test]
    async fn test_list_combines_filters() {
        let service = PriceService::new(seeded_database());

        let prices = service
            .list(&PriceListQuery {
                market_type: Some("tradisional".to_string()),
                region_type: Some("kota".to_string()),
                search: Some("BERAS".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(prices.len(), 1);
        assert_eq!(prices[0].commodity, "Beras Medium");
        assert_eq!(prices[0].province.as_deref(), Some("DKI Jakarta"));
    }
}
