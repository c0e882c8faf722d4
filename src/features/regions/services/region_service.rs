use duckdb::types::Value;

use crate::core::database::{fetch_all, fetch_optional, Database};
use crate::core::error::{AppError, Result};
use crate::features::regions::dtos::RegionListQuery;
use crate::features::regions::models::{ProvinceGroup, Region, RegionDetail};
use crate::shared::query::QueryFilter;

/// Service for region metadata
pub struct RegionService {
    db: Database,
}

impl RegionService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// List regions with optional province/type/search filters
    pub async fn list(&self, query: &RegionListQuery) -> Result<Vec<Region>> {
        let filter = list_filter(query);
        let sql = format!(
            r#"
            SELECT id, code, name, province, type,
                CAST(lat AS DOUBLE), CAST(lng AS DOUBLE)
            FROM regions
            {}
            ORDER BY province, name, id
            "#,
            filter.where_clause()
        );
        let params = filter.params();

        self.db
            .run(move |conn| fetch_all(conn, &sql, &params))
            .await
            .inspect_err(|e| tracing::error!("Failed to list regions: {:?}", e))
    }

    /// Count regions per province
    pub async fn list_provinces(&self) -> Result<Vec<ProvinceGroup>> {
        self.db
            .run(|conn| {
                fetch_all(
                    conn,
                    r#"
                    SELECT province, COUNT(*)
                    FROM regions
                    GROUP BY province
                    ORDER BY province
                    "#,
                    &[],
                )
            })
            .await
            .inspect_err(|e| tracing::error!("Failed to list provinces: {:?}", e))
    }

    /// Get a region by its ID together with its most recent wage
    pub async fn get_by_id(&self, id: i64) -> Result<RegionDetail> {
        self.db
            .run(move |conn| {
                fetch_optional(
                    conn,
                    r#"
                    SELECT r.id, r.code, r.name, r.province, r.type,
                        CAST(r.lat AS DOUBLE), CAST(r.lng AS DOUBLE),
                        CAST(w.umr AS DOUBLE), w.year
                    FROM regions r
                    LEFT JOIN wages w ON w.region_id = r.id
                    WHERE r.id = ?
                    ORDER BY w.year DESC NULLS LAST, w.id DESC NULLS LAST
                    LIMIT 1
                    "#,
                    &[Value::BigInt(id)],
                )
            })
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch region {}: {:?}", id, e))?
            .ok_or_else(|| AppError::NotFound("region not found".to_string()))
    }
}

fn list_filter(query: &RegionListQuery) -> QueryFilter {
    QueryFilter::new()
        .eq("province", query.province.as_deref())
        .eq("type", query.region_type.as_deref())
        .contains(&["name", "province"], query.search.as_deref())
}
