use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_OFFSET, MAX_PAGE_SIZE};

/// Success envelope shared by every endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

/// List metadata. `page` and `per_page` are only set for paginated resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Meta {
    pub total: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
}

impl Meta {
    pub fn total(total: i64) -> Self {
        Self {
            total,
            page: None,
            per_page: None,
        }
    }

    pub fn paginated(total: i64, pagination: Pagination) -> Self {
        Self {
            total,
            page: Some(pagination.page),
            per_page: Some(pagination.per_page),
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, meta: Option<Meta>) -> Self {
        Self { data, meta }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Wrap a list, reporting its length as the total
    pub fn list(data: Vec<T>) -> Self {
        let total = data.len() as i64;
        Self::success(data, Some(Meta::total(total)))
    }
}

/// Error envelope: `{"error": {"code", "message"}}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                code: code.to_string(),
                message: message.into(),
            },
        }
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Normalized page/per-page pair.
///
/// Raw query values are accepted as strings and never rejected: a page below 1
/// becomes 1, and a page size outside `1..=MAX_PAGE_SIZE` falls back to
/// `DEFAULT_PAGE_SIZE`. Unparsable values behave like zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub per_page: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn from_params(page: Option<&str>, per_page: Option<&str>) -> Self {
        let page = parse_int_or(page, DEFAULT_PAGE);
        let per_page = parse_int_or(per_page, DEFAULT_PAGE_SIZE);

        Self {
            page: if page < 1 { DEFAULT_PAGE } else { page },
            per_page: if (1..=MAX_PAGE_SIZE).contains(&per_page) {
                per_page
            } else {
                DEFAULT_PAGE_SIZE
            },
        }
    }

    /// Calculate SQL OFFSET from page number, capped at `MAX_OFFSET`
    pub fn offset(&self) -> i64 {
        (self.page - 1)
            .saturating_mul(self.per_page)
            .min(MAX_OFFSET)
    }

    pub fn limit(&self) -> i64 {
        self.per_page
    }
}

/// Parse an optional integer query value.
///
/// Missing or empty values yield `default`; anything unparsable yields 0.
pub fn parse_int_or(value: Option<&str>, default: i64) -> i64 {
    match value {
        None | Some("") => default,
        Some(raw) => raw.parse().unwrap_or(0),
    }
}

// =============================================================================
// SORTING
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Only the literal `asc` sorts ascending; everything else is descending.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("asc") => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pagination_defaults() {
        assert_eq!(Pagination::from_params(None, None), Pagination::default());
        assert_eq!(Pagination::from_params(Some(""), Some("")), Pagination::default());
    }

    #[test]
    fn test_pagination_page_below_one_becomes_one() {
        assert_eq!(Pagination::from_params(Some("0"), None).page, 1);
        assert_eq!(Pagination::from_params(Some("-4"), None).page, 1);
        assert_eq!(Pagination::from_params(Some("abc"), None).page, 1);
        assert_eq!(Pagination::from_params(Some("3"), None).page, 3);
    }

    #[test]
    fn test_pagination_per_page_out_of_range_falls_back() {
        for raw in ["0", "-1", "101", "1000", "ten"] {
            assert_eq!(Pagination::from_params(None, Some(raw)).per_page, 20, "{raw}");
        }
        assert_eq!(Pagination::from_params(None, Some("1")).per_page, 1);
        assert_eq!(Pagination::from_params(None, Some("100")).per_page, 100);
    }

    #[test]
    fn test_pagination_offset() {
        let pagination = Pagination::from_params(Some("3"), Some("25"));
        assert_eq!(pagination.offset(), 50);
        assert_eq!(pagination.limit(), 25);
        assert_eq!(Pagination::default().offset(), 0);
    }

    #[test]
    fn test_pagination_offset_saturates_for_huge_pages() {
        let pagination = Pagination::from_params(Some(&i64::MAX.to_string()), Some("100"));
        assert_eq!(pagination.page, i64::MAX);
        assert_eq!(pagination.offset(), MAX_OFFSET);
    }

    #[test]
    fn test_sort_order_only_asc_is_ascending() {
        assert_eq!(SortOrder::from_param(Some("asc")), SortOrder::Asc);
        for raw in [None, Some(""), Some("desc"), Some("ASC"), Some("ascending"), Some("x")] {
            assert_eq!(SortOrder::from_param(raw), SortOrder::Desc);
        }
    }

    #[test]
    fn test_envelope_omits_absent_meta() {
        let body = serde_json::to_value(ApiResponse::success(json!({"a": 1}), None)).unwrap();
        assert_eq!(body, json!({"data": {"a": 1}}));
    }

    #[test]
    fn test_empty_list_envelope() {
        let body = serde_json::to_value(ApiResponse::<Vec<i32>>::list(vec![])).unwrap();
        assert_eq!(body, json!({"data": [], "meta": {"total": 0}}));
    }

    #[test]
    fn test_paginated_meta() {
        let meta = Meta::paginated(57, Pagination::from_params(Some("2"), Some("10")));
        assert_eq!(
            serde_json::to_value(meta).unwrap(),
            json!({"total": 57, "page": 2, "per_page": 10})
        );
    }

    #[test]
    fn test_error_envelope() {
        let body = serde_json::to_value(ErrorResponse::new("NOT_FOUND", "wage not found")).unwrap();
        assert_eq!(
            body,
            json!({"error": {"code": "NOT_FOUND", "message": "wage not found"}})
        );
    }
}
