/// Default page number for pagination
pub const DEFAULT_PAGE: i64 = 1;

/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

/// DuckDB rejects OFFSET values of 2^62 and above
pub const MAX_OFFSET: i64 = (1 << 62) - 1;

/// Year reported by the stats snapshot when no wage rows exist
pub const DEFAULT_WAGE_YEAR: i32 = 2025;
