//! In-memory DuckDB fixtures mirroring the production schema.

#[cfg(test)]
use axum_test::TestServer;
#[cfg(test)]
use duckdb::Connection;

#[cfg(test)]
use crate::core::database::Database;

#[cfg(test)]
const SCHEMA: &str = r#"
    CREATE TABLE regions (
        id BIGINT PRIMARY KEY,
        code VARCHAR NOT NULL,
        name VARCHAR NOT NULL,
        province VARCHAR NOT NULL,
        type VARCHAR NOT NULL,
        lat DOUBLE,
        lng DOUBLE
    );
    CREATE TABLE wages (
        id BIGINT PRIMARY KEY,
        region_id BIGINT NOT NULL,
        year INTEGER NOT NULL,
        umr DECIMAL(15, 2) NOT NULL
    );
    CREATE TABLE grocery_prices (
        id BIGINT PRIMARY KEY,
        commodity VARCHAR NOT NULL,
        price DECIMAL(15, 2) NOT NULL,
        unit VARCHAR NOT NULL,
        market_type VARCHAR,
        region_type VARCHAR,
        province VARCHAR,
        date DATE NOT NULL
    );
    CREATE TABLE inflation (
        id BIGINT PRIMARY KEY,
        year INTEGER NOT NULL,
        month INTEGER NOT NULL,
        yoy DECIMAL(5, 2),
        mtm DECIMAL(5, 2)
    );
"#;

#[cfg(test)]
const SEED: &str = r#"
    INSERT INTO regions VALUES
        (1, '31.71', 'Jakarta Pusat', 'DKI Jakarta', 'kota', -6.18, 106.83),
        (2, '31.74', 'Jakarta Selatan', 'DKI Jakarta', 'kota', -6.26, 106.81),
        (3, '32.73', 'Bandung', 'Jawa Barat', 'kota', -6.91, 107.61),
        (4, '32.04', 'Kabupaten Bandung', 'Jawa Barat', 'kabupaten', NULL, NULL),
        (5, '35.78', 'Surabaya', 'Jawa Timur', 'kota', -7.25, 112.75),
        (6, '94.71', 'Jayapura', 'Papua', 'kota', NULL, NULL);

    INSERT INTO wages VALUES
        (1, 1, 2025, 5396760.50),
        (2, 2, 2025, 5396760.50),
        (3, 3, 2025, 4482914.00),
        (4, 4, 2025, 3757284.00),
        (5, 5, 2025, 4961753.00),
        (6, 3, 2024, 4209309.00);

    INSERT INTO grocery_prices VALUES
        (1, 'Beras Medium', 13500.00, 'kg', 'tradisional', 'kota', 'DKI Jakarta', DATE '2025-01-15'),
        (2, 'Beras Premium', 15250.50, 'kg', 'modern', 'kota', 'Jawa Barat', DATE '2025-01-15'),
        (3, 'Cabai Merah', 45000.00, 'kg', 'tradisional', 'kabupaten', NULL, DATE '2025-01-15'),
        (4, 'Gula Pasir', 17800.00, 'kg', '', NULL, NULL, DATE '2025-01-16');

    INSERT INTO inflation VALUES
        (1, 2023, 12, 2.61, NULL),
        (2, 2024, 11, 1.55, 0.30),
        (3, 2024, 12, 1.57, 0.44),
        (4, 2025, 1, 0.76, -0.76),
        (5, 2025, 2, -0.09, -0.48);
"#;

#[cfg(test)]
fn open_with(batch: &[&str]) -> Database {
    let conn = Connection::open_in_memory().expect("open in-memory duckdb");
    for sql in batch {
        conn.execute_batch(sql).expect("prepare fixture");
    }
    Database::from_connection(conn)
}

/// Database with every table populated by the fixture rows
#[cfg(test)]
pub fn seeded_database() -> Database {
    open_with(&[SCHEMA, SEED])
}

/// Database with every table created but no rows
#[cfg(test)]
pub fn empty_database() -> Database {
    open_with(&[SCHEMA])
}

/// Test server exposing every feature route and the health check
#[cfg(test)]
pub fn test_server(database: Database) -> TestServer {
    let app = crate::features::router(database).merge(crate::features::health_routes());
    TestServer::new(app).expect("build test server")
}
