//! Minimum regional wages (UMR) per region and year.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/v1/wages` | Filtered, sorted, paginated wage list |
//! | GET | `/api/v1/wages/{id}` | Wage by ID |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::WageService;
