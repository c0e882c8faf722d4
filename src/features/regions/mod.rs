//! Indonesian regions (kabupaten/kota) feature.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/v1/regions` | List regions (filter by province, type, search) |
//! | GET | `/api/v1/regions?group_by=province` | Region count per province |
//! | GET | `/api/v1/regions/{id}` | Region by ID with its latest wage |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::RegionService;
