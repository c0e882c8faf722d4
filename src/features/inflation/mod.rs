//! Monthly inflation (year-over-year and month-to-month).

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::InflationService;
