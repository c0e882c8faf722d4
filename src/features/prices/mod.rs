//! Grocery commodity prices by market and region type.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::PriceService;
