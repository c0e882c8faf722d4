mod inflation_service;

pub use inflation_service::InflationService;
