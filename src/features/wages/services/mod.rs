mod wage_service;

pub use wage_service::WageService;
