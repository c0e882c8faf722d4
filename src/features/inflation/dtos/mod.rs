mod inflation_dto;

pub use inflation_dto::*;
