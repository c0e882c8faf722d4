mod wage_dto;

pub use wage_dto::*;
