mod wage_handler;

pub use wage_handler::*;
