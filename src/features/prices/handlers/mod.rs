mod price_handler;

pub use price_handler::*;
