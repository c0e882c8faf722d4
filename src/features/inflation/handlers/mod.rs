mod inflation_handler;

pub use inflation_handler::*;
