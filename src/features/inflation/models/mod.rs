mod inflation;

pub use inflation::Inflation;
