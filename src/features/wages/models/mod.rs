mod wage;

pub use wage::Wage;
