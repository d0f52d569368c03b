pub mod machines;
pub mod reports;
