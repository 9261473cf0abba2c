pub mod dialect;
pub mod extract;
pub mod fields;
