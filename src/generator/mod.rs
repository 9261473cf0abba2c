pub mod aggregate;
pub mod link;
