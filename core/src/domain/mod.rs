pub mod common;
pub mod query;
