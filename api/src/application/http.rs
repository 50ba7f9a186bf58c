pub mod health;
pub mod query;
pub mod query_extractor;
pub mod query_params;
pub mod server;
