pub mod condition;
pub mod condition_group;
pub mod errors;
pub mod query_request;
pub mod query_response;
pub mod sort_field;

pub use condition::Condition;
pub use condition_group::ConditionGroup;
pub use errors::QueryError;
pub use query_request::QueryRequest;
pub use query_response::QueryResponse;
pub use sort_field::SortField;
