use crate::domain::query::entities::{errors::QueryError, query_request::QueryRequest};

/// Supplier of raw request values, addressed by computed key strings.
#[cfg_attr(test, mockall::automock)]
pub trait ValueSource {
    /// First raw value stored under `key`, if any.
    fn first_value(&self, key: &str) -> Option<String>;

    /// Whether at least one value (possibly blank) is stored under `key`.
    fn has_any(&self, key: &str) -> bool;
}

pub trait QueryRequestService: Send + Sync {
    /// Rebuilds a [`QueryRequest`] from `values`.
    ///
    /// Absent or malformed optional entries fall back to defaults; only a
    /// breached parser limit is reported as an error.
    fn build_query_request(&self, values: &dyn ValueSource) -> Result<QueryRequest, QueryError>;
}
