use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::query::entities::query_request::QueryRequest;

/// Paged response envelope produced by a query executor.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct QueryResponse<T> {
    pub page: Option<i32>,
    pub page_size: Option<i32>,
    pub total: i64,
    pub data: Vec<T>,
}

impl<T> QueryResponse<T> {
    pub fn for_request(request: &QueryRequest, total: i64, data: Vec<T>) -> Self {
        Self {
            page: request.page,
            page_size: request.page_size,
            total,
            data,
        }
    }

    /// Keeps the paging metadata and swaps the payload.
    pub fn with_data<U>(self, data: Vec<U>) -> QueryResponse<U> {
        QueryResponse {
            page: self.page,
            page_size: self.page_size,
            total: self.total,
            data,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> QueryResponse<U> {
        QueryResponse {
            page: self.page,
            page_size: self.page_size,
            total: self.total,
            data: self.data.into_iter().map(f).collect(),
        }
    }
}
