use querykit_core::domain::query::{QueryRequest, SortField, encoder::to_query_string};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::{
    query_extractor::{QueryRequestExtractor, QueryRequestForm},
    server::api_entities::{api_error::ApiErrorResponse, response::Response},
};

/// A bound request as the server understood it.
#[derive(Debug, Serialize, ToSchema)]
pub struct InspectQueryResponse {
    pub request: QueryRequest,
    pub ordered_sort_fields: Vec<SortField>,
    pub has_conditions: bool,
    /// Canonical flat encoding of `request`, ready to be replayed.
    pub canonical_query: String,
}

impl From<QueryRequest> for InspectQueryResponse {
    fn from(request: QueryRequest) -> Self {
        let ordered_sort_fields = request
            .ordered_sort_fields()
            .into_iter()
            .cloned()
            .collect();
        let has_conditions = request.has_conditions();
        let canonical_query = to_query_string(&request);

        Self {
            request,
            ordered_sort_fields,
            has_conditions,
            canonical_query,
        }
    }
}

#[utoipa::path(
    get,
    path = "/inspect",
    tag = "query",
    summary = "Inspect a query string",
    description = "Binds the flat query-string keys (`page`, `pageSize`, `search`, `__qsort[i]`, `__cdgr`) into a query request and echoes it back.",
    responses(
        (status = 200, body = InspectQueryResponse),
        (status = 400, body = ApiErrorResponse),
    ),
)]
pub async fn inspect_query(
    QueryRequestExtractor(request): QueryRequestExtractor,
) -> Response<InspectQueryResponse> {
    Response::OK(InspectQueryResponse::from(request))
}

#[utoipa::path(
    post,
    path = "/inspect",
    tag = "query",
    summary = "Inspect a form body",
    description = "Same as the GET variant, reading the keys from an `application/x-www-form-urlencoded` body.",
    request_body(content_type = "application/x-www-form-urlencoded", content = String),
    responses(
        (status = 200, body = InspectQueryResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 415, body = ApiErrorResponse),
    ),
)]
pub async fn inspect_query_form(
    QueryRequestForm(request): QueryRequestForm,
) -> Response<InspectQueryResponse> {
    Response::OK(InspectQueryResponse::from(request))
}
