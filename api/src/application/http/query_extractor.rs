use axum::{
    extract::{FromRef, FromRequest, FromRequestParts, Request},
    http::{header::CONTENT_TYPE, request::Parts},
};
use bytes::Bytes;
use querykit_core::domain::query::{
    QueryRequest, ValueSource,
    binder::{ModelBinder, ModelBindingContext},
    services::QueryKitService,
};

use super::query_params::{form_values_from_body, form_values_from_query};
use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Binds a [`QueryRequest`] from the request's query string.
///
/// ```rust,ignore
/// async fn handler(QueryRequestExtractor(request): QueryRequestExtractor) {
///     // request.page, request.sort_fields, request.root_group
/// }
/// ```
#[derive(Debug, Clone)]
pub struct QueryRequestExtractor(pub QueryRequest);

impl<S> FromRequestParts<S> for QueryRequestExtractor
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);
        let values = form_values_from_query(parts.uri.query().unwrap_or(""));

        bind_query_request(&state.service, &values).map(QueryRequestExtractor)
    }
}

/// Binds a [`QueryRequest`] from an `application/x-www-form-urlencoded` body.
#[derive(Debug, Clone)]
pub struct QueryRequestForm(pub QueryRequest);

impl<S> FromRequest<S> for QueryRequestForm
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(is_form_content_type);
        if !is_form {
            return Err(ApiError::UnsupportedMediaType(format!(
                "Expected request with `Content-Type: {FORM_CONTENT_TYPE}`"
            )));
        }

        let app_state = AppState::from_ref(state);
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        let values = form_values_from_body(&body);

        bind_query_request(&app_state.service, &values).map(QueryRequestForm)
    }
}

/// Media types compare case-insensitively; parameters such as `charset` are ignored.
fn is_form_content_type(value: &str) -> bool {
    value
        .split(';')
        .next()
        .is_some_and(|media_type| media_type.trim().eq_ignore_ascii_case(FORM_CONTENT_TYPE))
}

fn bind_query_request(
    service: &QueryKitService,
    values: &dyn ValueSource,
) -> Result<QueryRequest, ApiError> {
    let mut ctx = ModelBindingContext::for_model::<QueryRequest>(values);
    service.bind_model(&mut ctx);

    ctx.into_model::<QueryRequest>()?.ok_or_else(|| {
        ApiError::InternalServerError("query request binder produced no result".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_content_type_ignores_case_and_parameters() {
        assert!(is_form_content_type("application/x-www-form-urlencoded"));
        assert!(is_form_content_type("Application/X-WWW-Form-URLEncoded"));
        assert!(is_form_content_type(
            "application/x-www-form-urlencoded; charset=UTF-8"
        ));
        assert!(!is_form_content_type("application/json"));
        assert!(!is_form_content_type("application/x-www-form-urlencodedx"));
    }
}
