use super::handlers::inspect_query::{
    __path_inspect_query, __path_inspect_query_form, inspect_query, inspect_query_form,
};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(inspect_query, inspect_query_form))]
pub struct QueryApiDoc;

pub fn query_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/query/inspect", state.args.server.root_path),
        get(inspect_query).post(inspect_query_form),
    )
}
