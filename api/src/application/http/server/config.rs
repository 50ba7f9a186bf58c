use axum::extract::State;
use querykit_core::domain::common::ParserLimits;
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

#[derive(Debug, Serialize, ToSchema)]
pub struct ConfigResponse {
    pub root_path: String,
    pub limits: ParserLimits,
}

#[utoipa::path(
    get,
    path = "/config",
    tag = "config",
    summary = "Active parser configuration",
    responses(
        (status = 200, body = ConfigResponse)
    )
)]
pub async fn get_config(State(state): State<AppState>) -> Response<ConfigResponse> {
    Response::OK(ConfigResponse {
        root_path: state.args.server.root_path.clone(),
        limits: state.service.limits.clone(),
    })
}
