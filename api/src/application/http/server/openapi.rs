use crate::application::http::{
    health::__path_health_check, query::router::QueryApiDoc, server::config::__path_get_config,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "QueryKit API"
    ),
    paths(health_check, get_config),
    nest(
        (path = "/query", api = QueryApiDoc),
    )
)]
pub struct ApiDoc;
