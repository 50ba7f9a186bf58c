use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use clap::Parser;
use querykit_api::application::http::server::http_server::{router, state};
use querykit_api::args::Args;
use serde_json::Value;
use test_context::{AsyncTestContext, test_context};

struct ApiContext {
    server: TestServer,
}

impl AsyncTestContext for ApiContext {
    async fn setup() -> Self {
        let args = Args::parse_from(["querykit-api", "--parser-max-depth", "2"]);
        let app = router(state(Arc::new(args))).unwrap();

        Self {
            server: TestServer::new(app).unwrap(),
        }
    }
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_inspect_binds_query_string(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .get("/query/inspect")
        .add_query_param("page", "2")
        .add_query_param("pageSize", "25")
        .add_query_param("search", "green tea")
        .add_query_param("__qsort[0].__n", "name")
        .add_query_param("__qsort[0].__i", "2")
        .add_query_param("__qsort[1].__n", "created_at")
        .add_query_param("__qsort[1].__i", "1")
        .add_query_param("__qsort[1].__o", "1")
        .add_query_param("__cdgr.__o", "1")
        .add_query_param("__cdgr.__cd[0].__n", "price")
        .add_query_param("__cdgr.__cd[0].__o", "4")
        .add_query_param("__cdgr.__cd[0].__t", "Decimal")
        .add_query_param("__cdgr.__cd[0].__v", "9.99")
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();

    assert_eq!(body["request"]["page"], 2);
    assert_eq!(body["request"]["page_size"], 25);
    assert_eq!(body["request"]["search_value"], "green tea");
    assert_eq!(body["has_conditions"], true);
    assert_eq!(body["ordered_sort_fields"][0]["field_name"], "created_at");
    assert_eq!(body["ordered_sort_fields"][1]["field_name"], "name");

    let condition = &body["request"]["root_group"]["conditions"][0];
    assert_eq!(condition["field_name"], "price");
    assert_eq!(condition["data_type"], "Decimal");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_inspect_without_keys_is_empty(ctx: &mut ApiContext) {
    let response = ctx.server.get("/query/inspect").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["request"]["page"], Value::Null);
    assert_eq!(body["has_conditions"], false);
    assert_eq!(body["canonical_query"], "__cdgr.__o=0");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_inspect_form_body(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/query/inspect")
        .form(&[
            ("__cdgr.__o", "0"),
            ("__cdgr.__cd[0].__n", "city"),
            ("__cdgr.__cd[0].__o", "in"),
            ("__cdgr.__cd[0].__t", "String"),
            ("__cdgr.__cd[0].__v", "Paris~Lyon"),
            ("__cdgr.__cd[0].__l", "true"),
        ])
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    let condition = &body["request"]["root_group"]["conditions"][0];
    assert_eq!(condition["field_name"], "city");
    assert_eq!(condition["is_collection"], true);
    assert_eq!(condition["value"], serde_json::json!(["Paris", "Lyon"]));
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_inspect_form_content_type_is_case_insensitive(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/query/inspect")
        .bytes(bytes::Bytes::from_static(b"page=3&__cdgr.__o=1"))
        .content_type("Application/X-WWW-Form-URLEncoded; charset=UTF-8")
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["request"]["page"], 3);
    assert_eq!(body["request"]["root_group"]["operator"], "Or");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_inspect_form_rejects_json(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/query/inspect")
        .json(&serde_json::json!({ "page": 1 }))
        .await;

    response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(
        response.json::<Value>()["code"],
        "E_UNSUPPORTED_MEDIA_TYPE"
    );
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_depth_limit_is_bad_request(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .get("/query/inspect")
        .add_query_param("__cdgr.__o", "0")
        .add_query_param("__cdgr.__cdgr[0].__o", "0")
        .add_query_param("__cdgr.__cdgr[0].__cdgr[0].__o", "0")
        .add_query_param("__cdgr.__cdgr[0].__cdgr[0].__cdgr[0].__o", "0")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "E_BAD_REQUEST");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_canonical_query_replays_to_same_request(ctx: &mut ApiContext) {
    let first = ctx
        .server
        .get("/query/inspect")
        .add_query_param("page", "1")
        .add_query_param("__qsort[0].__n", "name")
        .add_query_param("__qsort[0].__o", "desc")
        .add_query_param("__cdgr.__o", "or")
        .add_query_param("__cdgr.__cd[0].__n", "id")
        .add_query_param("__cdgr.__cd[0].__t", "Int64")
        .add_query_param("__cdgr.__cd[0].__v", "42")
        .add_query_param("__cdgr.__cdgr[0].__o", "0")
        .add_query_param("__cdgr.__cdgr[0].__cd[0].__n", "active")
        .add_query_param("__cdgr.__cdgr[0].__cd[0].__t", "Boolean")
        .add_query_param("__cdgr.__cdgr[0].__cd[0].__v", "true")
        .await
        .json::<Value>();

    let canonical = first["canonical_query"].as_str().unwrap().to_string();
    let second = ctx
        .server
        .get(&format!("/query/inspect?{canonical}"))
        .await
        .json::<Value>();

    assert_eq!(second["request"], first["request"]);
    assert_eq!(second["canonical_query"], first["canonical_query"]);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_health(ctx: &mut ApiContext) {
    let response = ctx.server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "ok");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_config_reports_limits(ctx: &mut ApiContext) {
    let response = ctx.server.get("/config").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["limits"]["max_depth"], 2);
    assert_eq!(body["limits"]["max_conditions"], 256);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_openapi_document_lists_routes(ctx: &mut ApiContext) {
    let response = ctx.server.get("/api-docs/openapi.json").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert!(body["paths"]["/query/inspect"]["get"].is_object());
    assert!(body["paths"]["/query/inspect"]["post"].is_object());
    assert!(body["paths"]["/health"]["get"].is_object());
}
