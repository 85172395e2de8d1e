mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use common::InMemoryLinkRepository;
use linkhop::infrastructure::cache::NullCache;
use std::sync::Arc;

#[tokio::test]
async fn test_link_found_returns_full_record() {
    let ctx = common::create_test_context(InMemoryLinkRepository::with_links(&[(
        "gh",
        "https://github.com",
    )]));
    let server = TestServer::new(common::test_router(ctx.state)).unwrap();

    let response = server.get("/api/link/gh").await;

    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "application/json");

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"], 1);
    assert_eq!(json["from"], "gh");
    assert_eq!(json["to"], "https://github.com");
    assert!(json["created_at"].is_string());
}

#[tokio::test]
async fn test_link_not_found_returns_null() {
    let ctx = common::create_test_context(InMemoryLinkRepository::default());
    let server = TestServer::new(common::test_router(ctx.state)).unwrap();

    let response = server.get("/api/link/missing").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "null");
}

#[tokio::test]
async fn test_link_lookup_is_exact_match() {
    let ctx = common::create_test_context(InMemoryLinkRepository::with_links(&[(
        "Docs",
        "https://docs.rs",
    )]));
    let server = TestServer::new(common::test_router(ctx.state)).unwrap();

    assert_eq!(server.get("/api/link/docs").await.text(), "null");
    assert_eq!(server.get("/api/link/Doc").await.text(), "null");

    let json = server
        .get("/api/link/Docs")
        .await
        .json::<serde_json::Value>();
    assert_eq!(json["to"], "https://docs.rs");
}

#[tokio::test]
async fn test_link_second_call_served_from_cache() {
    let ctx = common::create_test_context(InMemoryLinkRepository::with_links(&[(
        "gh",
        "https://github.com",
    )]));
    let server = TestServer::new(common::test_router(ctx.state.clone())).unwrap();

    let first = server.get("/api/link/gh").await.text();
    let second = server.get("/api/link/gh").await.text();

    assert_eq!(first, second);
    assert_eq!(ctx.links.lookups(), 1);
}

#[tokio::test]
async fn test_link_miss_is_cached() {
    let ctx = common::create_test_context(InMemoryLinkRepository::default());
    let server = TestServer::new(common::test_router(ctx.state.clone())).unwrap();

    server.get("/api/link/nope").await.assert_status_ok();
    server.get("/api/link/nope").await.assert_status_ok();

    assert_eq!(ctx.links.lookups(), 1);
}

#[tokio::test]
async fn test_link_without_cache_queries_every_time() {
    let ctx = common::create_test_context_with_cache(
        InMemoryLinkRepository::with_links(&[("gh", "https://github.com")]),
        Arc::new(NullCache::new()),
    );
    let server = TestServer::new(common::test_router(ctx.state.clone())).unwrap();

    server.get("/api/link/gh").await.assert_status_ok();
    server.get("/api/link/gh").await.assert_status_ok();

    assert_eq!(ctx.links.lookups(), 2);
}

#[tokio::test]
async fn test_link_absent_slug_returns_null_without_query() {
    let ctx = common::create_test_context(InMemoryLinkRepository::with_links(&[(
        "gh",
        "https://github.com",
    )]));
    let server = TestServer::new(common::test_router(ctx.state.clone())).unwrap();

    let response = server.get("/api/link").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "null");
    assert_eq!(ctx.links.lookups(), 0);
}

#[tokio::test]
async fn test_link_percent_encoded_slug_is_decoded() {
    let ctx = common::create_test_context(InMemoryLinkRepository::with_links(&[(
        "hello world",
        "https://example.com",
    )]));
    let server = TestServer::new(common::test_router(ctx.state)).unwrap();

    let json = server
        .get("/api/link/hello%20world")
        .await
        .json::<serde_json::Value>();

    assert_eq!(json["from"], "hello world");
}

#[tokio::test]
async fn test_link_database_error_returns_internal_error() {
    let ctx = common::create_test_context(InMemoryLinkRepository::default());
    ctx.links.set_unreachable(true);
    let server = TestServer::new(common::test_router(ctx.state.clone())).unwrap();

    let response = server.get("/api/link/gh").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "internal_error");
}
