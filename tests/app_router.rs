mod common;

use axum::http::{StatusCode, header};
use common::{DOMAIN, NOT_FOUND_BODY, StubProber, body_text, current_url, legacy_url, send};
use gsite_redirect::infrastructure::cache::MemoryCache;
use gsite_redirect::routes::app_router;
use std::sync::Arc;

fn app(prober: Arc<StubProber>) -> tower_http::normalize_path::NormalizePath<axum::Router> {
    let state = common::create_test_state(Arc::new(MemoryCache::new(3600, 100)), prober);
    app_router(state, 2, 100).unwrap()
}

#[tokio::test]
async fn test_index_page() {
    let prober = Arc::new(StubProber::new());

    let response = send(app(prober.clone()), "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));

    let body = body_text(response).await;
    assert!(body.contains(DOMAIN));
    assert!(body.contains("/s/marketing"));
    assert!(prober.calls().is_empty());
}

#[tokio::test]
async fn test_unknown_path_renders_index() {
    let prober = Arc::new(StubProber::new());

    let response = send(app(prober.clone()), "/about/team").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Google Sites redirector"));
    assert!(prober.calls().is_empty());
}

#[tokio::test]
async fn test_bare_prefix_is_bad_request() {
    for uri in ["/s", "/s/"] {
        let prober = Arc::new(StubProber::new());

        let response = send(app(prober.clone()), uri).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
        assert!(body_text(response).await.contains("Missing site name"));
        assert!(prober.calls().is_empty());
    }
}

#[tokio::test]
async fn test_dot_segment_is_bad_request() {
    for uri in ["/s/..", "/s/%2e%2e", "/s/%2E", "/s/.%2e", "/s/%2E%2e/home"] {
        let prober = Arc::new(
            StubProber::new()
                .with(legacy_url("%2e%2e"), 200)
                .with(legacy_url("%2E"), 200),
        );

        let response = send(app(prober.clone()), uri).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
        assert!(response.headers().get(header::LOCATION).is_none());
        assert!(prober.calls().is_empty(), "{}", uri);
    }
}

#[tokio::test]
async fn test_redirect_through_full_stack() {
    let prober = Arc::new(StubProber::new().with(legacy_url("marketing"), 200));

    let response = send(app(prober), "/s/marketing").await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()[header::LOCATION],
        legacy_url("marketing").as_str()
    );
}

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let prober = Arc::new(StubProber::new().with(current_url("marketing"), 200));

    let response = send(app(prober), "/s/marketing/").await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()[header::LOCATION],
        current_url("marketing").as_str()
    );
}

#[tokio::test]
async fn test_query_string_is_not_part_of_key() {
    let prober = Arc::new(StubProber::new().with(legacy_url("marketing"), 200));

    let response = send(app(prober.clone()), "/s/marketing?ref=mail").await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()[header::LOCATION],
        legacy_url("marketing").as_str()
    );
    assert_eq!(prober.calls(), vec![legacy_url("marketing")]);
}

#[tokio::test]
async fn test_not_found_through_full_stack() {
    let prober = Arc::new(StubProber::new());

    let response = send(app(prober), "/s/missing").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response).await, NOT_FOUND_BODY);
}

#[tokio::test]
async fn test_health_through_full_stack() {
    let response = send(app(Arc::new(StubProber::new())), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["status"], "healthy");
}

#[test]
fn test_app_router_rejects_zero_burst() {
    let state = common::create_test_state(
        Arc::new(MemoryCache::new(3600, 100)),
        Arc::new(StubProber::new()),
    );

    assert!(app_router(state, 2, 0).is_err());
}
