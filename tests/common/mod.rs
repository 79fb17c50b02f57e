#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{Request, Response};
use gsite_redirect::application::services::ResolverService;
use gsite_redirect::domain::SiteBases;
use gsite_redirect::infrastructure::cache::{CacheError, CacheResult, CacheService};
use gsite_redirect::infrastructure::probe::{ProbeError, SiteProber};
use gsite_redirect::state::AppState;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

pub const DOMAIN: &str = "example.edu";
pub const NOT_FOUND_BODY: &str = "404: Unable to locate Google site";

pub fn legacy_url(site: &str) -> String {
    format!("https://sites.google.com/a/{}/{}", DOMAIN, site)
}

pub fn current_url(site: &str) -> String {
    format!("https://sites.google.com/{}/{}", DOMAIN, site)
}

/// Prober answering from a fixed table; unknown URLs fail like a network error.
#[derive(Default)]
pub struct StubProber {
    statuses: HashMap<String, u16>,
    calls: Mutex<Vec<String>>,
}

impl StubProber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: impl Into<String>, status: u16) -> Self {
        self.statuses.insert(url.into(), status);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SiteProber for StubProber {
    async fn probe(&self, url: &str) -> Result<u16, ProbeError> {
        self.calls.lock().unwrap().push(url.to_string());
        self.statuses
            .get(url)
            .copied()
            .ok_or_else(|| ProbeError::Network(format!("no route to {}", url)))
    }
}

/// Cache whose every operation fails.
pub struct FailingCache;

#[async_trait]
impl CacheService for FailingCache {
    async fn get_destination(&self, _site: &str) -> CacheResult<Option<String>> {
        Err(CacheError::ConnectionError("connection refused".to_string()))
    }

    async fn set_destination(
        &self,
        _site: &str,
        _destination: &str,
        _ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        Err(CacheError::ConnectionError("connection refused".to_string()))
    }

    async fn invalidate(&self, _site: &str) -> CacheResult<bool> {
        Err(CacheError::ConnectionError("connection refused".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}

pub fn create_resolver(
    cache: Arc<dyn CacheService>,
    prober: Arc<dyn SiteProber>,
) -> Arc<ResolverService> {
    Arc::new(ResolverService::new(
        cache,
        prober,
        SiteBases::for_domain(DOMAIN),
        Duration::from_secs(3600),
    ))
}

pub fn create_test_state(cache: Arc<dyn CacheService>, prober: Arc<dyn SiteProber>) -> AppState {
    AppState::new(create_resolver(cache.clone(), prober), cache)
}

/// Sends a GET through the full service stack, with the peer address the
/// rate limiter expects.
pub async fn send(app: NormalizePath<Router>, uri: &str) -> Response<Body> {
    let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
    let request = Request::builder()
        .uri(uri)
        .extension(ConnectInfo(addr))
        .body(Body::empty())
        .unwrap();

    app.oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
