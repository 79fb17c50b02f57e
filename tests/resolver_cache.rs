mod common;

use common::{FailingCache, StubProber, current_url, legacy_url};
use gsite_redirect::application::services::ResolvedFrom;
use gsite_redirect::domain::{HostingScheme, SiteKey};
use gsite_redirect::infrastructure::cache::{CacheService, MemoryCache, NullCache};
use std::sync::Arc;
use std::time::Duration;

fn key(site: &str) -> SiteKey {
    SiteKey::parse(site).unwrap()
}

#[tokio::test(start_paused = true)]
async fn test_cached_destination_expires_after_ttl() {
    let cache = Arc::new(MemoryCache::new(3600, 100));
    let prober = Arc::new(StubProber::new().with(legacy_url("marketing"), 200));
    let resolver = common::create_resolver(cache.clone(), prober.clone());

    let first = resolver.resolve(&key("marketing")).await.unwrap();
    assert_eq!(first.from, ResolvedFrom::Probe(HostingScheme::Legacy));

    tokio::time::advance(Duration::from_secs(3599)).await;
    let second = resolver.resolve(&key("marketing")).await.unwrap();
    assert_eq!(second.from, ResolvedFrom::Cache);
    assert_eq!(prober.calls().len(), 1);

    tokio::time::advance(Duration::from_secs(2)).await;
    let third = resolver.resolve(&key("marketing")).await.unwrap();
    assert_eq!(third.from, ResolvedFrom::Probe(HostingScheme::Legacy));
    assert_eq!(prober.calls().len(), 2);
}

#[tokio::test]
async fn test_not_found_is_never_cached() {
    let cache = Arc::new(MemoryCache::new(3600, 100));
    let prober = Arc::new(StubProber::new().with(legacy_url("gone"), 500));
    let resolver = common::create_resolver(cache.clone(), prober.clone());

    assert!(resolver.resolve(&key("gone")).await.is_none());
    assert!(resolver.resolve(&key("gone")).await.is_none());

    assert!(cache.is_empty().await);
    assert_eq!(prober.calls().len(), 4);
}

#[tokio::test]
async fn test_failing_cache_still_resolves() {
    let prober = Arc::new(
        StubProber::new()
            .with(legacy_url("research"), 404)
            .with(current_url("research"), 200),
    );
    let resolver = common::create_resolver(Arc::new(FailingCache), prober.clone());

    let destination = resolver.resolve(&key("research")).await.unwrap();

    assert_eq!(destination.url, current_url("research"));
    assert_eq!(destination.from, ResolvedFrom::Probe(HostingScheme::Current));
    assert_eq!(prober.calls().len(), 2);
}

#[tokio::test]
async fn test_null_cache_probes_every_time() {
    let prober = Arc::new(StubProber::new().with(legacy_url("marketing"), 200));
    let resolver = common::create_resolver(Arc::new(NullCache::new()), prober.clone());

    resolver.resolve(&key("marketing")).await.unwrap();
    resolver.resolve(&key("marketing")).await.unwrap();

    assert_eq!(prober.calls().len(), 2);
}

#[tokio::test]
async fn test_evicted_entry_is_probed_again() {
    let cache = Arc::new(MemoryCache::new(3600, 100));
    let prober = Arc::new(StubProber::new().with(legacy_url("marketing"), 200));
    let resolver = common::create_resolver(cache.clone(), prober.clone());

    resolver.resolve(&key("marketing")).await.unwrap();
    assert!(cache.invalidate("marketing").await.unwrap());

    let again = resolver.resolve(&key("marketing")).await.unwrap();

    assert!(matches!(again.from, ResolvedFrom::Probe(_)));
    assert_eq!(prober.calls().len(), 2);
}
