//! HTTP server initialization and runtime setup.
//!
//! Handles cache setup, outbound client construction and the Axum server lifecycle.

use crate::application::services::ResolverService;
use crate::config::Config;
use crate::infrastructure::cache::{CacheService, MemoryCache, NullCache, RedisCache};
use crate::infrastructure::probe::HttpProber;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Selects the cache backend described by `config`.
///
/// - `CACHE_ENABLED=false` → [`NullCache`]
/// - Redis configured and reachable → [`RedisCache`]
/// - otherwise → [`MemoryCache`] (also the fallback when Redis is unreachable)
pub async fn build_cache(config: &Config) -> Arc<dyn CacheService> {
    if !config.cache_enabled {
        tracing::info!("Cache disabled (NullCache)");
        return Arc::new(NullCache::new());
    }

    if let Some(redis_url) = &config.redis_url {
        match RedisCache::connect(redis_url, config.cache_ttl_seconds).await {
            Ok(redis) => {
                tracing::info!("Cache enabled (Redis)");
                return Arc::new(redis);
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using MemoryCache.", e);
            }
        }
    } else {
        tracing::info!("Cache enabled (in-memory)");
    }

    Arc::new(MemoryCache::new(
        config.cache_ttl_seconds,
        config.cache_max_entries,
    ))
}

/// Builds the resolver with its cache and outbound prober.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub fn build_resolver(
    config: &Config,
    cache: Arc<dyn CacheService>,
) -> Result<Arc<ResolverService>> {
    let prober = HttpProber::new(&config.probe_config()).context("Failed to build prober")?;

    Ok(Arc::new(ResolverService::new(
        cache,
        Arc::new(prober),
        config.site_bases(),
        Duration::from_secs(config.cache_ttl_seconds),
    )))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Cache backend (Redis, in-memory or disabled)
/// - Outbound HTTP prober
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The prober or router cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let cache = build_cache(&config).await;
    let resolver = build_resolver(&config, cache.clone())?;

    let state = AppState::new(resolver, cache);

    let app = app_router(
        state,
        config.rate_limit_period_seconds,
        config.rate_limit_burst,
    )?;

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address {}", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
