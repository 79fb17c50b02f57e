//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::ResolverService;
use crate::infrastructure::cache::CacheService;

/// State shared by all handlers.
///
/// Collaborators are constructed once in [`crate::server::run`] (or by tests)
/// and cloned cheaply per request.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<ResolverService>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    pub fn new(resolver: Arc<ResolverService>, cache: Arc<dyn CacheService>) -> Self {
        Self { resolver, cache }
    }
}
