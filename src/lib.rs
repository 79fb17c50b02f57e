//! # gsite-redirect
//!
//! A small redirect service for Google Sites. `GET /s/<site>` is answered
//! with a 302 to whichever of the two hosting schemes currently serves the
//! site:
//!
//! 1. classic Sites: `https://sites.google.com/a/<domain>/<site>`
//! 2. new Sites: `https://sites.google.com/<domain>/<site>`
//!
//! The live location is found with an outbound GET (first `200` wins) and
//! cached for an hour. If neither answers `200` the client gets a 404.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Site keys and hosting bases
//! - **Application Layer** ([`application`]) - Cache-first resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - Cache backends and the HTTP prober
//! - **API Layer** ([`api`]) - Redirect and health handlers, middleware
//! - **Web Layer** ([`web`]) - Server-rendered informational pages
//!
//! ## Quick Start
//!
//! ```bash
//! export SITES_DOMAIN="umich.edu"
//! export REDIS_URL="redis://localhost:6379"  # Optional
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{Destination, ResolvedFrom, ResolverService};
    pub use crate::domain::{HostingScheme, SiteBases, SiteKey};
    pub use crate::error::AppError;
    pub use crate::infrastructure::cache::{CacheService, MemoryCache, NullCache};
    pub use crate::infrastructure::probe::{ProbeError, SiteProber};
    pub use crate::state::AppState;
}
