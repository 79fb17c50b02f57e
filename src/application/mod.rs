//! Application layer services implementing the redirect logic.
//!
//! Services consume infrastructure traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::resolver_service::ResolverService`] - Cache-first site resolution with live probing

pub mod services;
