//! Infrastructure layer for external integrations.
//!
//! Implements the collaborator traits the resolver depends on.
//!
//! # Modules
//!
//! - [`cache`] - Destination cache backends (Redis, in-memory, no-op)
//! - [`probe`] - Outbound HTTP liveness probing of candidate URLs

pub mod cache;
pub mod probe;
