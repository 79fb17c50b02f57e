//! Web layer: server-rendered informational pages.
//!
//! Uses Askama templates compiled into the binary, so there is nothing to
//! load or parse at startup.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
