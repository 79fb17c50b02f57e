//! Outbound liveness probing of candidate URLs.
//!
//! - [`SiteProber`] - Trait the resolver depends on
//! - [`HttpProber`] - `reqwest`-based implementation with a bounded timeout

mod http_prober;
mod service;

pub use http_prober::{HttpProber, ProbeConfig};
pub use service::{ProbeError, SiteProber};

#[cfg(test)]
pub use service::MockSiteProber;
