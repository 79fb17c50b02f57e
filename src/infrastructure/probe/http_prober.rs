//! `reqwest`-backed prober.

use super::service::{ProbeError, SiteProber};
use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::debug;

/// Configuration for the outbound HTTP client.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// User agent sent with every probe
    pub user_agent: String,

    /// Whole-request timeout (default: 10s)
    pub timeout: Duration,

    /// Maximum number of redirects to follow (default: 10)
    pub max_redirects: usize,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("gsite-redirect/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(10),
            max_redirects: 10,
        }
    }
}

/// Probes candidate URLs with a plain HTTP GET.
///
/// Redirects are followed, so the reported status is the one of the final
/// response. The body is never read.
pub struct HttpProber {
    http: Client,
}

impl HttpProber {
    /// Builds the underlying HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Client`] if the TLS backend cannot be initialized.
    pub fn new(config: &ProbeConfig) -> Result<Self, ProbeError> {
        let http = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()
            .map_err(|e| ProbeError::Client(e.to_string()))?;

        Ok(Self { http })
    }
}

#[async_trait]
impl SiteProber for HttpProber {
    async fn probe(&self, url: &str) -> Result<u16, ProbeError> {
        let start = Instant::now();

        let response = self.http.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                ProbeError::Timeout(e.to_string())
            } else {
                ProbeError::Network(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        debug!(
            "Probe {} -> {} in {}ms",
            url,
            status,
            start.elapsed().as_millis()
        );

        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_config_default() {
        let config = ProbeConfig::default();
        assert!(config.user_agent.starts_with("gsite-redirect/"));
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.max_redirects, 10);
    }

    #[test]
    fn test_http_prober_builds() {
        assert!(HttpProber::new(&ProbeConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn test_probe_unreachable_host_is_error() {
        let prober = HttpProber::new(&ProbeConfig {
            timeout: Duration::from_secs(2),
            ..ProbeConfig::default()
        })
        .unwrap();

        // Port 9 (discard) on localhost is closed on test machines.
        let result = prober.probe("http://127.0.0.1:9/site").await;
        assert!(result.is_err());
    }
}
