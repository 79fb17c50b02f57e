//! Site resolution service.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::{Candidate, HostingScheme, SiteBases, SiteKey};
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::probe::SiteProber;
use tracing::{debug, error, info, warn};

/// Where a resolved destination came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedFrom {
    Cache,
    Probe(HostingScheme),
}

/// A live destination for a site key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub url: String,
    pub from: ResolvedFrom,
}

/// Outcome of probing a single candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateReport {
    pub candidate: Candidate,
    /// Final status code, or `None` if the request failed
    pub status: Option<u16>,
}

impl CandidateReport {
    pub fn is_live(&self) -> bool {
        self.status == Some(200)
    }
}

/// Resolves site keys to live Google Sites URLs.
///
/// Consults the cache first. On a miss (or a cache error) it probes the
/// legacy candidate and then the current one; the first to answer exactly
/// `200` is cached for `cache_ttl` and returned.
pub struct ResolverService {
    cache: Arc<dyn CacheService>,
    prober: Arc<dyn SiteProber>,
    bases: SiteBases,
    cache_ttl: Duration,
}

impl ResolverService {
    /// Creates a new resolver.
    pub fn new(
        cache: Arc<dyn CacheService>,
        prober: Arc<dyn SiteProber>,
        bases: SiteBases,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            cache,
            prober,
            bases,
            cache_ttl,
        }
    }

    pub fn bases(&self) -> &SiteBases {
        &self.bases
    }

    /// Resolves `key` to a destination, or `None` if neither candidate is live.
    ///
    /// # Request Flow
    ///
    /// 1. Cache lookup; a hit is returned without probing
    /// 2. Probe legacy candidate, then current candidate
    /// 3. Cache the first live candidate (a write failure is logged only)
    ///
    /// Cache read errors are logged and treated as a miss. Probe errors are
    /// indistinguishable from non-200 responses. Nothing is cached when both
    /// candidates fail.
    pub async fn resolve(&self, key: &SiteKey) -> Option<Destination> {
        match self.cache.get_destination(key.as_str()).await {
            Ok(Some(url)) => {
                debug!("Cache HIT: {} -> {}", key, url);
                metrics::counter!("gsite_cache_hits_total").increment(1);
                return Some(Destination {
                    url,
                    from: ResolvedFrom::Cache,
                });
            }
            Ok(None) => {
                debug!("Cache MISS: {}", key);
                metrics::counter!("gsite_cache_misses_total").increment(1);
            }
            Err(e) => {
                error!("Cache error for {}: {}", key, e);
                metrics::counter!("gsite_cache_errors_total").increment(1);
            }
        }

        for candidate in self.bases.candidates(key) {
            let report = self.probe_candidate(candidate).await;
            if !report.is_live() {
                continue;
            }

            let Candidate { scheme, url } = report.candidate;

            if let Err(e) = self
                .cache
                .set_destination(key.as_str(), &url, Some(self.cache_ttl.as_secs()))
                .await
            {
                warn!("Failed to cache destination for {}: {}", key, e);
            }

            info!("Resolved {} to {} destination {}", key, scheme, url);
            return Some(Destination {
                url,
                from: ResolvedFrom::Probe(scheme),
            });
        }

        warn!(
            "Unable to find site {} at {} or {}",
            key,
            self.bases.legacy(),
            self.bases.current()
        );
        metrics::counter!("gsite_not_found_total").increment(1);
        None
    }

    /// Probes both candidates without consulting or touching the cache.
    ///
    /// Used by diagnostics; request handling goes through [`Self::resolve`].
    pub async fn probe_all(&self, key: &SiteKey) -> [CandidateReport; 2] {
        let [legacy, current] = self.bases.candidates(key);
        [
            self.probe_candidate(legacy).await,
            self.probe_candidate(current).await,
        ]
    }

    async fn probe_candidate(&self, candidate: Candidate) -> CandidateReport {
        let status = match self.prober.probe(&candidate.url).await {
            Ok(status) => Some(status),
            Err(e) => {
                debug!("Probe {} failed: {}", candidate.url, e);
                None
            }
        };

        let outcome = if status == Some(200) { "live" } else { "unavailable" };
        metrics::counter!(
            "gsite_probes_total",
            "scheme" => candidate.scheme.as_str(),
            "outcome" => outcome
        )
        .increment(1);

        CandidateReport { candidate, status }
    }
}
