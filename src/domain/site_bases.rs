//! Hosting bases and candidate URL construction.

use super::site_key::SiteKey;
use std::fmt;

const GOOGLE_SITES_ORIGIN: &str = "https://sites.google.com";

/// Google Sites hosting scheme a destination belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostingScheme {
    /// Classic Sites, served under `/a/<domain>/`.
    Legacy,
    /// New Sites, served under `/<domain>/`.
    Current,
}

impl HostingScheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Current => "current",
        }
    }
}

impl fmt::Display for HostingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A destination URL that may or may not be live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub scheme: HostingScheme,
    pub url: String,
}

/// The two URL prefixes a site key is appended to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteBases {
    domain: String,
    legacy: String,
    current: String,
}

impl SiteBases {
    /// Builds the standard Google Sites prefixes for a Workspace domain.
    pub fn for_domain(domain: &str) -> Self {
        Self {
            domain: domain.to_string(),
            legacy: format!("{}/a/{}/", GOOGLE_SITES_ORIGIN, domain),
            current: format!("{}/{}/", GOOGLE_SITES_ORIGIN, domain),
        }
    }

    /// Uses explicit prefixes, e.g. when fronting a mirror or a test upstream.
    pub fn new(
        domain: impl Into<String>,
        legacy: impl Into<String>,
        current: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            legacy: legacy.into(),
            current: current.into(),
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn legacy(&self) -> &str {
        &self.legacy
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// Candidate URLs for `key` in probe order: legacy first, then current.
    pub fn candidates(&self, key: &SiteKey) -> [Candidate; 2] {
        [
            Candidate {
                scheme: HostingScheme::Legacy,
                url: format!("{}{}", self.legacy, key),
            },
            Candidate {
                scheme: HostingScheme::Current,
                url: format!("{}{}", self.current, key),
            },
        ]
    }
}
