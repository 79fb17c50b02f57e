//! Site key extraction from request paths.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Path prefix of the redirect route.
pub const ROUTE_PREFIX: &str = "/s/";

static SITE_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._~%-]+$").unwrap());

/// Reasons a request path does not yield a usable site key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SiteKeyError {
    #[error("Path is outside the redirect route")]
    OutsideRoute,

    #[error("Missing site name after the redirect prefix")]
    Missing,

    #[error("Invalid site name: {0}")]
    Invalid(String),
}

/// Identifier of a Google site, taken from the first path segment after
/// [`ROUTE_PREFIX`].
///
/// Used both as the cache key and as the suffix appended to each hosting base.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SiteKey(String);

impl SiteKey {
    /// Extracts the site key from a request path such as `/s/marketing/about`.
    ///
    /// Only the first segment after the prefix is used; anything after it is
    /// ignored. The query string must not be part of `path`.
    ///
    /// # Errors
    ///
    /// - [`SiteKeyError::OutsideRoute`] if the path does not start with `/s/`
    /// - [`SiteKeyError::Missing`] if nothing follows the prefix
    /// - [`SiteKeyError::Invalid`] if the segment fails [`SiteKey::parse`]
    pub fn from_path(path: &str) -> Result<Self, SiteKeyError> {
        let rest = path
            .strip_prefix(ROUTE_PREFIX)
            .ok_or(SiteKeyError::OutsideRoute)?;

        let segment = rest.split('/').next().unwrap_or_default();
        Self::parse(segment)
    }

    /// Validates a bare site name.
    ///
    /// Accepts ASCII letters, digits and `- _ . ~ %`. The dot segments `.` and
    /// `..` are rejected, also when percent-encoded (`%2e`, `%2E`), so they
    /// cannot alter the candidate URL path.
    pub fn parse(raw: &str) -> Result<Self, SiteKeyError> {
        if raw.is_empty() {
            return Err(SiteKeyError::Missing);
        }

        if is_dot_segment(raw) || !SITE_KEY_REGEX.is_match(raw) {
            return Err(SiteKeyError::Invalid(raw.to_string()));
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// `url` resolves `%2e` like `.`, so both spellings count.
fn is_dot_segment(raw: &str) -> bool {
    let decoded = raw.to_ascii_lowercase().replace("%2e", ".");
    decoded == "." || decoded == ".."
}

impl fmt::Display for SiteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
