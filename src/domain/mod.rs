//! Domain layer: site keys and the hosting bases they resolve against.
//!
//! This layer has no dependencies on infrastructure or presentation code.
//!
//! - [`site_key`] - Typed extraction of the site name from a request path
//! - [`site_bases`] - Legacy/current URL prefixes and candidate construction

pub mod site_bases;
pub mod site_key;

pub use site_bases::{Candidate, HostingScheme, SiteBases};
pub use site_key::{ROUTE_PREFIX, SiteKey, SiteKeyError};
