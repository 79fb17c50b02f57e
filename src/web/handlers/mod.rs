//! HTML template rendering handlers.

mod index;
mod site_help;

pub use index::{IndexTemplate, index_handler};
pub use site_help::{SiteHelpTemplate, site_help_handler};
