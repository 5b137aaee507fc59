pub mod args;
pub mod domain;
pub mod input;
pub mod output;
pub mod prepare;
pub mod stats;
pub mod utils;

pub use args::{Args, OutputFormat};
pub use domain::{has_long_tld, is_deepest_subdomain, LONG_TLDS};
pub use prepare::{prepare_domain_names, prepare_with_stats};
pub use stats::{PrepareStats, PreparedNames};
