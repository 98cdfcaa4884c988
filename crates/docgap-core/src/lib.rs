//! Find documentation URLs that have not been saved as Markdown yet.
//!
//! A URL list is compared against a directory of `.md` files; each URL maps
//! to one candidate filename via [`normalize::Normalizer`].

pub mod config;
pub mod detect;
pub mod error;
pub mod logging;
pub mod missing;
pub mod normalize;
pub mod report;
pub mod scan;
pub mod url_list;

pub use detect::detect_missing;
pub use error::DetectError;
pub use missing::{find_collisions, find_missing, Collision, MissingEntry};
pub use normalize::{normalize, Normalizer};
pub use report::Report;
pub use scan::scan_existing;
pub use url_list::{load_urls, read_urls};
