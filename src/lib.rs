// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Can I Jailbreak Library
//!
//! This library fetches the public jailbreak feed, selects the entries that
//! support a given iOS version from the current platform, and formats them
//! for the terminal.

pub mod cli;
pub mod error;
pub mod feed;
pub mod matcher;
pub mod platform;
pub mod render;
pub mod version;

// Re-export commonly used items at the crate root for convenience
pub use cli::DEFAULT_FEED_URL;
pub use error::{Error, Result};
pub use feed::{Feed, IosRange, JailbreakEntry, fetch_feed, parse_feed};
pub use matcher::{MatchQuery, find_matches, is_jailbreakable, select};
pub use platform::{Platform, is_compatible};
pub use version::{normalize_version, version_in_range};
