// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Selection of feed entries that jailbreak a given iOS version

use semver::Version;
use tracing::trace;

use crate::feed::{Feed, JailbreakEntry};
use crate::platform::{Platform, is_compatible};
use crate::version::{normalize_version, version_in_range};

/// What to look for in the feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchQuery {
    /// Normalized iOS version to jailbreak
    pub target: Version,
    /// Platform the user runs tools on; `None` if unknown
    pub host: Option<Platform>,
    /// Only keep entries usable from `host` (or on-device)
    pub compat: bool,
}

impl MatchQuery {
    /// Query for `target` with compat mode on
    #[must_use]
    pub fn new(target: Version, host: Option<Platform>) -> Self {
        Self {
            target,
            host,
            compat: true,
        }
    }

    #[must_use]
    pub fn with_compat(mut self, compat: bool) -> Self {
        self.compat = compat;
        self
    }

    /// Check a single entry against this query
    ///
    /// Entries without a readable `ios` range never match.
    #[must_use]
    pub fn matches(&self, entry: &JailbreakEntry) -> bool {
        if !entry.jailbroken {
            return false;
        }

        let Some((start, end)) = entry.ios_bounds() else {
            trace!(name = %entry.name, "entry has no ios range");
            return false;
        };
        let (Some(start), Some(end)) = (normalize_version(start), normalize_version(end)) else {
            trace!(name = %entry.name, start, end, "entry has unparsable ios range");
            return false;
        };
        if !version_in_range(&self.target, &start, &end) {
            return false;
        }

        !self.compat || entry.platforms.iter().any(|p| is_compatible(p, self.host))
    }
}

/// All entries matching `query`, in feed order
#[must_use]
pub fn find_matches<'a>(feed: &'a Feed, query: &MatchQuery) -> Vec<&'a JailbreakEntry> {
    feed.jailbreaks
        .iter()
        .filter(|entry| query.matches(entry))
        .collect()
}

/// Truncate matches to the first one when `first` is set
#[must_use]
pub fn select<T>(mut matches: Vec<T>, first: bool) -> Vec<T> {
    if first {
        matches.truncate(1);
    }
    matches
}

/// Whether any entry in the feed matches `query`
#[must_use]
pub fn is_jailbreakable(feed: &Feed, query: &MatchQuery) -> bool {
    feed.jailbreaks.iter().any(|entry| query.matches(entry))
}
