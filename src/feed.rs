// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Jailbreak feed model and fetching
//!
//! The feed is a JSON document of the form `{ "jailbreaks": [...] }`. It is
//! fetched fresh on every run with a single GET request; nothing is cached.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Error, Result};

/// Supported iOS range of a jailbreak, as written in the feed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IosRange {
    /// First supported version (e.g. "11.0")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// Last supported version (e.g. "14.3")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One jailbreak record from the feed
///
/// Fields this tool does not interpret are kept in `extra` so that JSON
/// output reproduces the entry as the feed published it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JailbreakEntry {
    /// Tool name (e.g. "unc0ver")
    pub name: String,
    /// Tool version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Reference link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Free-text notes, may contain HTML tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caveats: Option<String>,
    /// `false` for informational placeholders
    #[serde(default)]
    pub jailbroken: bool,
    /// Platforms the tool runs on ("iOS", "Windows", "macOS", "Linux")
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios: Option<IosRange>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl JailbreakEntry {
    /// Range bounds, if both are present
    #[must_use]
    pub fn ios_bounds(&self) -> Option<(&str, &str)> {
        let ios = self.ios.as_ref()?;
        Some((ios.start.as_deref()?, ios.end.as_deref()?))
    }
}

/// Parsed jailbreak feed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Feed {
    /// Readable entries in feed order
    pub jailbreaks: Vec<JailbreakEntry>,
    /// Number of array elements that could not be read as an entry
    pub skipped: usize,
}

impl Feed {
    /// Build a feed from already parsed entries
    #[must_use]
    pub fn new(jailbreaks: Vec<JailbreakEntry>) -> Self {
        Self {
            jailbreaks,
            skipped: 0,
        }
    }
}

#[derive(Deserialize)]
struct RawFeed {
    jailbreaks: Vec<Value>,
}

/// Parse a feed document
///
/// The document must be an object holding a `jailbreaks` array. Elements
/// that are not readable entries are skipped and counted in
/// [`Feed::skipped`], since they could never match anyway.
///
/// # Errors
/// Returns [`Error::Parse`] if the body is not JSON or has no `jailbreaks` array
pub fn parse_feed(body: &str) -> Result<Feed> {
    let raw: RawFeed = serde_json::from_str(body)?;

    let mut feed = Feed::default();
    for (index, value) in raw.jailbreaks.into_iter().enumerate() {
        match serde_json::from_value::<JailbreakEntry>(value) {
            Ok(entry) => feed.jailbreaks.push(entry),
            Err(e) => {
                debug!(index, error = %e, "skipping unreadable feed entry");
                feed.skipped += 1;
            }
        }
    }

    debug!(
        entries = feed.jailbreaks.len(),
        skipped = feed.skipped,
        "parsed feed"
    );
    Ok(feed)
}

/// Fetch and parse the feed from `url`
///
/// Issues exactly one GET request. There are no retries.
///
/// # Errors
/// Returns [`Error::Network`] on transport failure, [`Error::HttpStatus`] on a
/// non-success response and [`Error::Parse`] if the body is not a feed
pub fn fetch_feed(url: &str) -> Result<Feed> {
    debug!(url, "fetching feed");
    let response = attohttpc::get(url)
        .header(attohttpc::header::ACCEPT, "application/json")
        .send()?;

    let status = response.status();
    debug!(status = status.as_u16(), "feed responded");
    if !status.is_success() {
        return Err(Error::HttpStatus(status.as_u16()));
    }

    let body = response.text()?;
    parse_feed(&body)
}
