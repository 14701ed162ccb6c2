// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Error types for fetching and reading the jailbreak feed

use thiserror::Error;

/// Failures that abort a run
///
/// Problems with a single feed entry are not errors; such entries simply
/// never match.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure (DNS, connection, TLS, invalid URL)
    #[error("failed to reach feed: {0}")]
    Network(#[from] attohttpc::Error),
    /// Feed server answered with a non-2xx status code
    #[error("feed request failed with HTTP status {0}")]
    HttpStatus(u16),
    /// Body is not JSON or is not shaped as `{ "jailbreaks": [...] }`
    #[error("failed to parse feed: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Error {
    /// Whether the feed could not be retrieved at all
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Network(_) | Error::HttpStatus(_))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
