// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Platform detection and compatibility checks
//!
//! The feed lists, for every jailbreak, the platforms its tooling runs on.
//! This module maps the host operating system onto those feed names and
//! decides whether a listed platform is usable from the current machine.

use std::fmt;

/// A platform name as it appears in the feed's `platforms` list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// On-device jailbreaks that need no computer
    Ios,
    Windows,
    MacOs,
    Linux,
}

impl Platform {
    /// Every platform the feed knows about
    pub const ALL: [Platform; 4] = [
        Platform::Ios,
        Platform::Windows,
        Platform::MacOs,
        Platform::Linux,
    ];

    /// Name used for this platform in the feed
    #[must_use]
    pub const fn feed_name(self) -> &'static str {
        match self {
            Platform::Ios => "iOS",
            Platform::Windows => "Windows",
            Platform::MacOs => "macOS",
            Platform::Linux => "Linux",
        }
    }

    /// Look up a platform by its exact feed name
    ///
    /// Matching is case-sensitive; anything outside the four known names
    /// yields `None`.
    #[must_use]
    pub fn from_feed_name(name: &str) -> Option<Platform> {
        Self::ALL.into_iter().find(|p| p.feed_name() == name)
    }

    /// Map a Rust target OS name (as in `std::env::consts::OS`) to a platform
    ///
    /// Only desktop systems can host a jailbreak tool, so `ios` itself and
    /// any other OS map to `None`.
    #[must_use]
    pub fn from_os(os: &str) -> Option<Platform> {
        match os {
            "windows" => Some(Platform::Windows),
            "macos" => Some(Platform::MacOs),
            "linux" => Some(Platform::Linux),
            _ => None,
        }
    }

    /// Detect the platform this binary runs on
    #[must_use]
    pub fn detect() -> Option<Platform> {
        Self::from_os(std::env::consts::OS)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.feed_name())
    }
}

/// Check whether a feed platform name is usable from the host
///
/// `"iOS"` is always usable. Otherwise the name must equal the host's feed
/// name exactly; unknown names are never compatible.
///
/// # Examples
/// ```
/// use canijb::platform::{Platform, is_compatible};
/// assert!(is_compatible("iOS", None));
/// assert!(is_compatible("Linux", Some(Platform::Linux)));
/// assert!(!is_compatible("linux", Some(Platform::Linux)));
/// assert!(!is_compatible("Windows", Some(Platform::MacOs)));
/// ```
#[must_use]
pub fn is_compatible(name: &str, host: Option<Platform>) -> bool {
    match Platform::from_feed_name(name) {
        Some(Platform::Ios) => true,
        Some(platform) => host == Some(platform),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_names_round_trip() {
        for platform in Platform::ALL {
            assert_eq!(Platform::from_feed_name(platform.feed_name()), Some(platform));
        }
        assert_eq!(Platform::from_feed_name("macos"), None);
        assert_eq!(Platform::from_feed_name("Android"), None);
    }

    #[test]
    fn maps_host_operating_systems() {
        assert_eq!(Platform::from_os("linux"), Some(Platform::Linux));
        assert_eq!(Platform::from_os("macos"), Some(Platform::MacOs));
        assert_eq!(Platform::from_os("windows"), Some(Platform::Windows));
        assert_eq!(Platform::from_os("ios"), None);
        assert_eq!(Platform::from_os("freebsd"), None);
    }

    #[test]
    fn detect_agrees_with_target_os() {
        assert_eq!(Platform::detect(), Platform::from_os(std::env::consts::OS));
    }

    #[test]
    fn unknown_host_only_accepts_ios() {
        assert!(is_compatible("iOS", None));
        for name in ["Windows", "macOS", "Linux", "FreeBSD"] {
            assert!(!is_compatible(name, None));
        }
    }

    #[test]
    fn unrecognized_names_are_never_compatible() {
        for host in Platform::ALL {
            assert!(!is_compatible("ChromeOS", Some(host)));
            assert!(!is_compatible("", Some(host)));
        }
    }
}
