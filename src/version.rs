// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Version normalization and range checks for iOS versions
//!
//! Feed entries and user input carry loosely formatted version strings such as
//! "12" or "11.0". Everything is normalized to a three-component semantic
//! version before comparison.

use semver::Version;

/// Number of components a normalized version carries
const COMPONENTS: usize = 3;

/// Normalize a loose version string to a three-component semantic version
///
/// Missing minor and patch components are padded with zero, components past
/// the third are dropped. A leading `v` is accepted. Pre-release and build
/// metadata are not supported.
///
/// # Arguments
/// * `input` - Version string (e.g. "12", "11.0", "14.3.1")
///
/// # Returns
/// `Some(Version)` when every used component is a decimal integer, `None` otherwise
///
/// # Examples
/// ```
/// use canijb::version::normalize_version;
/// assert_eq!(normalize_version("12").unwrap().to_string(), "12.0.0");
/// assert_eq!(normalize_version("11.0").unwrap().to_string(), "11.0.0");
/// assert_eq!(normalize_version("1.2.3.4").unwrap().to_string(), "1.2.3");
/// assert!(normalize_version("twelve").is_none());
/// ```
#[must_use]
pub fn normalize_version(input: &str) -> Option<Version> {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_prefix(['v', 'V']).unwrap_or(trimmed);
    if trimmed.is_empty() {
        return None;
    }

    let mut parts = [0u64; COMPONENTS];
    for (slot, part) in parts.iter_mut().zip(trimmed.split('.')) {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *slot = part.parse().ok()?;
    }

    let [major, minor, patch] = parts;
    Some(Version::new(major, minor, patch))
}

/// Check whether a version lies in the inclusive range `[start, end]`
///
/// # Examples
/// ```
/// use canijb::version::{normalize_version, version_in_range};
/// let v = |s| normalize_version(s).unwrap();
/// assert!(version_in_range(&v("14.0"), &v("11.0"), &v("14.3")));
/// assert!(version_in_range(&v("14.3"), &v("11.0"), &v("14.3")));
/// assert!(!version_in_range(&v("14.4"), &v("11.0"), &v("14.3")));
/// ```
#[must_use]
pub fn version_in_range(target: &Version, start: &Version, end: &Version) -> bool {
    start <= target && target <= end
}

/// Normalize a version for display, falling back to the raw text
///
/// Used when printing feed ranges, where an unparsable bound should still be
/// shown as the feed wrote it.
#[must_use]
pub fn display_version(input: &str) -> String {
    normalize_version(input).map_or_else(|| input.to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        normalize_version(s).expect("valid version")
    }

    #[test]
    fn pads_missing_components() {
        assert_eq!(v("12"), Version::new(12, 0, 0));
        assert_eq!(v("12.4"), Version::new(12, 4, 0));
        assert_eq!(v("12.4.1"), Version::new(12, 4, 1));
        assert_eq!(v("12"), v("12.0.0"));
    }

    #[test]
    fn accepts_prefix_and_whitespace() {
        assert_eq!(v(" v13.5 "), Version::new(13, 5, 0));
        assert_eq!(v("V7"), Version::new(7, 0, 0));
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in ["", " ", "v", "12.", ".1", "12..1", "12.x", "12.0-beta", "-1", "1.2.+3"] {
            assert!(normalize_version(bad).is_none(), "{bad:?} should not normalize");
        }
    }

    #[test]
    fn ignores_components_past_patch() {
        assert_eq!(v("10.3.3.1"), Version::new(10, 3, 3));
    }

    #[test]
    fn compares_numerically() {
        assert!(v("10.0") > v("9.3.5"));
        assert!(v("14.10") > v("14.9"));
    }

    #[test]
    fn range_is_inclusive() {
        let (start, end) = (v("11.0"), v("14.3"));
        assert!(version_in_range(&v("11"), &start, &end));
        assert!(version_in_range(&v("14.3.0"), &start, &end));
        assert!(version_in_range(&v("12.5.7"), &start, &end));
        assert!(!version_in_range(&v("10.3.4"), &start, &end));
        assert!(!version_in_range(&v("14.3.1"), &start, &end));
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let (start, end) = (v("14.0"), v("13.0"));
        assert!(!version_in_range(&v("13.5"), &start, &end));
        assert!(!version_in_range(&v("14.0"), &start, &end));
    }

    #[test]
    fn display_falls_back_to_raw_text() {
        assert_eq!(display_version("11.0"), "11.0.0");
        assert_eq!(display_version("latest"), "latest");
    }
}
