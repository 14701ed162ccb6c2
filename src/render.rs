// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Output formatting for matched jailbreaks
//!
//! Colors are applied with `console`, which turns them off automatically
//! when stdout is not a terminal or `NO_COLOR` is set.

use std::sync::LazyLock;

use console::{StyledObject, style};
use regex::Regex;

use crate::feed::JailbreakEntry;
use crate::platform::{Platform, is_compatible};
use crate::version::display_version;

/// An opening, closing or `<!...>` tag; a `<` followed by anything else is text
static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?[A-Za-z!][^>]*>").expect("valid tag pattern"));

/// Remove HTML tags from feed caveat text
///
/// # Examples
/// ```
/// use canijb::render::strip_tags;
/// assert_eq!(strip_tags("Needs <b>A12</b> or older"), "Needs A12 or older");
/// assert_eq!(strip_tags("iOS < 12 and > 10"), "iOS < 12 and > 10");
/// ```
#[must_use]
pub fn strip_tags(text: &str) -> String {
    HTML_TAG.replace_all(text, "").into_owned()
}

/// Style a feed platform name green when usable from `host`, red otherwise
#[must_use]
pub fn platform_style(name: &str, host: Option<Platform>) -> StyledObject<&str> {
    if is_compatible(name, host) {
        style(name).green().bright()
    } else {
        style(name).red().bright()
    }
}

/// Format a single entry as a block of labelled lines
///
/// In simple mode the URL is folded into the name line and the version and
/// caveats are omitted.
#[must_use]
pub fn format_entry(entry: &JailbreakEntry, host: Option<Platform>, simple: bool) -> String {
    let mut lines = Vec::new();

    let version = non_empty(entry.version.as_ref());
    let url = non_empty(entry.url.as_ref());
    let caveats = non_empty(entry.caveats.as_ref());

    let url_suffix = match (url, simple) {
        (Some(url), true) => style(format!(" ({})", style(url).blue().bright().underlined()))
            .white()
            .bright()
            .to_string(),
        _ => String::new(),
    };
    lines.push(format!(
        "{}{}{url_suffix}",
        label("Name: "),
        style(&entry.name).white().bright()
    ));

    if !simple {
        if let Some(version) = version {
            lines.push(format!("{}{}", label("Version: "), style(version).white().bright()));
        }
        if let Some(url) = url {
            lines.push(format!("{}{}", label("URL: "), style(url).blue().bright().underlined()));
        }
    }

    let (start, end) = entry.ios_bounds().unwrap_or_default();
    let versions = format!("{} — {}", display_version(start), display_version(end));
    lines.push(format!(
        "{}{}",
        label("Supported Versions: "),
        style(versions).white().bright()
    ));

    let platforms: Vec<String> = entry
        .platforms
        .iter()
        .map(|p| platform_style(p, host).to_string())
        .collect();
    let separator = style(", ").white().bright().to_string();
    lines.push(format!("{}{}", label("Platforms: "), platforms.join(&separator)));

    if !simple && let Some(caveats) = caveats {
        lines.push(style(format!("* {}", strip_tags(caveats))).yellow().to_string());
    }

    lines.push("\n".to_string());
    lines.join("\n")
}

/// Render matches as text blocks, preceded by a blank line
#[must_use]
pub fn render_text(entries: &[&JailbreakEntry], host: Option<Platform>, simple: bool) -> String {
    let mut out = String::from("\n");
    for entry in entries {
        out.push_str(&format_entry(entry, host, simple));
    }
    out
}

/// Render matches as a pretty-printed JSON array
///
/// # Errors
/// Returns an error if an entry cannot be serialized
pub fn render_json(entries: &[&JailbreakEntry]) -> serde_json::Result<String> {
    Ok(format!("\n{}\n\n", serde_json::to_string_pretty(entries)?))
}

/// Render the answer of the existence check
#[must_use]
pub fn render_exists(jailbreakable: bool) -> String {
    format!("{jailbreakable}\n")
}

/// Feed text fields count as absent when empty
fn non_empty(field: Option<&String>) -> Option<&str> {
    field.map(String::as_str).filter(|s| !s.is_empty())
}

fn label(text: &str) -> String {
    style(text).black().bright().to_string()
}
