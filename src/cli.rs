// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
// CLI argument definitions for canijb
//
// Included by build.rs to generate the man page via clap_mangen, so the only
// crate-internal import is the version module, which build.rs also mounts.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use semver::Version;

use crate::version::normalize_version;

/// Feed queried when no `--url` is given
pub const DEFAULT_FEED_URL: &str = "https://canijailbreak.com/jailbreaks.json";

/// CLI argument parser
#[derive(Debug, Parser)]
#[command(
    name = "canijb",
    version,
    about = "Check which jailbreaks support an iOS version",
    disable_version_flag = true
)]
#[command(arg(clap::Arg::new("version").long("version").action(clap::ArgAction::Version).help("Print version")))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Ignore jailbreaks that don't support the current OS (default)
    #[arg(short = 'c', long = "compat", visible_alias = "compatible", global = true, overrides_with = "no_compat")]
    pub compat: bool,

    /// Include jailbreaks regardless of the platforms they run on
    #[arg(long = "no-compat", global = true, overrides_with = "compat")]
    pub no_compat: bool,

    /// The URL to get the jailbreak information from
    #[arg(long, value_name = "URL", global = true, env = "CANIJB_URL", default_value = DEFAULT_FEED_URL)]
    pub url: String,

    /// Make the operation more talkative
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Generate shell completion script
    #[arg(long = "completion", value_name = "SHELL")]
    pub completion: Option<Shell>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Checks how to jailbreak a version
    Info(InfoArgs),
    /// Checks if a version is jailbreakable
    Exists(ExistsArgs),
}

#[derive(Debug, Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct InfoArgs {
    /// iOS version to look up (e.g. 14.3)
    #[arg(value_name = "OS", value_parser = parse_os_version)]
    pub os: Version,

    /// Hides tool version and merges URL with name
    #[arg(short, long)]
    pub simple: bool,

    /// Gets only the first matching result
    #[arg(short, long)]
    pub first: bool,

    /// Outputs matching JSON instead of the formatted output
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ExistsArgs {
    /// iOS version to look up (e.g. 14.3)
    #[arg(value_name = "OS", value_parser = parse_os_version)]
    pub os: Version,
}

impl Cli {
    /// Whether compat mode is on; it is unless `--no-compat` came last
    #[must_use]
    pub fn compat_enabled(&self) -> bool {
        !self.no_compat
    }
}

impl Command {
    /// The normalized iOS version argument of either subcommand
    #[must_use]
    pub fn os(&self) -> &Version {
        match self {
            Command::Info(args) => &args.os,
            Command::Exists(args) => &args.os,
        }
    }
}

fn parse_os_version(s: &str) -> Result<Version, String> {
    normalize_version(s)
        .ok_or_else(|| format!("invalid iOS version: {s} (expected e.g. 14 or 14.3.1)"))
}
