// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Can I Jailbreak (canijb) - Main Application
//!
//! Entry point for the canijb CLI tool, which looks up the public jailbreak
//! feed and reports which tools can jailbreak a given iOS version.
//!
//! The application supports:
//! - Listing matching jailbreaks as formatted text or JSON
//! - Checking whether a version is jailbreakable at all
//! - Filtering by the platforms the current machine can run
//! - Shell completion generation

use std::io;
use std::process::exit;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use canijb::cli::{Cli, Command, InfoArgs};
use canijb::render::{render_exists, render_json, render_text};
use canijb::{MatchQuery, Platform, fetch_feed, find_matches, is_jailbreakable, select};

/// Main application entry point
///
/// Parses command line arguments and dispatches to the subcommand handlers.
/// Argument problems exit through clap with status 2, feed failures with 1.
fn main() {
    let cli = Cli::parse();

    // Handle completion generation first (exits immediately)
    if let Some(shell) = cli.completion {
        clap_complete::generate(shell, &mut Cli::command(), "canijb", &mut io::stdout());
        return;
    }

    init_tracing(cli.verbose);

    let Some(command) = &cli.command else {
        Cli::command()
            .error(
                ErrorKind::MissingSubcommand,
                "a subcommand is required ('info' or 'exists')",
            )
            .exit();
    };

    let host = Platform::detect();
    let query = MatchQuery::new(command.os().clone(), host).with_compat(cli.compat_enabled());
    debug!(version = %query.target, host = ?host, compat = query.compat, "querying feed");

    let result = match command {
        Command::Info(args) => cmd_info(&cli.url, &query, args),
        Command::Exists(_) => cmd_exists(&cli.url, &query),
    };

    // Handle errors by printing to stderr and exiting with non-zero status
    if let Err(e) = result {
        eprintln!("canijb: {e}");
        exit(1);
    }
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` wins when set; otherwise `--verbose` enables debug output for
/// this crate.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "canijb=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();
}

// =============================================================================
// Command Implementation Functions
// =============================================================================

/// Print the jailbreaks matching the query
///
/// # Arguments
/// * `url` - Feed URL
/// * `query` - Target version, host platform and compat mode
/// * `args` - Output options (`--simple`, `--first`, `--json`)
fn cmd_info(url: &str, query: &MatchQuery, args: &InfoArgs) -> canijb::Result<()> {
    let feed = fetch_feed(url)?;
    let matches = select(find_matches(&feed, query), args.first);
    debug!(matches = matches.len(), "matched feed entries");

    if args.json {
        print!("{}", render_json(&matches)?);
    } else {
        print!("{}", render_text(&matches, query.host, args.simple));
    }
    Ok(())
}

/// Print whether any jailbreak matches the query
fn cmd_exists(url: &str, query: &MatchQuery) -> canijb::Result<()> {
    let feed = fetch_feed(url)?;
    print!("{}", render_exists(is_jailbreakable(&feed, query)));
    Ok(())
}
