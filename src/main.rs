//! # quartz
//!
//! **quartz** puts Obsidian vaults under git.
//!
//! - `quartz track <PATH>` (or `quartz t <PATH>`) initializes a repository in
//!   the vault at `PATH`, which must be `.`, `./<dir>` or `/<dir>`
//! - `quartz home` prints the directory holding `config.toml`
//!
//! This CLI is built with [clap](https://docs.rs/clap).

use clap::{ArgAction, Parser, Subcommand};
use quartz::{cmd_track, quartz_home};
use std::{io, process};
use tracing_subscriber::EnvFilter;

/// Command-line interface definition.
///
/// Parsed using `clap` derive macros. `-v` is global so it may follow the
/// subcommand (`quartz track . -vv`).
#[derive(Parser, Debug)]
#[command(
    name = "quartz",
    version,
    long_about = "Quartz is a synchronization tool for your Obsidian vaults",
    arg_required_else_help = true
)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Cmd,
}

/// Available subcommands.
///
/// Each variant corresponds to a subcommand of `quartz`.
#[derive(Subcommand, Debug)]
enum Cmd {
    /// Tracks obsidian vault
    #[command(visible_alias = "t", long_about = "Tracks obsidian vault via specified path")]
    Track {
        /// Vault path: `.`, `./<dir>` or `/<dir>`
        path: String,
    },
    /// Print the quartz configuration directory
    Home,
}

/// Set up tracing based on the `-v` count.
///
/// Logs go to stderr; stdout is reserved for the messages scripts may match
/// on. `RUST_LOG` overrides the level picked from `-v`.
fn setup_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with_writer(io::stderr)
        .init();
}

/// CLI entry point.
///
/// Parses arguments with `clap` and executes the selected subcommand.
///
/// A failed `track` is reported on stdout as
/// `Failed to initialize Quartz: <cause chain>` and exits with status 1.
/// Argument errors are left to `clap`, which exits with status 2.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    match cli.cmd {
        Cmd::Track { path } => {
            if let Err(e) = cmd_track(&path) {
                println!("Failed to initialize Quartz: {e:#}");
                process::exit(1);
            }
            Ok(())
        }
        Cmd::Home => {
            println!("{}", quartz_home()?.display());
            Ok(())
        }
    }
}
