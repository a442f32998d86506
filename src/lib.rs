//! Crate entry point for **quartz**.
//!
//! This library provides the implementation behind the `quartz` CLI: it
//! checks that a path is an Obsidian vault and puts it under git.
//!
//! - [`vault`] classifies the user's path and verifies the `.obsidian` marker.
//! - [`bootstrap`] refuses already-tracked vaults and otherwise runs `git init`.
//! - [`git`] holds the interchangeable ways of running `git init`.
//!
//! - [`config`] reads the optional `config.toml` that picks a [`git`] backend.
//!
//! Errors below the command layer are typed ([`QuartzError`]); the commands
//! add `anyhow` context naming the stage that failed.
//!
//! The `pub use` re-exports make the commands reachable from the crate root.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod git;
mod paths;
mod track;
pub mod vault;

pub use config::{Config, load_config};
pub use error::QuartzError;
pub use paths::quartz_home;
pub use track::{cmd_track, track};
pub use vault::{PathForm, VaultPath};
