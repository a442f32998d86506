use anyhow::{Context, Result};
use std::env;
use std::path::Path;

use crate::bootstrap::bootstrap;
use crate::config::load_config;
use crate::error::QuartzError;
use crate::git::RepoInitializer;
use crate::vault::{VaultPath, resolve};

/// CLI command: start tracking the vault at `raw` with git.
///
/// Runs [`track`] against the process working directory, building the
/// initializer from `config.toml`. Prints a confirmation line on success.
///
/// # Errors
/// Returns the first failing stage, wrapped with the stage name.
pub fn cmd_track(raw: &str) -> Result<()> {
    let cwd = env::current_dir().map_err(QuartzError::WorkingDir)?;
    track(raw, &cwd, || Ok(load_config()?.initializer()))?;
    println!("quartz initialized new git repository");
    Ok(())
}

/// Resolve `raw` against `cwd` and bootstrap a repository there.
///
/// `initializer` is only called once the vault has been verified, so a
/// broken configuration never masks a bad path.
pub fn track<G, F>(raw: &str, cwd: &Path, initializer: F) -> Result<VaultPath>
where
    G: RepoInitializer,
    F: FnOnce() -> Result<G>,
{
    let vault = resolve(raw, cwd).context("resolving vault path")?;
    let git = initializer().context("loading configuration")?;
    bootstrap(&vault, &git).context("bootstrapping repository")?;
    Ok(vault)
}
