//! Vault path resolution.
//!
//! Turns the raw `track` argument into a directory and checks that the
//! directory is an Obsidian vault. Only three spellings are accepted:
//!
//! - `.`          the working directory
//! - `./<path>`   relative to the working directory
//! - `/<path>`    absolute, used as given
//!
//! Anything else (`notes`, `../notes`, `~/notes`) is rejected before the
//! filesystem is touched.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::QuartzError;
use crate::paths::{VAULT_MARKER, probe_dir};

/// How the user spelled the vault path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathForm {
    Current,
    Relative,
    Absolute,
}

/// A directory verified to contain a vault marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultPath {
    dir: PathBuf,
    form: PathForm,
}

impl VaultPath {
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn form(&self) -> PathForm {
        self.form
    }
}

/// Classify `raw` by its prefix. First match wins.
pub fn classify(raw: &str) -> Option<PathForm> {
    if raw == "." {
        Some(PathForm::Current)
    } else if raw.starts_with("./") {
        Some(PathForm::Relative)
    } else if raw.starts_with('/') {
        Some(PathForm::Absolute)
    } else {
        None
    }
}

/// Directory that `raw` denotes, given the working directory `cwd`.
fn candidate(raw: &str, form: PathForm, cwd: &Path) -> PathBuf {
    match form {
        PathForm::Current => cwd.to_path_buf(),
        // Extra slashes after `./` must not turn the remainder absolute.
        PathForm::Relative => cwd.join(raw[2..].trim_start_matches('/')),
        PathForm::Absolute => PathBuf::from(raw),
    }
}

/// Check that `dir` holds an openable `.obsidian` directory.
pub fn check_vault(dir: &Path) -> Result<(), QuartzError> {
    let marker = dir.join(VAULT_MARKER);
    debug!(marker = %marker.display(), "probing vault marker");
    probe_dir(&marker).map_err(|source| QuartzError::NotAVault {
        path: dir.to_path_buf(),
        source,
    })
}

/// Resolve `raw` against `cwd` and verify the result is a vault.
///
/// The returned [`VaultPath`] is exactly the directory whose marker was
/// checked.
///
/// # Errors
/// - [`QuartzError::UnrecognizablePath`] if `raw` has none of the accepted forms.
/// - [`QuartzError::NotAVault`] if the marker cannot be opened.
pub fn resolve(raw: &str, cwd: &Path) -> Result<VaultPath, QuartzError> {
    let form = classify(raw).ok_or_else(|| QuartzError::UnrecognizablePath {
        path: raw.to_string(),
    })?;
    let dir = candidate(raw, form, cwd);
    debug!(?form, dir = %dir.display(), "classified vault path");

    check_vault(&dir)?;
    Ok(VaultPath { dir, form })
}
