use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, io, path::Path};

use crate::git::{GitCommand, Libgit2, RepoInitializer};
use crate::paths::paths;

/// Top-level configuration loaded from `config.toml`.
///
/// The file is optional; every key has a default.
///
/// Example TOML:
/// ```toml
/// [git]
/// backend = "command"
/// program = "/usr/local/bin/git"
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub git: GitConfig,
}

/// How `git init` is carried out.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GitConfig {
    #[serde(default)]
    pub backend: Backend,
    #[serde(default = "default_program")]
    pub program: String,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Spawn `<program> init <dir>`.
    #[default]
    Command,
    /// Call libgit2 in-process.
    Libgit2,
}

fn default_program() -> String {
    "git".to_string()
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            program: default_program(),
        }
    }
}

impl Config {
    /// Build the repository initializer this configuration asks for.
    pub fn initializer(&self) -> Box<dyn RepoInitializer> {
        match self.git.backend {
            Backend::Command => Box::new(GitCommand::new(&self.git.program)),
            Backend::Libgit2 => Box::new(Libgit2),
        }
    }
}

/// Load `config.toml` from the quartz home, falling back to defaults when the
/// file does not exist.
pub fn load_config() -> Result<Config> {
    let p = paths()?;
    load_config_from(&p.config)
}

/// Parse the configuration at `path`. A missing file yields [`Config::default`].
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config_from(path: &Path) -> Result<Config> {
    let txt = match fs::read_to_string(path) {
        Ok(txt) => txt,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => {
            return Err(e).with_context(|| format!("cannot read config: {}", path.display()));
        }
    };
    let cfg: Config = toml::from_str(&txt)
        .with_context(|| format!("failed to parse config: {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let td = tempdir().unwrap();
        let cfg = load_config_from(&td.path().join("config.toml")).unwrap();
        assert_eq!(cfg.git.backend, Backend::Command);
        assert_eq!(cfg.git.program, "git");
    }

    #[test]
    fn partial_git_table_keeps_other_defaults() {
        let td = tempdir().unwrap();
        let p = td.path().join("config.toml");
        fs::write(&p, "[git]\nprogram = \"/opt/git/bin/git\"\n").unwrap();

        let cfg = load_config_from(&p).unwrap();
        assert_eq!(cfg.git.backend, Backend::Command);
        assert_eq!(cfg.git.program, "/opt/git/bin/git");
    }

    #[test]
    fn libgit2_backend_is_parsed() {
        let td = tempdir().unwrap();
        let p = td.path().join("config.toml");
        fs::write(&p, "[git]\nbackend = \"libgit2\"\n").unwrap();

        let cfg = load_config_from(&p).unwrap();
        assert_eq!(cfg.git.backend, Backend::Libgit2);
    }

    #[test]
    fn malformed_file_names_path() {
        let td = tempdir().unwrap();
        let p = td.path().join("config.toml");
        fs::write(&p, "[git]\nbackend = \"svn\"\n").unwrap();

        let err = load_config_from(&p).unwrap_err();
        assert!(format!("{err:#}").contains("config.toml"));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let td = tempdir().unwrap();
        let p = td.path().join("config.toml");
        fs::write(&p, "[git]\nprogam = \"git\"\n").unwrap();

        assert!(load_config_from(&p).is_err());
    }
}
