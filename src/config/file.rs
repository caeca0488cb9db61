//! The declarative user config file.
//!
//! A YAML file exposing exactly the registry operations (add, activate,
//! deactivate) plus the editor default and case sensitivity. It replaces
//! the evaluated init script of older tools in this space: the file is
//! data and cannot execute code. Errors loading it are logged and
//! startup continues with whatever configuration succeeded.

use crate::registry::Registry;
use crate::repository::{PathFilter, RepositoryKind, RepositoryOptions};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Root of the config file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Default editor command, below an explicit `--editor` but above
    /// `VISUAL`/`EDITOR` in precedence.
    #[serde(default)]
    pub editor: Option<String>,

    /// Match package names case-insensitively.
    #[serde(default)]
    pub case_insensitive: bool,

    /// Repositories to register, in order, after the ecosystem bootstrap.
    #[serde(default)]
    pub repositories: Vec<RepositoryEntry>,

    /// Labels to activate after registration.
    #[serde(default)]
    pub activate: Vec<String>,

    /// Labels to deactivate, applied last.
    #[serde(default)]
    pub deactivate: Vec<String>,
}

/// One repository registration in the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryEntry {
    pub label: String,
    pub paths: Vec<PathBuf>,
    #[serde(default)]
    pub kind: RepositoryKind,
    #[serde(default)]
    pub accept: Option<FilterSpec>,
    #[serde(default)]
    pub reject: Option<FilterSpec>,
}

/// A filter in the config file: a bare string is a glob; the tagged forms
/// spell it out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterSpec {
    Plain(String),
    Glob { glob: String },
    Regex { regex: String },
}

impl FilterSpec {
    fn build(&self) -> crate::Result<PathFilter> {
        match self {
            FilterSpec::Plain(glob) | FilterSpec::Glob { glob } => PathFilter::glob(glob),
            FilterSpec::Regex { regex } => PathFilter::regex(regex),
        }
    }
}

impl ConfigFile {
    /// Load the config file from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {path:?}"))?;
        let config: ConfigFile = serde_yaml_ng::from_str(&content)
            .with_context(|| format!("Failed to parse config file {path:?}"))?;
        debug!(
            "Loaded config: {} repositories, {} activations",
            config.repositories.len(),
            config.activate.len()
        );
        Ok(config)
    }

    /// Load the config file if it exists; a missing file is normal and
    /// yields the default config, and a broken file is logged and
    /// replaced by the default so startup continues.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return ConfigFile::default();
        };
        if !path.exists() {
            debug!("No config file at {:?}", path);
            return ConfigFile::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                warn!("Ignoring config file {:?}: {:#}", path, err);
                ConfigFile::default()
            }
        }
    }

    /// Apply this config to the registry: register repositories in file
    /// order, then activate, then deactivate. A repository entry with a
    /// malformed filter is skipped with a warning; the rest still apply.
    pub fn apply(&self, registry: &mut Registry) {
        for entry in &self.repositories {
            match entry.options() {
                Ok(options) => registry.add_all(&entry.label, &entry.paths, &options),
                Err(err) => {
                    warn!("Skipping repository entry {:?}: {}", entry.label, err);
                }
            }
        }
        for label in &self.activate {
            registry.activate(label.clone());
        }
        for label in &self.deactivate {
            registry.deactivate(label);
        }
    }
}

impl RepositoryEntry {
    fn options(&self) -> crate::Result<RepositoryOptions> {
        Ok(RepositoryOptions {
            kind: self.kind,
            accept: self.accept.as_ref().map(FilterSpec::build).transpose()?,
            reject: self.reject.as_ref().map(FilterSpec::build).transpose()?,
        })
    }
}

/// Starter config written by `qy init`.
pub const STARTER: &str = "\
# quarry configuration
#
# editor: \"mate -w\"        # used when neither --editor, VISUAL nor EDITOR apply
# case_insensitive: false
#
# repositories:             # registered after the built-in ecosystem probes
#   - label: node
#     paths: [\"/usr/local/lib/node_modules\"]
#     kind: nested          # flat | library | nested
#     reject: { regex: '\\.cache$' }
#
# deactivate: []

activate: [ruby, gem]
";

/// Write the starter config to `path`, creating parent directories.
/// Refuses to overwrite unless `force` is set.
pub fn write_starter(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!("{path:?} already exists (use --force to overwrite)");
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {parent:?}"))?;
    }
    std::fs::write(path, STARTER).with_context(|| format!("Failed to write {path:?}"))?;
    Ok(())
}
