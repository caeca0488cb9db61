//! The repository registry: label → ordered repositories, plus the active
//! label set.
//!
//! The registry is built once at startup (ecosystem bootstrap, then the
//! user config file) and only ever grows. Labels iterate in registration
//! order so search results are reproducible.

use crate::repository::{Repository, RepositoryOptions};
use indexmap::IndexMap;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Default)]
pub struct Registry {
    repositories: IndexMap<String, Vec<Box<dyn Repository>>>,
    active: HashSet<String>,
}

impl Registry {
    pub fn new() -> Self {
        Registry::default()
    }

    /// Register a repository under `label`.
    ///
    /// The path is resolved to an absolute form and the repository is
    /// appended to the label's list, which is created on first use.
    /// Repeated adds of the same (label, path) accumulate duplicate
    /// entries; duplicates only duplicate scan results.
    pub fn add(
        &mut self,
        label: impl Into<String>,
        path: impl Into<PathBuf>,
        options: RepositoryOptions,
    ) {
        let label = label.into();
        let root = absolute(path.into());
        let repository = options.build(label.clone(), root);
        self.add_repository(label, repository);
    }

    /// Register an already-constructed repository under `label`. This is
    /// the seam for embedders with their own [`Repository`] variants.
    pub fn add_repository(&mut self, label: impl Into<String>, repository: Box<dyn Repository>) {
        let label = label.into();
        debug!("Registering {:?} repository at {:?}", label, repository.root());
        // Explicit get-or-create: only adding may create a label's list.
        self.repositories.entry(label).or_default().push(repository);
    }

    /// Register one repository per path, in order, with the same options.
    pub fn add_all<P: Into<PathBuf> + Clone>(
        &mut self,
        label: &str,
        paths: &[P],
        options: &RepositoryOptions,
    ) {
        for path in paths {
            self.add(label, path.clone(), options.clone());
        }
    }

    /// Include `label` in the search scope. Idempotent, and legal for
    /// labels with no repositories yet.
    pub fn activate(&mut self, label: impl Into<String>) {
        self.active.insert(label.into());
    }

    /// Remove `label` from the search scope. Idempotent.
    pub fn deactivate(&mut self, label: &str) {
        self.active.remove(label);
    }

    pub fn is_active(&self, label: &str) -> bool {
        self.active.contains(label)
    }

    /// The currently active labels, in no particular order.
    pub fn active(&self) -> impl Iterator<Item = &str> {
        self.active.iter().map(String::as_str)
    }

    /// Registered labels in registration order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.repositories.keys().map(String::as_str)
    }

    /// The repositories registered under `label`, in insertion order.
    /// Querying never creates an entry.
    pub fn repositories(&self, label: &str) -> &[Box<dyn Repository>] {
        self.repositories
            .get(label)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// All (label, repositories) pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Box<dyn Repository>])> {
        self.repositories
            .iter()
            .map(|(label, repos)| (label.as_str(), repos.as_slice()))
    }
}

/// Expand a leading `~` and resolve relative paths against the current
/// directory. No symlink resolution.
fn absolute(path: PathBuf) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(dirs) = directories::BaseDirs::new() {
            return dirs.home_dir().join(rest);
        }
    }
    if path.is_absolute() {
        path
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(&path))
            .unwrap_or(path)
    }
}
