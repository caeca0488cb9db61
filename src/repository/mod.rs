//! Repositories: scanning strategies bound to one root location
//!
//! A repository turns a compiled [`Pattern`] into the packages under its
//! root that match it. The search engine only relies on the [`Repository`]
//! trait; the concrete variants each understand one ecosystem's directory
//! layout.

pub mod filter;

mod flat;
mod library;
mod nested;

pub use filter::PathFilter;
pub use flat::FlatRepository;
pub use library::LibraryRepository;
pub use nested::NestedRepository;

use crate::pattern::Pattern;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// A discovered package: a name plus the filesystem paths to open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Package {
    /// Label of the repository that produced this package.
    pub label: String,
    /// Package name, as matched against the search pattern.
    pub name: String,
    /// One or more paths to hand to the editor.
    pub paths: Vec<PathBuf>,
}

impl Package {
    pub fn new(
        label: impl Into<String>,
        name: impl Into<String>,
        paths: Vec<PathBuf>,
    ) -> Self {
        Package {
            label: label.into(),
            name: name.into(),
            paths,
        }
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.label)
    }
}

/// A scanning strategy rooted at one location.
///
/// Implementations must degrade gracefully: an unreadable root yields an
/// empty result, never an error.
pub trait Repository: fmt::Debug {
    /// The label this repository was registered under.
    fn label(&self) -> &str;

    /// The root directory this repository scans.
    fn root(&self) -> &Path;

    /// Packages under the root whose name matches the pattern.
    fn scan(&self, pattern: &Pattern) -> Vec<Package>;
}

/// The concrete scanning strategy a repository uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepositoryKind {
    /// One package per immediate child of the root.
    #[default]
    Flat,
    /// Children sharing a stem merge into one package (stdlib layouts
    /// where `json.rb` and `json/` belong together).
    Library,
    /// One extra level for namespaced children (`@scope/name`).
    Nested,
}

/// Options accepted when registering a repository.
#[derive(Debug, Clone, Default)]
pub struct RepositoryOptions {
    pub kind: RepositoryKind,
    pub accept: Option<PathFilter>,
    pub reject: Option<PathFilter>,
}

impl RepositoryOptions {
    /// Construct the repository variant named by `kind`.
    pub fn build(self, label: String, root: PathBuf) -> Box<dyn Repository> {
        match self.kind {
            RepositoryKind::Flat => {
                Box::new(FlatRepository::new(label, root, self.accept, self.reject))
            }
            RepositoryKind::Library => {
                Box::new(LibraryRepository::new(label, root, self.accept, self.reject))
            }
            RepositoryKind::Nested => {
                Box::new(NestedRepository::new(label, root, self.accept, self.reject))
            }
        }
    }
}

/// Immediate children of `dir`, sorted by file name for deterministic scan
/// order. Hidden entries are not candidates, and unreadable entries are
/// skipped rather than propagated.
pub(crate) fn sorted_children(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.into_path()),
            Err(err) => {
                debug!("Skipping unreadable entry under {:?}: {}", dir, err);
                None
            }
        })
        .filter(|path| {
            !path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with('.'))
        })
        .collect()
}

/// File name of a candidate path as UTF-8, if it has one.
pub(crate) fn file_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|name| name.to_str())
}
