//! Flat directory repository: every immediate child is a candidate package.

use super::filter::{admitted, PathFilter};
use super::{file_name, sorted_children, Package, Repository};
use crate::pattern::Pattern;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The default repository variant. Gem directories, `node_modules`-style
/// folders and most site-library layouts are flat: one directory (or file)
/// per package.
#[derive(Debug)]
pub struct FlatRepository {
    label: String,
    root: PathBuf,
    accept: Option<PathFilter>,
    reject: Option<PathFilter>,
}

impl FlatRepository {
    pub fn new(
        label: String,
        root: PathBuf,
        accept: Option<PathFilter>,
        reject: Option<PathFilter>,
    ) -> Self {
        FlatRepository {
            label,
            root,
            accept,
            reject,
        }
    }
}

impl Repository for FlatRepository {
    fn label(&self) -> &str {
        &self.label
    }

    fn root(&self) -> &Path {
        &self.root
    }

    fn scan(&self, pattern: &Pattern) -> Vec<Package> {
        let mut packages = Vec::new();
        for path in sorted_children(&self.root) {
            if !admitted(
                self.accept.as_ref(),
                self.reject.as_ref(),
                &path.to_string_lossy(),
            ) {
                continue;
            }
            let Some(name) = file_name(&path) else {
                continue;
            };
            if pattern.matches(name) {
                debug!("Matched {:?} in {:?}", name, self.root);
                packages.push(Package::new(&self.label, name, vec![path.clone()]));
            }
        }
        packages
    }
}
