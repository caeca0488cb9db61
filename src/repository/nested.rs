//! Nested repository: one extra level for namespaced package layouts.
//!
//! npm's global `node_modules` mixes plain packages with `@scope/`
//! namespace directories whose children are the real packages, named
//! `@scope/name`.

use super::filter::{admitted, PathFilter};
use super::{file_name, sorted_children, Package, Repository};
use crate::pattern::Pattern;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct NestedRepository {
    label: String,
    root: PathBuf,
    accept: Option<PathFilter>,
    reject: Option<PathFilter>,
}

impl NestedRepository {
    pub fn new(
        label: String,
        root: PathBuf,
        accept: Option<PathFilter>,
        reject: Option<PathFilter>,
    ) -> Self {
        NestedRepository {
            label,
            root,
            accept,
            reject,
        }
    }

    fn admit_and_match(&self, pattern: &Pattern, name: &str, path: &Path) -> Option<Package> {
        if !admitted(
            self.accept.as_ref(),
            self.reject.as_ref(),
            &path.to_string_lossy(),
        ) {
            return None;
        }
        pattern
            .matches(name)
            .then(|| Package::new(&self.label, name, vec![path.to_path_buf()]))
    }
}

impl Repository for NestedRepository {
    fn label(&self) -> &str {
        &self.label
    }

    fn root(&self) -> &Path {
        &self.root
    }

    fn scan(&self, pattern: &Pattern) -> Vec<Package> {
        let mut packages = Vec::new();
        for path in sorted_children(&self.root) {
            let Some(name) = file_name(&path) else {
                continue;
            };
            if name.starts_with('@') && path.is_dir() {
                for scoped in sorted_children(&path) {
                    let Some(child) = file_name(&scoped) else {
                        continue;
                    };
                    let qualified = format!("{name}/{child}");
                    packages.extend(self.admit_and_match(pattern, &qualified, &scoped));
                }
            } else {
                packages.extend(self.admit_and_match(pattern, name, &path));
            }
        }
        packages
    }
}
