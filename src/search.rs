//! The search engine: a pure query over the registry.
//!
//! Iterates labels in registration order, skips inactive ones, and
//! concatenates each repository's scan results. No limit, no dedup, no
//! ranking; callers present results however they like.

use crate::pattern::Pattern;
use crate::registry::Registry;
use crate::repository::Package;
use tracing::debug;

/// Compile `terms` and search every active repository.
pub fn find<S: AsRef<str>>(
    registry: &Registry,
    terms: &[S],
    case_insensitive: bool,
) -> Vec<Package> {
    find_with_pattern(registry, &Pattern::compile(terms, case_insensitive))
}

/// Search every active repository with an already-compiled pattern.
///
/// Result order is deterministic: labels in registration order, then
/// repositories in insertion order, then scan order.
pub fn find_with_pattern(registry: &Registry, pattern: &Pattern) -> Vec<Package> {
    let mut packages = Vec::new();
    for (label, repositories) in registry.iter() {
        if !registry.is_active(label) {
            continue;
        }
        for repository in repositories {
            packages.extend(repository.scan(pattern));
        }
    }
    debug!("{} packages match {:?}", packages.len(), pattern.as_str());
    packages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::Repository;
    use std::path::{Path, PathBuf};

    /// Repository producing from a fixed name list; each name carries one
    /// synthetic path under the root.
    #[derive(Debug)]
    struct StaticRepository {
        label: String,
        root: PathBuf,
        names: Vec<String>,
    }

    impl StaticRepository {
        fn new(label: &str, names: &[&str]) -> Self {
            StaticRepository {
                label: label.to_string(),
                root: PathBuf::from("/static").join(label),
                names: names.iter().map(|n| n.to_string()).collect(),
            }
        }

        fn boxed(label: &str, names: &[&str]) -> Box<dyn Repository> {
            Box::new(Self::new(label, names))
        }
    }

    impl Repository for StaticRepository {
        fn label(&self) -> &str {
            &self.label
        }

        fn root(&self) -> &Path {
            &self.root
        }

        fn scan(&self, pattern: &Pattern) -> Vec<Package> {
            self.names
                .iter()
                .filter(|name| pattern.matches(name))
                .map(|name| Package::new(&self.label, name, vec![self.root.join(name)]))
                .collect()
        }
    }

    /// Install a static repository without touching the filesystem.
    fn install(registry: &mut Registry, label: &str, names: &[&str]) {
        registry.add_repository(label, StaticRepository::boxed(label, names));
    }

    #[test]
    fn test_find_matches_names_starting_with_the_term() {
        let mut registry = Registry::new();
        install(&mut registry, "demo", &["alpha", "beta", "gamma"]);
        registry.activate("demo");

        let packages = find(&registry, &["a"], false);

        let names: Vec<&str> = packages.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["alpha"]);
    }

    #[test]
    fn test_inactive_labels_are_skipped() {
        let mut registry = Registry::new();
        install(&mut registry, "demo", &["alpha"]);
        install(&mut registry, "other", &["alps"]);
        registry.activate("demo");

        let packages = find(&registry, &["al"], false);

        assert_eq!(packages.len(), 1);
        assert_eq!(packages[0].label, "demo");
    }

    #[test]
    fn test_nothing_active_yields_nothing() {
        let mut registry = Registry::new();
        install(&mut registry, "demo", &["alpha", "beta"]);

        assert!(find(&registry, &[] as &[&str], false).is_empty());
    }

    #[test]
    fn test_results_follow_registration_order() {
        let mut registry = Registry::new();
        install(&mut registry, "zeta", &["pkg-z"]);
        install(&mut registry, "alpha", &["pkg-a"]);
        registry.activate("zeta");
        registry.activate("alpha");

        let packages = find(&registry, &["pkg"], false);

        let labels: Vec<&str> = packages.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_repositories_within_a_label_keep_insertion_order() {
        let mut registry = Registry::new();
        install(&mut registry, "gem", &["rake-13.0"]);
        install(&mut registry, "gem", &["rake-12.3"]);
        registry.activate("gem");

        let packages = find(&registry, &["rake"], false);

        let names: Vec<&str> = packages.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["rake-13.0", "rake-12.3"]);
    }

    #[test]
    fn test_duplicate_repositories_duplicate_results() {
        let mut registry = Registry::new();
        install(&mut registry, "gem", &["rake"]);
        install(&mut registry, "gem", &["rake"]);
        registry.activate("gem");

        assert_eq!(find(&registry, &["rake"], false).len(), 2);
    }
}
