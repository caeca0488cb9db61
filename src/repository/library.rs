//! Library repository: standard-library layouts where a package spans
//! several entries.
//!
//! In a Ruby or Python standard library the unit "json" is both `json.rb`
//! (or `json.py`) and the `json/` directory next to it. Entries sharing a
//! stem merge into a single package carrying all of their paths.

use super::filter::{admitted, PathFilter};
use super::{sorted_children, Package, Repository};
use crate::pattern::Pattern;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct LibraryRepository {
    label: String,
    root: PathBuf,
    accept: Option<PathFilter>,
    reject: Option<PathFilter>,
}

impl LibraryRepository {
    pub fn new(
        label: String,
        root: PathBuf,
        accept: Option<PathFilter>,
        reject: Option<PathFilter>,
    ) -> Self {
        LibraryRepository {
            label,
            root,
            accept,
            reject,
        }
    }
}

impl Repository for LibraryRepository {
    fn label(&self) -> &str {
        &self.label
    }

    fn root(&self) -> &Path {
        &self.root
    }

    fn scan(&self, pattern: &Pattern) -> Vec<Package> {
        // Group admitted entries by stem, preserving the sorted child
        // order, then match the pattern against each stem.
        let mut groups: IndexMap<String, Vec<PathBuf>> = IndexMap::new();
        for path in sorted_children(&self.root) {
            if !admitted(
                self.accept.as_ref(),
                self.reject.as_ref(),
                &path.to_string_lossy(),
            ) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            groups.entry(stem.to_string()).or_default().push(path);
        }

        groups
            .into_iter()
            .filter(|(name, _)| pattern.matches(name))
            .map(|(name, paths)| Package::new(&self.label, name, paths))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_entries_sharing_a_stem_merge_into_one_package() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("json.rb"), "").unwrap();
        fs::create_dir(temp_dir.path().join("json")).unwrap();

        let repo = LibraryRepository::new("ruby".into(), temp_dir.path().into(), None, None);
        let packages = repo.scan(&Pattern::compile(&["json"], false));

        assert_eq!(packages.len(), 1);
        assert_eq!(packages[0].name, "json");
        assert_eq!(
            packages[0].paths,
            vec![
                temp_dir.path().join("json"),
                temp_dir.path().join("json.rb"),
            ]
        );
    }

    #[test]
    fn test_pattern_matches_the_stem_not_the_extension() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("set.rb"), "").unwrap();

        let repo = LibraryRepository::new("ruby".into(), temp_dir.path().into(), None, None);

        assert_eq!(repo.scan(&Pattern::compile(&["set"], false)).len(), 1);
        // "set.rb" would match "set*rb*" but the stem "set" must not.
        assert!(repo.scan(&Pattern::compile(&["set", "rb"], false)).is_empty());
    }

    #[test]
    fn test_distinct_stems_stay_separate() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("uri.rb"), "").unwrap();
        fs::write(temp_dir.path().join("url.rb"), "").unwrap();

        let repo = LibraryRepository::new("ruby".into(), temp_dir.path().into(), None, None);
        let packages = repo.scan(&Pattern::compile(&["ur"], false));

        let names: Vec<&str> = packages.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["uri", "url"]);
    }

    #[test]
    fn test_rejected_entries_do_not_join_groups() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("json.py"), "").unwrap();
        fs::write(temp_dir.path().join("json.pyc"), "").unwrap();

        let reject = PathFilter::regex(r"\.py[oc]$").unwrap();
        let repo =
            LibraryRepository::new("python".into(), temp_dir.path().into(), None, Some(reject));
        let packages = repo.scan(&Pattern::compile(&["json"], false));

        assert_eq!(packages.len(), 1);
        assert_eq!(packages[0].paths, vec![temp_dir.path().join("json.py")]);
    }
}
