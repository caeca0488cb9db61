//! Ecosystem bootstrap: probe installed language runtimes for their
//! library paths and seed the registry.
//!
//! Every probe is best-effort. A runtime that is missing, fails, or
//! prints nothing contributes no repositories; it never aborts startup.

use crate::registry::Registry;
use crate::repository::{PathFilter, RepositoryKind, RepositoryOptions};
use std::process::Command;
use tracing::debug;

/// Probe the machine and register everything found, then activate the
/// default labels (`ruby` and `gem`). The user config file is applied
/// after this and can activate or deactivate whatever it likes.
pub fn seed(registry: &mut Registry) {
    seed_ruby(registry);
    seed_perl(registry);
    seed_python(registry);
    seed_node(registry);

    registry.activate("ruby");
    registry.activate("gem");
}

fn library() -> RepositoryOptions {
    RepositoryOptions {
        kind: RepositoryKind::Library,
        ..Default::default()
    }
}

/// Ruby standard library and installed gems, from the interpreter's own
/// load path. The first output line is the platform triple, used to
/// reject binary directories.
fn seed_ruby(registry: &mut Registry) {
    let Some(lines) = capture_lines("ruby", &["-e", "puts RUBY_PLATFORM", "-e", "puts $LOAD_PATH"])
    else {
        return;
    };
    let Some((platform, paths)) = lines.split_first() else {
        return;
    };

    for path in ruby_library_paths(platform, paths) {
        registry.add("ruby", path, library());
    }
    for root in gem_roots(paths) {
        registry.add("gem", root, RepositoryOptions::default());
    }
}

fn ruby_library_paths<'a>(platform: &str, paths: &'a [String]) -> Vec<&'a str> {
    paths
        .iter()
        .map(String::as_str)
        .filter(|path| path.contains("lib/ruby") && !path.ends_with(platform))
        .collect()
}

/// Gem homes are found by truncating load-path entries after their last
/// `/gems/` segment; several gems share one home, so the roots are
/// deduplicated in order.
fn gem_roots(paths: &[String]) -> Vec<String> {
    let mut roots: Vec<String> = Vec::new();
    for path in paths {
        let Some(idx) = path.rfind("/gems/") else {
            continue;
        };
        let root = path[..idx + "/gems/".len()].to_string();
        if !roots.contains(&root) {
            roots.push(root);
        }
    }
    roots
}

fn seed_perl(registry: &mut Registry) {
    let Some(lines) = capture_lines("perl", &["-e", r#"print join("\n", @INC)"#]) else {
        return;
    };
    for path in lines.iter().filter(|path| path.as_str() != ".") {
        registry.add("perl", path, library());
    }
}

fn seed_python(registry: &mut Registry) {
    let args = &["-c", r#"import sys; print("\n".join(sys.path))"#];
    let Some(lines) =
        capture_lines("python3", args).or_else(|| capture_lines("python", args))
    else {
        return;
    };

    for path in python_library_paths(&lines) {
        let options = RepositoryOptions {
            kind: RepositoryKind::Library,
            reject: PathFilter::regex(r"\.py[oc]$|\.egg-info$").ok(),
            ..Default::default()
        };
        registry.add("python", path, options);
    }
}

fn python_library_paths(paths: &[String]) -> Vec<&str> {
    paths
        .iter()
        .map(String::as_str)
        .filter(|path| {
            *path != "." && !path.ends_with(".zip") && !path.ends_with("lib-dynload")
        })
        .collect()
}

/// npm reports a single global module root; scoped packages make it a
/// nested layout.
fn seed_node(registry: &mut Registry) {
    let Some(lines) = capture_lines("npm", &["root", "-g"]) else {
        return;
    };
    let Some(root) = lines.first() else {
        return;
    };
    let options = RepositoryOptions {
        kind: RepositoryKind::Nested,
        ..Default::default()
    };
    registry.add("node", root, options);
}

/// Run a program and collect its non-empty, trimmed stdout lines.
/// Returns None when the program is missing or exits nonzero.
fn capture_lines(program: &str, args: &[&str]) -> Option<Vec<String>> {
    let output = match Command::new(program).args(args).output() {
        Ok(output) => output,
        Err(err) => {
            debug!("{} not available: {}", program, err);
            return None;
        }
    };
    if !output.status.success() {
        debug!("{} exited with {}", program, output.status);
        return None;
    }
    Some(
        String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_ruby_paths_keep_lib_ruby_and_drop_binary_dirs() {
        let paths = lines(&[
            "/usr/lib/ruby/3.2.0",
            "/usr/lib/ruby/3.2.0/x86_64-linux",
            "/home/dev/projects/tool/lib",
        ]);
        let kept = ruby_library_paths("x86_64-linux", &paths);
        assert_eq!(kept, vec!["/usr/lib/ruby/3.2.0"]);
    }

    #[test]
    fn test_gem_roots_truncate_and_deduplicate() {
        let paths = lines(&[
            "/usr/lib/ruby/gems/3.2.0/gems/rake-13.0/lib",
            "/usr/lib/ruby/gems/3.2.0/gems/json-2.6/lib",
            "/usr/lib/ruby/3.2.0",
        ]);
        let roots = gem_roots(&paths);
        assert_eq!(roots, vec!["/usr/lib/ruby/gems/3.2.0/gems/"]);
    }

    #[test]
    fn test_python_paths_skip_archives_and_dynload() {
        let paths = lines(&[
            "/usr/lib/python311.zip",
            "/usr/lib/python3.11",
            "/usr/lib/python3.11/lib-dynload",
            "/usr/lib/python3.11/site-packages",
        ]);
        let kept = python_library_paths(&paths);
        assert_eq!(
            kept,
            vec!["/usr/lib/python3.11", "/usr/lib/python3.11/site-packages"]
        );
    }

    #[test]
    fn test_seed_activates_the_default_labels() {
        let mut registry = Registry::new();
        seed(&mut registry);
        assert!(registry.is_active("ruby"));
        assert!(registry.is_active("gem"));
    }
}
