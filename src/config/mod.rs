//! Configuration: platform paths, the declarative config file, and the
//! ecosystem bootstrap that seeds the registry.

pub mod bootstrap;
pub mod file;

pub use file::ConfigFile;

use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolve where the config file lives. Precedence: the `--config` flag,
/// then `QUARRY_CONFIG`, then `config.yml` in the platform config
/// directory. `None` only when the platform cannot report a home
/// directory.
pub fn config_file_path(flag: Option<&Path>, env_override: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = flag {
        return Some(path.to_path_buf());
    }
    if let Some(path) = env_override {
        return Some(path.to_path_buf());
    }
    ProjectDirs::from("", "", "quarry").map(|dirs| dirs.config_dir().join("config.yml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_beats_environment_override() {
        let path = config_file_path(
            Some(Path::new("/flag/config.yml")),
            Some(Path::new("/env/config.yml")),
        );
        assert_eq!(path, Some(PathBuf::from("/flag/config.yml")));
    }

    #[test]
    fn test_environment_override_beats_platform_default() {
        let path = config_file_path(None, Some(Path::new("/env/config.yml")));
        assert_eq!(path, Some(PathBuf::from("/env/config.yml")));
    }

    #[test]
    fn test_platform_default_ends_with_config_yml() {
        if let Some(path) = config_file_path(None, None) {
            assert!(path.ends_with("config.yml"));
        }
    }
}
