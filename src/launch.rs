//! Launch coordination: resolve what to open and which editor opens it.
//!
//! Editor resolution is pure; the process environment is read once in
//! `main` and passed in here as parameters.

use crate::repository::Package;
use crate::{QuarryError, Result};
use std::path::PathBuf;
use std::process::{Command, ExitStatus};
use tracing::{debug, info};

/// Something the launcher can open: a package from a search, or a literal
/// filesystem path.
#[derive(Debug, Clone)]
pub enum LaunchTarget {
    Path(PathBuf),
    Package(Package),
}

/// The paths a target resolves to. A literal path resolves to itself; a
/// package resolves to exactly its own path list.
pub fn resolve_paths(target: &LaunchTarget) -> Vec<PathBuf> {
    match target {
        LaunchTarget::Path(path) => vec![path.clone()],
        LaunchTarget::Package(package) => package.paths.clone(),
    }
}

/// A tokenized editor invocation: the command word plus its option words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCommand {
    pub program: String,
    pub options: Vec<String>,
}

impl EditorCommand {
    /// Tokenize an editor string such as `mate -w` or `code --wait`.
    ///
    /// Quoted segments hold together; on unbalanced quoting the string
    /// degrades to plain whitespace splitting.
    fn parse(raw: &str) -> Result<Self> {
        let tokens = shell_words::split(raw).unwrap_or_else(|_| {
            debug!("Editor string {:?} has unbalanced quoting, splitting on whitespace", raw);
            raw.split_whitespace().map(String::from).collect()
        });
        let mut tokens = tokens.into_iter();
        let program = tokens
            .next()
            .ok_or_else(|| QuarryError::Editor(format!("{raw:?} is not a command")))?;
        Ok(EditorCommand {
            program,
            options: tokens.collect(),
        })
    }
}

/// Pick the editor to use. Precedence, highest first: explicit argument,
/// configured default, `VISUAL`, `EDITOR`. The first present source wins;
/// an empty or whitespace winner is a configuration error, not a reason
/// to fall through.
pub fn resolve_editor(
    explicit: Option<&str>,
    configured: Option<&str>,
    visual: Option<&str>,
    editor: Option<&str>,
) -> Result<EditorCommand> {
    let chosen = explicit.or(configured).or(visual).or(editor);
    match chosen {
        Some(raw) if !raw.trim().is_empty() => EditorCommand::parse(raw),
        Some(_) => Err(QuarryError::Editor("editor is set but blank".to_string())),
        None => Err(QuarryError::Editor("nothing configured".to_string())),
    }
}

/// Spawn the editor on the resolved paths and wait for it to exit. The
/// paths are appended after the editor's own options.
pub fn launch(editor: &EditorCommand, paths: &[PathBuf]) -> Result<ExitStatus> {
    info!("Launching {} with {} paths", editor.program, paths.len());
    Command::new(&editor.program)
        .args(&editor.options)
        .args(paths)
        .status()
        .map_err(|err| QuarryError::Launch(format!("{}: {}", editor.program, err)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_path_resolves_to_itself() {
        let target = LaunchTarget::Path(PathBuf::from("/tmp/notes.txt"));
        assert_eq!(resolve_paths(&target), vec![PathBuf::from("/tmp/notes.txt")]);
    }

    #[test]
    fn test_package_resolves_to_its_own_paths() {
        let package = Package::new(
            "ruby",
            "json",
            vec![PathBuf::from("/lib/json.rb"), PathBuf::from("/lib/json")],
        );
        let target = LaunchTarget::Package(package.clone());
        assert_eq!(resolve_paths(&target), package.paths);
    }

    #[test]
    fn test_editor_with_options_is_tokenized() {
        let editor = resolve_editor(None, None, None, Some("vim -p")).unwrap();
        assert_eq!(editor.program, "vim");
        assert_eq!(editor.options, vec!["-p"]);
    }

    #[test]
    fn test_quoted_arguments_hold_together() {
        let editor = resolve_editor(Some("myeditor --title 'two words'"), None, None, None).unwrap();
        assert_eq!(editor.options, vec!["--title", "two words"]);
    }

    #[test]
    fn test_explicit_beats_everything() {
        let editor = resolve_editor(Some("nano"), Some("mate"), Some("vi"), Some("ed")).unwrap();
        assert_eq!(editor.program, "nano");
    }

    #[test]
    fn test_configured_beats_environment() {
        let editor = resolve_editor(None, Some("mate -w"), Some("vi"), Some("ed")).unwrap();
        assert_eq!(editor.program, "mate");
    }

    #[test]
    fn test_visual_beats_editor() {
        let editor = resolve_editor(None, None, Some("vi"), Some("ed")).unwrap();
        assert_eq!(editor.program, "vi");
    }

    #[test]
    fn test_no_source_is_a_configuration_error() {
        let err = resolve_editor(None, None, None, None).unwrap_err();
        assert!(matches!(err, QuarryError::Editor(_)));
    }

    #[test]
    fn test_blank_editor_is_a_configuration_error() {
        let err = resolve_editor(None, None, None, Some("")).unwrap_err();
        assert!(matches!(err, QuarryError::Editor(_)));

        let err = resolve_editor(None, None, None, Some("   ")).unwrap_err();
        assert!(matches!(err, QuarryError::Editor(_)));
    }

    #[test]
    fn test_blank_winner_does_not_fall_through() {
        // VISUAL is set but empty; EDITOR would work. The original tool
        // treats the set-but-blank value as the winner and errors out.
        let err = resolve_editor(None, None, Some(""), Some("vim")).unwrap_err();
        assert!(matches!(err, QuarryError::Editor(_)));
    }

    #[test]
    fn test_launch_failure_is_reported() {
        let editor = EditorCommand {
            program: "quarry-test-editor-that-does-not-exist".to_string(),
            options: vec![],
        };
        let err = launch(&editor, &[PathBuf::from("/tmp")]).unwrap_err();
        assert!(matches!(err, QuarryError::Launch(_)));
    }
}
