pub mod init;
pub mod labels;
pub mod list;
pub mod open;

use crate::config::ConfigFile;
use crate::registry::Registry;
use crate::Result;
use std::path::PathBuf;

/// Everything a command needs: the built registry, the loaded config, and
/// the environment values read once in `main`.
pub struct Context {
    pub registry: Registry,
    pub config: ConfigFile,
    /// Where the config file lives (or would live, for `init`).
    pub config_path: Option<PathBuf>,
    /// `VISUAL`, if set.
    pub visual: Option<String>,
    /// `EDITOR`, if set.
    pub editor: Option<String>,
}

/// Common trait for all command handlers
pub trait CommandHandler {
    /// Execute the command
    fn execute(&self, ctx: &mut Context) -> Result<CommandResult>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}

/// Command execution result
#[derive(Debug)]
pub enum CommandResult {
    /// Success with optional message
    Success(Option<String>),
    /// Error with message
    Error(String),
}

impl CommandResult {
    /// Convert to exit code
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandResult::Success(_) => 0,
            CommandResult::Error(_) => 1,
        }
    }

    /// Get message if any
    pub fn message(&self) -> Option<&str> {
        match self {
            CommandResult::Success(msg) => msg.as_deref(),
            CommandResult::Error(msg) => Some(msg),
        }
    }
}

/// `--repo` replaces the active set for this invocation: every named
/// label is activated and everything else deactivated.
pub(crate) fn apply_repo_override(registry: &mut Registry, repos: &[String]) {
    if repos.is_empty() {
        return;
    }
    let active: Vec<String> = registry.active().map(String::from).collect();
    for label in active {
        registry.deactivate(&label);
    }
    for label in repos {
        registry.activate(label.clone());
    }
}
