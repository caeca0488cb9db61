use super::{CommandHandler, CommandResult, Context};
use crate::config::file;
use crate::Result;

/// Handler for the `init` command: write a starter config file.
pub struct InitCommand {
    pub force: bool,
}

impl InitCommand {
    pub fn new(force: bool) -> Self {
        Self { force }
    }
}

impl CommandHandler for InitCommand {
    fn execute(&self, ctx: &mut Context) -> Result<CommandResult> {
        let Some(path) = ctx.config_path.as_deref() else {
            return Ok(CommandResult::Error(
                "Could not determine a configuration directory".to_string(),
            ));
        };

        match file::write_starter(path, self.force) {
            Ok(()) => Ok(CommandResult::Success(Some(format!(
                "Wrote {}",
                path.display()
            )))),
            Err(err) => Ok(CommandResult::Error(format!("{err:#}"))),
        }
    }

    fn name(&self) -> &'static str {
        "init"
    }
}
