use super::{CommandHandler, CommandResult, Context};
use crate::Result;

/// Handler for the `labels` command: show what is registered and active.
pub struct LabelsCommand;

impl CommandHandler for LabelsCommand {
    fn execute(&self, ctx: &mut Context) -> Result<CommandResult> {
        for (label, repositories) in ctx.registry.iter() {
            let marker = if ctx.registry.is_active(label) { "*" } else { " " };
            println!("{marker} {label}");
            for repository in repositories {
                println!("    {}", repository.root().display());
            }
        }

        // Activated labels with no repositories still count.
        let mut orphans: Vec<&str> = ctx
            .registry
            .active()
            .filter(|label| ctx.registry.repositories(label).is_empty())
            .collect();
        orphans.sort_unstable();
        for label in orphans {
            println!("* {label} (no repositories)");
        }

        Ok(CommandResult::Success(None))
    }

    fn name(&self) -> &'static str {
        "labels"
    }
}
