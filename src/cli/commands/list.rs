use super::{apply_repo_override, CommandHandler, CommandResult, Context};
use crate::{search, Result};
use anyhow::Context as _;

/// Handler for the `list` command: print matches without launching.
pub struct ListCommand {
    pub terms: Vec<String>,
    pub repos: Vec<String>,
    pub format: String,
}

impl ListCommand {
    pub fn new(terms: Vec<String>, repos: Vec<String>, format: String) -> Self {
        Self {
            terms,
            repos,
            format,
        }
    }
}

impl CommandHandler for ListCommand {
    fn execute(&self, ctx: &mut Context) -> Result<CommandResult> {
        apply_repo_override(&mut ctx.registry, &self.repos);

        let packages = search::find(&ctx.registry, &self.terms, ctx.config.case_insensitive);

        match self.format.as_str() {
            "json" => {
                let rendered = serde_json::to_string_pretty(&packages)
                    .context("Failed to render packages as JSON")?;
                println!("{rendered}");
            }
            _ => {
                for package in &packages {
                    for path in &package.paths {
                        println!("{:<8} {:<24} {}", package.label, package.name, path.display());
                    }
                }
            }
        }

        Ok(CommandResult::Success(None))
    }

    fn name(&self) -> &'static str {
        "list"
    }
}
