use super::{apply_repo_override, CommandHandler, CommandResult, Context};
use crate::launch::{self, LaunchTarget};
use crate::repository::Package;
use crate::{search, Result};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Handler for the `open` command: search, disambiguate, launch.
pub struct OpenCommand {
    pub terms: Vec<String>,
    pub editor: Option<String>,
    pub repos: Vec<String>,
    pub print: bool,
}

impl OpenCommand {
    pub fn new(terms: Vec<String>, editor: Option<String>, repos: Vec<String>, print: bool) -> Self {
        Self {
            terms,
            editor,
            repos,
            print,
        }
    }
}

impl CommandHandler for OpenCommand {
    fn execute(&self, ctx: &mut Context) -> Result<CommandResult> {
        apply_repo_override(&mut ctx.registry, &self.repos);

        // A single term naming an existing path opens directly, no search.
        let literal = match self.terms.as_slice() {
            [term] if Path::new(term).exists() => Some(PathBuf::from(term)),
            _ => None,
        };

        let target = match literal {
            Some(path) => LaunchTarget::Path(path),
            None => {
                let mut packages =
                    search::find(&ctx.registry, &self.terms, ctx.config.case_insensitive);
                match packages.len() {
                    0 => {
                        return Ok(CommandResult::Error(format!(
                            "No packages match '{}'",
                            self.terms.join(" ")
                        )))
                    }
                    1 => LaunchTarget::Package(packages.remove(0)),
                    _ => match choose(&packages)? {
                        Some(index) => LaunchTarget::Package(packages.remove(index)),
                        None => return Ok(CommandResult::Error("Nothing selected".to_string())),
                    },
                }
            }
        };

        let paths = launch::resolve_paths(&target);

        if self.print {
            for path in &paths {
                println!("{}", path.display());
            }
            return Ok(CommandResult::Success(None));
        }

        let editor = launch::resolve_editor(
            self.editor.as_deref(),
            ctx.config.editor.as_deref(),
            ctx.visual.as_deref(),
            ctx.editor.as_deref(),
        )?;
        let status = launch::launch(&editor, &paths)?;
        if status.success() {
            Ok(CommandResult::Success(None))
        } else {
            Ok(CommandResult::Error(format!(
                "{} exited with {}",
                editor.program, status
            )))
        }
    }

    fn name(&self) -> &'static str {
        "open"
    }
}

/// Numbered chooser for ambiguous matches. Returns the picked index, or
/// None on empty or unparseable input.
fn choose(packages: &[Package]) -> Result<Option<usize>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (index, package) in packages.iter().enumerate() {
        writeln!(out, "{:>3}. {}", index + 1, package)?;
    }
    write!(out, "Open which package? ")?;
    out.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=packages.len()).contains(n))
        .map(|n| n - 1))
}
