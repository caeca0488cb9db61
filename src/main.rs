use clap::Parser;
use quarry::cli::commands::{
    init::InitCommand, labels::LabelsCommand, list::ListCommand, open::OpenCommand,
    CommandHandler, Context,
};
use quarry::cli::{Cli, Commands};
use quarry::config::{self, bootstrap, ConfigFile};
use quarry::registry::Registry;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.log_level.to_filter_directive())),
        )
        .with_writer(std::io::stderr)
        .init();

    // The process environment is read here, once; everything downstream
    // takes these as parameters.
    let visual = std::env::var("VISUAL").ok();
    let editor = std::env::var("EDITOR").ok();
    let config_env = std::env::var("QUARRY_CONFIG").ok().map(PathBuf::from);

    let config_path = config::config_file_path(cli.config.as_deref(), config_env.as_deref());
    let config = ConfigFile::load_or_default(config_path.as_deref());

    let mut registry = Registry::new();
    bootstrap::seed(&mut registry);
    config.apply(&mut registry);

    let mut ctx = Context {
        registry,
        config,
        config_path,
        visual,
        editor,
    };

    let result = match cli.command {
        Commands::Open {
            terms,
            editor,
            repos,
            print,
        } => OpenCommand::new(terms, editor, repos, print).execute(&mut ctx),
        Commands::List {
            terms,
            repos,
            format,
        } => ListCommand::new(terms, repos, format).execute(&mut ctx),
        Commands::Labels => LabelsCommand.execute(&mut ctx),
        Commands::Init { force } => InitCommand::new(force).execute(&mut ctx),
    };

    match result {
        Ok(outcome) => {
            if let Some(message) = outcome.message() {
                if outcome.exit_code() == 0 {
                    println!("{message}");
                } else {
                    eprintln!("{message}");
                }
            }
            std::process::exit(outcome.exit_code());
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
