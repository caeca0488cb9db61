pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Quarry: find installed packages and open them in your editor
#[derive(Parser)]
#[command(name = "qy", version)]
#[command(about = "Find installed packages across language ecosystems and open them in your editor")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level written to stderr
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search active repositories and open the chosen package
    Open {
        /// Search terms, joined into a single glob
        #[arg(required = true)]
        terms: Vec<String>,

        /// Editor command, overriding the configured default and VISUAL/EDITOR
        #[arg(short, long)]
        editor: Option<String>,

        /// Search only these labels for this invocation
        #[arg(short = 'r', long = "repo")]
        repos: Vec<String>,

        /// Print the matched paths instead of launching the editor
        #[arg(long)]
        print: bool,
    },

    /// List matching packages without launching anything
    List {
        /// Search terms; empty lists everything
        terms: Vec<String>,

        /// Search only these labels for this invocation
        #[arg(short = 'r', long = "repo")]
        repos: Vec<String>,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Show registered labels, their roots, and activation state
    Labels,

    /// Write a starter configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Open { .. } => "open",
            Commands::List { .. } => "list",
            Commands::Labels => "labels",
            Commands::Init { .. } => "init",
        }
    }
}

/// Log levels
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
