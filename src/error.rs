use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuarryError {
    #[error("No usable editor: {0}. Set VISUAL or EDITOR, add `editor:` to the config file, or pass --editor")]
    Editor(String),

    #[error("Failed to launch editor: {0}")]
    Launch(String),

    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    #[error("Invalid regex: {0}")]
    Regex(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, QuarryError>;
