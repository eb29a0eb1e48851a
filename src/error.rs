use std::path::PathBuf;

use sanscript_core::{OptionsError, SchemeConfigError};

#[derive(Debug, thiserror::Error)]
pub enum TransliterateError {
    #[error("unknown scheme: {0}")]
    UnknownScheme(String),
    #[error("invalid option: {0}")]
    InvalidOption(#[from] OptionsError),
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid scheme {origin}: {source}")]
    Config {
        origin: String,
        source: SchemeConfigError,
    },
}
