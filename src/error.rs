//! Error type for the fallible edges of the library (loading symbol dumps
//! and configuration). The conversion and inspection functions themselves
//! never fail: missing data degrades to empty or default values.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The symbol dump is not valid JSON or does not match the symbol shape.
    #[error("invalid symbol JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration file is not valid TOML.
    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Valid JSON, but neither a symbol object nor an array of them.
    #[error("expected a symbol object or an array of symbols, found {found}")]
    InvalidSymbols { found: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
