//! Unified application error type.
//! All modules (cli, config, utils) return AppError to keep the error
//! handling consistent and easy to manage. The schedule engine itself
//! never returns errors: malformed times degrade to "absent" (see core).

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Profile errors
    // ---------------------------
    #[error("Unknown shift profile: {0}")]
    UnknownProfile(String),

    #[error("Invalid shift profile: {0}")]
    InvalidProfile(String),

    // ---------------------------
    // Edit validation
    // ---------------------------
    #[error("Lunch return rejected: {0}")]
    LunchRejected(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
