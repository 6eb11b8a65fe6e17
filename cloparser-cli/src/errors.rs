//! Error types for the clo-scan tool

use std::path::PathBuf;
use thiserror::Error;

use cloparser::CloError;

/// Errors that can occur while running clo-scan
#[derive(Debug, Error)]
pub enum CliError {
    /// Scanning the tokens failed (strict mode, I/O)
    #[error(transparent)]
    Scan(#[from] CloError),

    /// Option spec file not found
    #[error("Option spec file not found: {0}")]
    SpecFileNotFound(PathBuf),

    /// Option spec file is not valid YAML
    #[error("Failed to parse option spec file '{0}': {1}")]
    SpecFileParseError(PathBuf, String),

    /// Option spec file has the wrong shape
    #[error("Invalid option spec file structure: {0}")]
    InvalidSpecStructure(String),

    /// Inline option definition could not be understood
    #[error("Invalid option definition '{0}': expected 'KIND:SPELLINGS', e.g. 'int:-n --count'")]
    InvalidOptionSpec(String),

    /// Unknown value kind
    #[error("Unknown option kind '{0}': expected flag, string, int, uint, float, bool or version")]
    UnknownKind(String),

    /// Nothing to scan for
    #[error("No options defined: pass --option or --spec")]
    NoOptions,

    /// JSON rendering failed
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type for clo-scan operations
pub type CliResult<T> = Result<T, CliError>;
