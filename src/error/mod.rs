//! Error types and handling for iconseek
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//! Resolution failures deliberately distinguish their three causes (group name
//! unknown, group has no icon assigned, icon record dangling) so callers can
//! tell a bad query from a gap in the data export.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for iconseek operations
#[derive(Error, Diagnostic, Debug)]
pub enum IconseekError {
    // Data file errors
    #[error("Failed to read data file: {path}: {reason}")]
    #[diagnostic(
        code(iconseek::fs::read_failed),
        help("Check that the path exists and is readable")
    )]
    FileRead { path: String, reason: String },

    #[error("Failed to parse data file: {path}: {reason}")]
    #[diagnostic(
        code(iconseek::sde::parse_failed),
        help("The file must be a YAML mapping of integer ids to records")
    )]
    Parse { path: String, reason: String },

    // Resolution errors
    #[error("Group '{name}' not found")]
    #[diagnostic(
        code(iconseek::resolve::group_not_found),
        help("Run 'iconseek list <PATTERN>' to search for the exact group name")
    )]
    GroupNotFound { name: String },

    #[error("Group '{name}' (id {group_id}) has no icon assigned")]
    #[diagnostic(code(iconseek::resolve::no_icon_assigned))]
    NoIconAssigned { name: String, group_id: u32 },

    #[error("Icon record {icon_id} referenced by group '{name}' is missing from the icon table")]
    #[diagnostic(
        code(iconseek::resolve::icon_record_missing),
        help("The group and icon files may come from different export versions")
    )]
    IconRecordMissing { icon_id: u32, name: String },

    // Locator errors
    #[error("Multiple files named '{name}' found: {candidates}")]
    #[diagnostic(
        code(iconseek::locate::ambiguous_match),
        help("Drop --unique to print every match")
    )]
    AmbiguousMatch { name: String, candidates: String },

    #[error("Not a directory: {path}")]
    #[diagnostic(code(iconseek::locate::not_a_directory))]
    NotADirectory { path: String },

    // CLI errors
    #[error("Missing required path: {flag}")]
    #[diagnostic(
        code(iconseek::cli::missing_path),
        help("Pass the flag or set the matching ICONSEEK_* environment variable")
    )]
    MissingPath { flag: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(iconseek::fs::io_error))]
    IoError { message: String },

    #[error("Failed to encode JSON output: {message}")]
    #[diagnostic(code(iconseek::json::encode_failed))]
    JsonEncode { message: String },
}

/// Creates a file read error
pub fn file_read(path: impl Into<String>, reason: impl Into<String>) -> IconseekError {
    IconseekError::FileRead {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a parse error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> IconseekError {
    IconseekError::Parse {
        path: path.into(),
        reason: reason.into(),
    }
}

impl From<std::io::Error> for IconseekError {
    fn from(err: std::io::Error) -> Self {
        IconseekError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for IconseekError {
    fn from(err: serde_json::Error) -> Self {
        IconseekError::JsonEncode {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, IconseekError>;
