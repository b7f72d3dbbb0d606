//! Centralized error types for CVA.

use std::path::PathBuf;
use thiserror::Error;

use crate::validate::ValidationResult;

/// Main error type for CVA operations.
#[derive(Error, Debug)]
pub enum CvaError {
    #[error("invalid project name: {name}")]
    InvalidName {
        name: String,
        validation: ValidationResult,
    },

    #[error("target directory already exists: {}", .0.display())]
    TargetExists(PathBuf),

    #[error("command `{command}` exited with {}", exit_code_label(.code))]
    CommandFailed { command: String, code: Option<i32> },

    #[error("failed to spawn `{command}`: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("anchor text not found in {}: `{anchor}` (the generator's template may have changed)", .file.display())]
    MissingAnchor { file: PathBuf, anchor: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CVA operations.
pub type CvaResult<T> = Result<T, CvaError>;

impl CvaError {
    /// Create an invalid-name error from a validation report.
    pub fn invalid_name(name: impl Into<String>, validation: ValidationResult) -> Self {
        Self::InvalidName {
            name: name.into(),
            validation,
        }
    }
}

fn exit_code_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}
