use std::path::PathBuf;

use thiserror::Error;

/// Every way a scaffolding step can fail.
///
/// All variants end the run the same way: `cli::run` logs them and exits
/// with code 1. Nothing is retried or rolled back.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// An external command could not be spawned or exited non-zero.
    #[error("Failed to execute {command}: {detail}")]
    Command {
        /// Rendered command line
        command: String,
        /// Spawn error or exit status
        detail: String,
    },

    /// The git library refused to create the repository.
    #[error("Failed to initialize git repository at {path}: {detail}")]
    Git {
        /// Repository root
        path: PathBuf,
        /// Message reported by libgit2
        detail: String,
    },

    /// Writing a generated file failed.
    #[error("Failed to write {path}: {source}")]
    Write {
        /// Target file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The invoking directory could not be resolved.
    #[error("Failed to resolve current directory: {source}")]
    WorkingDirectory {
        #[source]
        source: std::io::Error,
    },
}

impl ScaffoldError {
    pub fn command(command: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Command {
            command: command.into(),
            detail: detail.into(),
        }
    }

    pub fn git(path: impl Into<PathBuf>, err: &git2::Error) -> Self {
        Self::Git {
            path: path.into(),
            detail: err.message().to_string(),
        }
    }
}

pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;
