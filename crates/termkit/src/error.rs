//! Error types for Termkit
//!
//! This module provides error types for the terminal session with the following design goals:
//! - Human-readable error messages that can be appended to the output log verbatim
//! - Clear categorization for programmatic handling
//!
//! None of these errors are fatal to a session. The worst outcome of any of
//! them is a logged line and an unchanged working directory.

use crate::limits::LimitExceeded;
use thiserror::Error;

/// Result type alias using Termkit's Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Termkit error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed quoting in an input line.
    #[error("parse error: {0}")]
    Parse(String),

    /// A path could not be resolved to the requested node.
    #[error(transparent)]
    Path(#[from] PathError),

    /// No command is registered under the keyword.
    #[error("Couldn't find command \"{0}\".")]
    CommandNotFound(String),

    /// A command needs a host handler (`on_exit`, `redirect`) that was not configured.
    #[error("{0}")]
    Configuration(String),

    /// A command was invoked with the wrong arguments.
    #[error("{0}")]
    Usage(String),

    /// Resource limit exceeded.
    #[error("resource limit exceeded: {0}")]
    ResourceLimit(#[from] LimitExceeded),
}

impl Error {
    /// Create a usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

/// Failures while resolving a directory or file path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// `..` was applied at the root.
    #[error("Root directory has no parent directory.")]
    RootHasNoParent,

    /// A path segment named no child of the current directory.
    #[error("Could not find directory \"{0}\".")]
    DirectoryNotFound(String),

    /// A directory segment named a file.
    #[error("'{0}' is a file.")]
    IsAFile(String),

    /// The path has no file name component.
    #[error("Malformed file path \"{0}\".")]
    Malformed(String),

    /// The directory exists but holds no file with the name.
    #[error("Could not find file with name '{name}' in {directory}")]
    FileNotFound { name: String, directory: String },

    #[error("'{0}' is not a text file.")]
    NotATextFile(String),

    #[error("'{0}' is not an executable.")]
    NotAnExecutable(String),
}
