//! Error types for git status input and git invocations
//!
//! Neither error ever reaches the user: a prompt must always render, so both
//! degrade to "no version-control context" at the part builder.

use std::fmt;

/// Failure to turn porcelain status text into a [`StatusRecord`].
///
/// [`StatusRecord`]: super::StatusRecord
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusError {
    /// No non-blank line in the input, typically "not inside a repository"
    Empty,
    /// A count field that isn't a non-negative integer
    InvalidCount { field: &'static str, value: String },
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusError::Empty => write!(
                f,
                "No git porcelain information found; pass the output of \
                 `git status --porcelain=v2 --show-stash --branch --ahead-behind` \
                 via --git-porcelain"
            ),
            StatusError::InvalidCount { field, value } => {
                write!(f, "Invalid {field} count in git status: '{value}'")
            }
        }
    }
}

impl std::error::Error for StatusError {}

/// Failure running git itself.
#[derive(Debug)]
pub enum GitError {
    /// git couldn't be spawned, or exited non-zero (message is stderr)
    CommandFailed(String),
    /// git succeeded but printed something unexpected
    ParseError(String),
}

impl fmt::Display for GitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GitError::CommandFailed(msg) => write!(f, "git failed: {}", msg.trim()),
            GitError::ParseError(msg) => write!(f, "unexpected git output: {msg}"),
        }
    }
}

impl std::error::Error for GitError {}
