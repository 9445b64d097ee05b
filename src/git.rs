//! Git status input and the optional live git queries behind `--query-git`.

use std::path::{Path, PathBuf};
use std::process::Command;

mod error;
mod status;

pub use error::{GitError, StatusError};
pub use status::{StatusRecord, VcsInfo, parse_status};

/// Arguments producing the porcelain format [`parse_status`] understands.
pub const PORCELAIN_STATUS_ARGS: &[&str] = &[
    "status",
    "--porcelain=v2",
    "--show-stash",
    "--branch",
    "--ahead-behind",
    "--untracked-files=normal",
];

/// Repository context for git queries.
///
/// Only used when the shell didn't hand us the status text itself.
///
/// ```no_run
/// use promptline::git::Repository;
///
/// let repo = Repository::at(".");
/// let porcelain = repo.porcelain_status()?;
/// # Ok::<(), promptline::git::GitError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Repository {
    path: PathBuf,
}

impl Repository {
    /// Create a repository context at the specified path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path this repository context operates on.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Porcelain v2 status text, ready for [`parse_status`].
    pub fn porcelain_status(&self) -> Result<String, GitError> {
        self.run_command(PORCELAIN_STATUS_ARGS)
    }

    /// Committer timestamp of `HEAD` in seconds since epoch.
    pub fn last_commit_time(&self) -> Result<i64, GitError> {
        let stdout = self.run_command(&["log", "-1", "--format=%ct"])?;
        parse_commit_time(&stdout)
    }

    /// Get the git directory (may be different from common-dir in worktrees).
    pub fn git_dir(&self) -> Result<PathBuf, GitError> {
        let stdout = self.run_command(&["rev-parse", "--git-dir"])?;
        let git_dir = PathBuf::from(stdout.trim());
        if git_dir.is_absolute() {
            Ok(git_dir)
        } else {
            Ok(self.path.join(git_dir))
        }
    }

    /// Operation in progress in this worktree, named the way zsh's
    /// `vcs_info` names its `%a` action.
    pub fn in_progress_action(&self) -> Result<Option<&'static str>, GitError> {
        let git_dir = self.git_dir()?;

        let action = if git_dir.join("rebase-merge").exists() {
            Some("rebase-i")
        } else if git_dir.join("rebase-apply").exists() {
            Some("rebase")
        } else if git_dir.join("MERGE_HEAD").exists() {
            Some("merge")
        } else if git_dir.join("CHERRY_PICK_HEAD").exists() {
            Some("cherry")
        } else if git_dir.join("REVERT_HEAD").exists() {
            Some("revert")
        } else if git_dir.join("BISECT_LOG").exists() {
            Some("bisect")
        } else {
            None
        };

        Ok(action)
    }

    /// Run a git command in this repository and return stdout.
    pub fn run_command(&self, args: &[&str]) -> Result<String, GitError> {
        log::debug!("$ git {} [{}]", args.join(" "), self.path.display());

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.path)
            .output()
            .map_err(|e| GitError::CommandFailed(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitError::CommandFailed(stderr.to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

fn parse_commit_time(output: &str) -> Result<i64, GitError> {
    let trimmed = output.trim();
    trimmed
        .parse()
        .map_err(|e| GitError::ParseError(format!("Failed to parse timestamp '{trimmed}': {e}")))
}
