//! Prompt rendering for `promptline bash|left|right`.
//!
//! Everything the shell knows (exit code, git status, directory) arrives as
//! flags. Anything missing falls back to the process environment, or to
//! running git when `--query-git` is given.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use promptline::config::{PromptConfig, PromptEnv};
use promptline::display::get_terminal_width;
use promptline::git::Repository;
use promptline::layout::{bash_prompt, left_prompt, right_prompt};
use promptline::parts::{PromptInputs, PromptParts};
use promptline::styling::{Markers, NOT_FOUND};
use promptline::utils::get_now;

/// Which prompt shape to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Bash,
    Left,
    Right,
}

#[derive(Debug, Clone, Default, clap::Args)]
pub struct PromptArgs {
    /// Exit status of the previous command
    #[arg(long, value_name = "CODE", allow_hyphen_values = true)]
    pub last_exit_code: Option<String>,

    /// Directory to show instead of the current one
    #[arg(long, value_name = "PATH")]
    pub current_working_dir: Option<PathBuf>,

    /// zsh vcs_info string, e.g. `vcs:git|branch:main|action:rebase`
    #[arg(long, value_name = "INFO")]
    pub vcs_info: Option<String>,

    /// Output of `git status --porcelain=v2 --show-stash --branch --ahead-behind`
    #[arg(long, value_name = "TEXT", allow_hyphen_values = true)]
    pub git_porcelain: Option<String>,

    /// Committer time of HEAD, in seconds since epoch
    #[arg(long, value_name = "EPOCH")]
    pub time_of_last_commit: Option<String>,

    /// Run git for any status the shell didn't pass in
    #[arg(long)]
    pub query_git: bool,

    /// Terminal width, instead of asking the terminal
    #[arg(long, value_name = "COLUMNS")]
    pub width: Option<usize>,
}

/// Build the prompt text for `mode`. The caller prints it.
pub fn run(
    mode: Mode,
    args: PromptArgs,
    config: &PromptConfig,
    env: &PromptEnv,
    markers: Markers,
) -> Result<String> {
    let working_dir = match args.current_working_dir.as_deref() {
        Some(dir) => dir.to_string_lossy().into_owned(),
        None => current_dir()?,
    };

    let mut inputs = PromptInputs {
        last_exit_code: args.last_exit_code,
        working_dir,
        vcs_info: args.vcs_info,
        git_porcelain: args.git_porcelain,
        time_of_last_commit: args.time_of_last_commit,
    };
    if args.query_git && inputs.working_dir != NOT_FOUND {
        query_git(&mut inputs);
    }

    let parts = PromptParts::build(&inputs, config, env, markers, get_now());

    let prompt = match mode {
        Mode::Bash => {
            let width = args.width.unwrap_or_else(get_terminal_width);
            bash_prompt(&parts, config, width, markers)
        }
        Mode::Left => left_prompt(&parts, markers),
        Mode::Right => right_prompt(&parts, markers),
    };
    Ok(prompt)
}

/// The current directory, or a placeholder if it has been deleted.
fn current_dir() -> Result<String> {
    match std::env::current_dir() {
        Ok(dir) => Ok(dir.to_string_lossy().into_owned()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("Current directory is gone: {e}");
            Ok(NOT_FOUND.to_string())
        }
        Err(e) => Err(e).context("Failed to get current directory"),
    }
}

/// Fill in whatever git status the shell left out. Failures mean "not a
/// repository" and leave the inputs as they were.
fn query_git(inputs: &mut PromptInputs) {
    let repo = Repository::at(Path::new(&inputs.working_dir));

    if inputs.git_porcelain.is_none() {
        match repo.porcelain_status() {
            Ok(status) => inputs.git_porcelain = Some(status),
            Err(e) => {
                log::debug!("No git status for {}: {e}", repo.path().display());
                return;
            }
        }
    }

    if inputs.time_of_last_commit.is_none() {
        match repo.last_commit_time() {
            Ok(time) => inputs.time_of_last_commit = Some(time.to_string()),
            Err(e) => log::debug!("No last commit time: {e}"),
        }
    }

    if inputs.vcs_info.is_none() {
        match repo.in_progress_action() {
            Ok(Some(action)) => inputs.vcs_info = Some(format!("vcs:git|action:{action}")),
            Ok(None) => {}
            Err(e) => log::debug!("Couldn't check for an in-progress action: {e}"),
        }
    }
}
