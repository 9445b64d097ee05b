//! Prompt parts: the independent, colored text fragments a prompt is made of.
//!
//! Each builder takes its inputs explicitly (configuration, environment
//! snapshot, CLI values) and never fails. Anything it can't make sense of
//! becomes an empty part, which the assembler drops.

use std::path::Path;

use crate::config::{PromptConfig, PromptEnv};
use crate::git::{StatusRecord, VcsInfo, parse_status};
use crate::path::{shorten_path, split_last_segment};
use crate::styling::{
    BRANCH_SYMBOL, CHEVRON, Color, DIR_SYMBOL, GIT_AHEAD, GIT_BEHIND, GIT_STAGED, GIT_STASHED,
    GIT_UNMERGED, GIT_UNSTAGED, GIT_UNTRACKED, Markers, TextStyle, UNKNOWN_HOST, UNKNOWN_USER,
    USER_PLACEHOLDER, VENV_SYMBOL, quick_bold, style,
};

/// A text fragment plus the style it's drawn with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    pub text: String,
    pub style: TextStyle,
}

impl Part {
    pub fn new(text: impl Into<String>, fg: Color, bg: Color) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::new().fg(fg).bg(bg),
        }
    }

    /// A part that won't be drawn but still carries its colors.
    pub fn empty(fg: Color, bg: Color) -> Self {
        Self::new(String::new(), fg, bg)
    }

    pub fn bold(mut self) -> Self {
        self.style = self.style.bold();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn fg(&self) -> Option<Color> {
        self.style.fg
    }

    pub fn bg(&self) -> Option<Color> {
        self.style.bg
    }
}

// ============================================================================
// Identity
// ============================================================================

/// `user@host` inside SSH sessions, a bold placeholder glyph otherwise.
pub fn identity_part(config: &PromptConfig, env: &PromptEnv) -> Part {
    if env.is_ssh_session() {
        let user = env.user.as_deref().unwrap_or(UNKNOWN_USER);
        let host = env.hostname.as_deref().unwrap_or(UNKNOWN_HOST);
        Part::new(format!("{user}@{host}"), config.user_fg, config.user_bg)
    } else {
        Part::new(USER_PLACEHOLDER, config.user_fg, config.user_bg).bold()
    }
}

// ============================================================================
// Path
// ============================================================================

/// Directory part from an already shortened path. The last component is
/// bolded.
pub fn path_part(short_path: &str, config: &PromptConfig, markers: Markers) -> Part {
    let (head, last) = split_last_segment(short_path);
    let last = if last.is_empty() {
        String::new()
    } else {
        quick_bold(last, markers)
    };
    Part::new(
        format!("{DIR_SYMBOL} {head}{last}"),
        config.path_fg,
        config.path_bg,
    )
}

// ============================================================================
// Version Control
// ============================================================================

const VCS_FG: Color = Color::Black;
const VCS_BG: Color = Color::Yellow;

/// Branch, counts and commit age.
///
/// Colors: black on yellow by default, white on blue on `main`/`master`,
/// black on red while an action (rebase, merge, ...) is in progress.
/// Unparsable porcelain text means "not in a repository" and yields an empty
/// part in the default colors.
pub fn vcs_part(
    porcelain: &str,
    vcs_info: &VcsInfo,
    commit_time: Option<&str>,
    now: u64,
    markers: Markers,
) -> Part {
    let status = match parse_status(porcelain) {
        Ok(status) => status,
        Err(err) => {
            log::debug!("No version control part: {err}");
            return Part::empty(VCS_FG, VCS_BG);
        }
    };

    let (mut fg, mut bg) = (VCS_FG, VCS_BG);
    if matches!(status.branch.as_str(), "main" | "master") {
        (fg, bg) = (Color::White, Color::Blue);
    }

    let mut fragments = Vec::new();
    if let Some(action) = vcs_info.action() {
        fragments.push(format!("[{action}]"));
        (fg, bg) = (Color::Black, Color::Red);
    }
    fragments.push(quick_bold(BRANCH_SYMBOL, markers));
    fragments.push(quick_bold(&status.branch, markers));
    fragments.extend(status_counts(&status));

    if let Some(elapsed) = commit_time.and_then(|time| time_since(time, now)) {
        fragments.push(format!("({elapsed})"));
    }

    Part::new(fragments.join(" "), fg, bg)
}

/// Marker + count for every non-zero count, in display order.
fn status_counts(status: &StatusRecord) -> impl Iterator<Item = String> {
    [
        (GIT_AHEAD, status.ahead),
        (GIT_BEHIND, status.behind),
        (GIT_STAGED, status.staged),
        (GIT_UNSTAGED, status.unstaged),
        (GIT_UNTRACKED, status.untracked),
        (GIT_UNMERGED, status.unmerged),
        (GIT_STASHED, status.stash),
    ]
    .into_iter()
    .filter(|(_, count)| *count > 0)
    .map(|(marker, count)| format!("{marker}{count}"))
}

/// Human-readable age of a commit made at `commit_time` (epoch seconds).
///
/// `None` when `commit_time` isn't an integer. Commits from the future are
/// "just now".
pub fn time_since(commit_time: &str, now: u64) -> Option<String> {
    let commit_time: i64 = commit_time.trim().parse().ok()?;
    let elapsed = i64::try_from(now).ok()?.saturating_sub(commit_time);

    let pretty = match elapsed {
        i64::MIN..60 => "just now".to_string(),
        60..3600 => format!("{}m", elapsed / 60),
        3600..86400 => format!("{}h", elapsed / 3600),
        _ => format!("{}d", elapsed / 86400),
    };
    Some(pretty)
}

// ============================================================================
// Exit Status
// ============================================================================

/// How a previous command's exit code is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitPresentation {
    pub label: String,
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
}

impl ExitPresentation {
    /// Look up an exit code as the shell reported it.
    ///
    /// Zero and anything that isn't an integer get an empty label. Codes
    /// missing from the table become `ERR <code>` in bold black on red.
    pub fn from_code(code: &str) -> Self {
        let fallback = |label: String| Self {
            label,
            fg: Color::Black,
            bg: Color::Red,
            bold: true,
        };

        let code: i64 = match code.trim().parse() {
            Ok(0) | Err(_) => return fallback(String::new()),
            Ok(code) => code,
        };

        let (label, fg, bg) = match code {
            1 => ("ERROR", Color::White, Color::Red),
            2 => ("USAGE", Color::Black, Color::Yellow),
            126 => ("NOEXEC", Color::Black, Color::Yellow),
            127 => ("CMD NOT FOUND", Color::White, Color::Red),
            128 => ("BAD EXIT", Color::Black, Color::Yellow),
            130 => ("INTERRUPTED", Color::Black, Color::Cyan),
            134 => ("ABORT", Color::White, Color::Red),
            137 => ("KILLED", Color::White, Color::Red),
            139 => ("SEGFAULT", Color::White, Color::Red),
            143 => ("TERM", Color::Black, Color::Cyan),
            255 => ("FATAL", Color::White, Color::Red),
            _ => return fallback(format!("ERR {code}")),
        };

        Self {
            label: label.to_string(),
            fg,
            bg,
            bold: false,
        }
    }
}

impl From<ExitPresentation> for Part {
    fn from(exit: ExitPresentation) -> Self {
        let part = Part::new(exit.label, exit.fg, exit.bg);
        if exit.bold { part.bold() } else { part }
    }
}

/// The second-line chevron: red after a failure, green otherwise.
pub fn chevron(failed: bool, markers: Markers) -> String {
    let color = if failed { Color::Red } else { Color::Green };
    style(CHEVRON, TextStyle::new().fg(color).bold(), markers)
}

// ============================================================================
// Virtualenv
// ============================================================================

/// Active virtualenv name and shell nesting depth.
///
/// `SHLVL=3` renders as `(((shell)))`. Levels of one or less, levels deeper
/// than 32 and values that aren't integers are left out.
pub fn venv_part(config: &PromptConfig, env: &PromptEnv) -> Part {
    let mut fragments = Vec::new();

    if let Some(venv) = env.virtual_env.as_deref() {
        let name = Path::new(venv)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| venv.to_string());
        fragments.push(format!("{name} {VENV_SYMBOL}"));
    }

    let level = env.shell_level.as_deref().map_or(0, shell_level);
    if level > 1 {
        fragments.push(format!("{}shell{}", "(".repeat(level), ")".repeat(level)));
    }

    Part::new(fragments.join(" "), config.venv_fg, config.venv_bg)
}

/// Deepest `SHLVL` drawn as nested parentheses.
const MAX_SHELL_LEVEL: usize = 32;

fn shell_level(raw: &str) -> usize {
    match raw.trim().parse::<usize>() {
        Ok(level) if level <= MAX_SHELL_LEVEL => level,
        Ok(level) => {
            log::debug!("Ignoring SHLVL {level}: deeper than {MAX_SHELL_LEVEL}");
            0
        }
        Err(err) => {
            log::debug!("Ignoring SHLVL {raw:?}: {err}");
            0
        }
    }
}

// ============================================================================
// The Full Set
// ============================================================================

/// Raw per-render inputs, as the shell hands them over.
#[derive(Debug, Clone, Default)]
pub struct PromptInputs {
    pub last_exit_code: Option<String>,
    /// Absolute working directory, or a placeholder when it's gone
    pub working_dir: String,
    pub vcs_info: Option<String>,
    pub git_porcelain: Option<String>,
    pub time_of_last_commit: Option<String>,
}

/// Every part of one prompt, built once per render.
#[derive(Debug, Clone)]
pub struct PromptParts {
    pub user: Part,
    pub path: Part,
    /// Shortened path before styling, kept so the layout can shorten again
    pub path_text: String,
    pub vcs: Part,
    pub exit: Part,
    pub venv: Part,
}

impl PromptParts {
    pub fn build(
        inputs: &PromptInputs,
        config: &PromptConfig,
        env: &PromptEnv,
        markers: Markers,
        now: u64,
    ) -> Self {
        let path_text = shorten_path(
            &inputs.working_dir,
            env.home.as_deref(),
            config.max_path_length,
        );
        let vcs_info = VcsInfo::parse(inputs.vcs_info.as_deref().unwrap_or_default());
        let exit = ExitPresentation::from_code(inputs.last_exit_code.as_deref().unwrap_or("0"));

        Self {
            user: identity_part(config, env),
            path: path_part(&path_text, config, markers),
            vcs: vcs_part(
                inputs.git_porcelain.as_deref().unwrap_or_default(),
                &vcs_info,
                inputs.time_of_last_commit.as_deref(),
                now,
                markers,
            ),
            exit: exit.into(),
            venv: venv_part(config, env),
            path_text,
        }
    }

    /// Whether the previous command failed, i.e. an exit label is shown.
    pub fn failed(&self) -> bool {
        !self.exit.is_empty()
    }

    pub fn left(&self) -> [&Part; 3] {
        [&self.user, &self.path, &self.vcs]
    }

    pub fn right(&self) -> [&Part; 2] {
        [&self.exit, &self.venv]
    }
}
