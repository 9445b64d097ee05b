//! Parsing of `git status --porcelain=v2` output and zsh `vcs_info` strings.
//!
//! Expected command:
//! `git status --porcelain=v2 --show-stash --branch --ahead-behind --untracked-files=normal`
//!
//! Only the header lines and the first columns of each entry line matter;
//! paths are never looked at.

use std::collections::HashMap;

use super::error::StatusError;

/// Normalized working-tree state for one prompt render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRecord {
    pub branch: String,
    pub ahead: u32,
    pub behind: u32,
    pub staged: u32,
    pub unstaged: u32,
    pub untracked: u32,
    pub unmerged: u32,
    pub stash: u32,
}

impl Default for StatusRecord {
    fn default() -> Self {
        Self {
            branch: "unknown".to_string(),
            ahead: 0,
            behind: 0,
            staged: 0,
            unstaged: 0,
            untracked: 0,
            unmerged: 0,
            stash: 0,
        }
    }
}

/// One porcelain v2 line, classified by its prefix.
#[derive(Debug, PartialEq, Eq)]
enum StatusLine<'a> {
    /// `# branch.head <name>`
    BranchHead(&'a str),
    /// `# branch.ab +<ahead> -<behind>`
    AheadBehind(&'a str),
    /// `# stash <count>`
    Stash(&'a str),
    /// Any other header (`branch.oid`, `branch.upstream`, ...)
    Header,
    /// `1 XY ...` (ordinary) or `2 XY ...` (renamed/copied)
    Changed {
        index: Option<char>,
        worktree: Option<char>,
    },
    /// `? <path>`
    Untracked,
    /// `u XY ...`
    Unmerged,
    /// Blank lines, ignored entries (`!`), anything unrecognized
    Other,
}

impl<'a> StatusLine<'a> {
    fn classify(line: &'a str) -> Self {
        if let Some(name) = line.strip_prefix("# branch.head") {
            return StatusLine::BranchHead(name.trim());
        }
        if let Some(counts) = line.strip_prefix("# branch.ab") {
            return StatusLine::AheadBehind(counts);
        }
        if let Some(count) = line.strip_prefix("# stash") {
            return StatusLine::Stash(count.trim());
        }
        if line.starts_with('#') {
            return StatusLine::Header;
        }

        let mut chars = line.chars();
        match chars.next() {
            Some('1' | '2') => {
                // "1 M. N..." - the XY field starts at the third character
                let mut xy = chars.skip(1);
                StatusLine::Changed {
                    index: xy.next(),
                    worktree: xy.next(),
                }
            }
            Some('?') => StatusLine::Untracked,
            Some('u') => StatusLine::Unmerged,
            _ => StatusLine::Other,
        }
    }
}

fn parse_count(field: &'static str, value: &str) -> Result<u32, StatusError> {
    value.parse().map_err(|_| StatusError::InvalidCount {
        field,
        value: value.to_string(),
    })
}

/// Parse porcelain v2 status text.
///
/// Lines are independent; when a header appears twice the later one wins.
/// Fails with [`StatusError::Empty`] when there is nothing to parse, which
/// callers treat as "not in a repository".
pub fn parse_status(raw: &str) -> Result<StatusRecord, StatusError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(StatusError::Empty);
    }

    let mut record = StatusRecord::default();
    for line in raw.lines() {
        match StatusLine::classify(line) {
            StatusLine::BranchHead(name) => {
                if !name.is_empty() {
                    record.branch = name.to_string();
                }
            }
            StatusLine::AheadBehind(counts) => {
                for token in counts.split_whitespace() {
                    if let Some(ahead) = token.strip_prefix('+') {
                        record.ahead = parse_count("ahead", ahead)?;
                    } else if let Some(behind) = token.strip_prefix('-') {
                        record.behind = parse_count("behind", behind)?;
                    }
                }
            }
            StatusLine::Stash(count) => record.stash = parse_count("stash", count)?,
            StatusLine::Changed { index, worktree } => {
                if index.is_some_and(|c| c != '.') {
                    record.staged += 1;
                }
                if worktree.is_some_and(|c| c != '.') {
                    record.unstaged += 1;
                }
            }
            StatusLine::Untracked => record.untracked += 1,
            StatusLine::Unmerged => record.unmerged += 1,
            StatusLine::Header | StatusLine::Other => {}
        }
    }

    Ok(record)
}

/// Key/value pairs from a zsh `vcs_info` format string such as
/// `vcs:git|branch:main|action:rebase`.
///
/// Only `action` is consumed; branch and counts come from porcelain output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VcsInfo {
    fields: HashMap<String, String>,
}

impl VcsInfo {
    pub fn parse(raw: &str) -> Self {
        let fields = raw
            .split('|')
            .filter_map(|item| item.split_once(':'))
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// In-progress operation (rebase, merge, cherry-pick, ...), if any.
    pub fn action(&self) -> Option<&str> {
        self.get("action").filter(|action| !action.is_empty())
    }
}
