use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use insta_cmd::get_cargo_bin;
use promptline::styling::{
    BRANCH_SYMBOL, CHEVRON, DIR_SYMBOL, SEP_LEFT, SEP_RIGHT, VENV_SYMBOL, strip_styling,
};
use tempfile::TempDir;

/// Fixed clock for every spawned prompt (2024-01-01T00:00:00Z)
pub const TEST_EPOCH: u64 = 1704067200;

/// Isolated home directory and environment for running the binary.
pub struct TestEnv {
    _temp_dir: TempDir,
    root: PathBuf,
    home: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        // Canonicalize to resolve symlinks (macOS /var -> /private/var)
        let root = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp path");
        let home = root.join("home");
        std::fs::create_dir(&home).expect("Failed to create home directory");

        Self {
            _temp_dir: temp_dir,
            root,
            home,
        }
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    /// A scratch directory outside the home directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Command for the prompt binary with a clean environment: no user
    /// config, no SSH session, no virtualenv, fixed clock.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin("promptline"));
        self.configure(&mut cmd);
        cmd
    }

    /// Apply the isolated environment to any command (git included).
    pub fn configure(&self, cmd: &mut Command) {
        cmd.env_clear();
        if let Some(path) = std::env::var_os("PATH") {
            cmd.env("PATH", path);
        }
        cmd.env("HOME", &self.home)
            .env("XDG_CONFIG_HOME", self.home.join(".config"))
            .env("USER", "dev")
            .env("LC_ALL", "C")
            .env("SOURCE_DATE_EPOCH", TEST_EPOCH.to_string())
            .env("GIT_CONFIG_GLOBAL", "/dev/null")
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env("GIT_CEILING_DIRECTORIES", self.root())
            .env("GIT_AUTHOR_NAME", "Test User")
            .env("GIT_AUTHOR_EMAIL", "test@example.com")
            .env("GIT_COMMITTER_NAME", "Test User")
            .env("GIT_COMMITTER_EMAIL", "test@example.com");
    }

    /// Run git in `dir` under the isolated environment, panicking on failure.
    pub fn git(&self, dir: &Path, args: &[&str]) {
        let mut cmd = Command::new("git");
        self.configure(&mut cmd);
        let output = cmd
            .args(args)
            .current_dir(dir)
            .output()
            .expect("Failed to run git");
        assert!(
            output.status.success(),
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
    }

    /// A repository on `main` with one commit dated `commit_date`.
    pub fn init_repo(&self, name: &str, commit_date: &str) -> PathBuf {
        let repo = self.root().join(name);
        std::fs::create_dir(&repo).expect("Failed to create repo directory");
        self.git(&repo, &["init", "-q", "-b", "main"]);
        std::fs::write(repo.join("file.txt"), "content").expect("Failed to write file");
        self.git(&repo, &["add", "."]);

        let mut cmd = Command::new("git");
        self.configure(&mut cmd);
        let output = cmd
            .args(["commit", "-q", "-m", "Initial commit"])
            .env("GIT_AUTHOR_DATE", commit_date)
            .env("GIT_COMMITTER_DATE", commit_date)
            .current_dir(&repo)
            .output()
            .expect("Failed to run git commit");
        assert!(output.status.success(), "git commit failed");

        repo
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Visible prompt text with the Nerd Font glyphs swapped for ASCII, so
/// assertions stay readable.
pub fn visible(prompt: &str) -> String {
    strip_styling(prompt)
        .replace(SEP_LEFT, "(")
        .replace(SEP_RIGHT, ")")
        .replace('\u{f31b}', "U")
        .replace(DIR_SYMBOL, "D")
        .replace(BRANCH_SYMBOL, "B")
        .replace(VENV_SYMBOL, "V")
        .replace(CHEVRON, ">")
}
