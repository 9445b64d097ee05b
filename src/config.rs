//! Configuration and environment inputs.
//!
//! Both are built once in `main` and passed by reference to every part
//! builder; nothing here is global.
//!
//! # Configuration Layers
//!
//! Later layers win:
//!
//! 1. Compiled defaults
//! 2. TOML file (`--config`, or `<config dir>/promptline/config.toml`)
//! 3. `PROMPT_*` environment variables, e.g. `PROMPT_PATH_BG=green`
//!
//! ```toml
//! user_fg = "black"
//! user_bg = "white"
//! max_path_length = 50
//! spacer = " "
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::styling::{Color, MAX_PATH_LENGTH, SPACER, printable_length};

/// Prefix shared by every configuration environment variable.
pub const ENV_PREFIX: &str = "PROMPT";

/// Colors and limits for the prompt sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    pub user_fg: Color,
    pub user_bg: Color,
    pub path_fg: Color,
    pub path_bg: Color,
    pub venv_fg: Color,
    pub venv_bg: Color,
    /// Column budget for the path before parents get collapsed
    pub max_path_length: usize,
    /// Fill between the left and right halves; must be one column wide
    pub spacer: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            user_fg: Color::Black,
            user_bg: Color::White,
            path_fg: Color::White,
            path_bg: Color::Blue,
            venv_fg: Color::Black,
            venv_bg: Color::Magenta,
            max_path_length: MAX_PATH_LENGTH,
            spacer: SPACER.to_string(),
        }
    }
}

impl PromptConfig {
    /// Load the layered configuration.
    ///
    /// `file` may not exist. `env` is the process environment (or a stand-in
    /// for tests); only `PROMPT_*` variables are looked at.
    pub fn load(
        file: Option<&Path>,
        env: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        if let Some(path) = file {
            builder = builder.add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(false),
            );
        }

        let prefix = format!("{ENV_PREFIX}_");
        let overrides: config::Map<String, String> = env
            .into_iter()
            .filter(|(key, _)| key.starts_with(&prefix))
            .collect();

        let config: Self = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).source(Some(overrides)))
            .build()?
            .try_deserialize()?;

        config.validate()
    }

    /// Load from the default locations, falling back to defaults (with a
    /// warning) when anything is invalid.
    pub fn load_or_default(file: Option<&Path>) -> Self {
        let default_path = Self::default_path();
        let file = file.or(default_path.as_deref());

        match Self::load(file, std::env::vars()) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Ignoring invalid prompt configuration: {err}");
                Self::default()
            }
        }
    }

    /// `<config dir>/promptline/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("promptline").join("config.toml"))
    }

    fn validate(self) -> Result<Self, config::ConfigError> {
        if printable_length(&self.spacer) != 1 {
            return Err(config::ConfigError::Message(format!(
                "spacer must be exactly one column wide, got '{}'",
                self.spacer
            )));
        }
        Ok(self)
    }
}

/// The slice of the process environment the prompt depends on, captured once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptEnv {
    /// `USER`
    pub user: Option<String>,
    pub hostname: Option<String>,
    /// `SSH_CONNECTION`; any non-empty value means "remote session"
    pub ssh_connection: Option<String>,
    /// `VIRTUAL_ENV`
    pub virtual_env: Option<String>,
    /// `SHLVL`, unparsed
    pub shell_level: Option<String>,
    pub home: Option<PathBuf>,
}

impl PromptEnv {
    pub fn from_process() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|value| !value.is_empty());

        Self {
            user: var("USER"),
            hostname: hostname(),
            ssh_connection: var("SSH_CONNECTION"),
            virtual_env: var("VIRTUAL_ENV"),
            shell_level: var("SHLVL"),
            home: dirs::home_dir(),
        }
    }

    pub fn is_ssh_session(&self) -> bool {
        self.ssh_connection.is_some()
    }
}

#[cfg(unix)]
fn hostname() -> Option<String> {
    nix::unistd::gethostname()
        .map_err(|e| log::debug!("gethostname failed: {e}"))
        .ok()
        .and_then(|name| name.into_string().ok())
        .filter(|name| !name.is_empty())
}

#[cfg(not(unix))]
fn hostname() -> Option<String> {
    std::env::var("COMPUTERNAME")
        .ok()
        .filter(|name| !name.is_empty())
}
