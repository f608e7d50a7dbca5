//! Shell configuration loaded from TOML

use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// ```toml
/// error_prefix = "Error, "
/// prompt = "> "
/// echo_commands = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// Put in front of every error line on stderr.
    pub error_prefix: String,
    /// Written to stdout before each line is read.
    pub prompt: Option<String>,
    /// Repeat each input line on stdout as `> <line>`.
    pub echo_commands: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            error_prefix: "Error, ".to_string(),
            prompt: None,
            echo_commands: false,
        }
    }
}

impl ShellConfig {
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("invalid shell configuration")
    }

    /// Read the configuration at `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_toml_str(&text)
            .with_context(|| format!("failed to load config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "shell config loaded");
        Ok(config)
    }
}
