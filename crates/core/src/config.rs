//! Settings file handling and path utilities for mdexpand.
//!
//! This module resolves the settings file path, loads the optional YAML
//! settings, and expands shell variables like `~` in paths.

use std::fs;
use std::path::Path;
use std::time::Duration;

use log::debug;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::shell::ShellRunner;

/// Default path for the settings file
const DEFAULT_CONFIG_PATH: &str = "~/.mdexpand/config.yml";

/// Default shell used to run `execute` directives
pub const DEFAULT_SHELL: &str = "/bin/sh";

/// Settings that shape how `execute` directives are run.
///
/// Every field is optional; anything left unset falls back to the
/// [`ShellRunner`] defaults.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub shell: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub working_directory: Option<String>,
}

impl Settings {
    /// Overlays `other` on top of `self`; values set in `other` win.
    #[must_use]
    pub fn merge(self, other: Settings) -> Self {
        Self {
            shell: other.shell.or(self.shell),
            timeout_seconds: other.timeout_seconds.or(self.timeout_seconds),
            working_directory: other.working_directory.or(self.working_directory),
        }
    }

    #[must_use]
    pub fn shell_runner(&self) -> ShellRunner {
        let runner = match &self.shell {
            Some(shell) => ShellRunner::new(shellexpand::tilde(shell).to_string()),
            None => ShellRunner::default(),
        };

        runner
            .with_working_directory(self.working_directory.clone())
            .with_timeout(self.timeout_seconds.map(Duration::from_secs))
    }
}

/// Resolves the settings file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// settings path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use mdexpand_core::config::get_config_path;
///
/// // Use default path
/// let default_path = get_config_path(&None);
///
/// // Use custom path
/// let custom_path = get_config_path(&Some("/path/to/config.yml".to_string()));
/// ```
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = match config_path_arg {
        Some(config_path) => config_path,
        None => DEFAULT_CONFIG_PATH,
    };

    shellexpand::tilde(config_path).to_string()
}

/// Loads settings from `config_path`.
///
/// A missing file is not an error and yields the default settings.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or is not valid YAML
/// for [`Settings`].
pub fn load_settings(config_path: &str) -> Result<Settings> {
    if !Path::new(config_path).exists() {
        debug!("No settings file at `{}`, using defaults", config_path);
        return Ok(Settings::default());
    }

    let content = fs::read_to_string(config_path)
        .map_err(|e| Error::io_error("settings", config_path, e))?;

    if content.trim().is_empty() {
        return Ok(Settings::default());
    }

    let settings: Settings = serde_yaml::from_str(&content)
        .map_err(|e| Error::yaml_error("reading", "settings", config_path, e))?;

    debug!("Loaded settings from `{}`: {:?}", config_path, settings);
    Ok(settings)
}

/// Expands shell variables in a working directory path.
///
/// If a working directory is provided, expands shell variables like `~`.
/// Returns None if no working directory is provided.
///
/// # Examples
///
/// ```
/// use mdexpand_core::config::expand_working_directory;
///
/// // Expand tilde
/// let expanded = expand_working_directory(&Some("~/projects".to_string()));
/// assert!(expanded.is_some());
///
/// // Handle None input
/// let none_result = expand_working_directory(&None);
/// assert!(none_result.is_none());
/// ```
pub fn expand_working_directory(working_directory: &Option<String>) -> Option<String> {
    working_directory
        .as_ref()
        .map(|working_directory| shellexpand::tilde(working_directory).to_string())
}
