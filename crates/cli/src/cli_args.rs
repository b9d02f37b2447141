//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate.

use clap::Parser;
use mdexpand_core::config::Settings;

/// Command-line arguments for the mdexpand CLI tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use mdexpand_cli::cli_args::Args;
///
/// let args = Args::parse_from(["mdexpand", "view", "file=README.md"]);
/// assert_eq!(args.action, "view");
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the settings file YAML.
    ///
    /// If not provided, defaults to `~/.mdexpand/config.yml`.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Shell used to run `execute` directives. Overrides the settings file.
    #[arg(long, short = 's')]
    pub shell: Option<String>,

    /// Kill an `execute` directive's command after this many seconds.
    #[arg(long, short = 't', value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Directory `execute` directives run in. Overrides the settings file.
    #[arg(long, short = 'w')]
    pub working_directory: Option<String>,

    /// Print the output lines without wrapping them in a code block or blockquote.
    #[arg(long, short = 'r', action)]
    pub raw: bool,

    /// The directive's action, e.g. `view` or `execute`.
    pub action: String,

    /// Directive arguments in the format key=value.
    ///
    /// # Examples
    /// ```bash
    /// mdexpand view file=src/lib.rs start=1 end=20 lang=rust
    /// ```
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub arguments: Vec<String>,
}

impl Args {
    /// Settings given on the command line, to be layered over the settings file.
    #[must_use]
    pub fn settings_overrides(&self) -> Settings {
        Settings {
            shell: self.shell.clone(),
            timeout_seconds: self.timeout,
            working_directory: self.working_directory.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_args_default_values() {
        let args = Args::parse_from(["mdexpand", "view"]);

        assert!(args.config_path.is_none());
        assert!(args.shell.is_none());
        assert!(args.timeout.is_none());
        assert!(args.working_directory.is_none());
        assert!(!args.raw);
        assert_eq!(args.action, "view");
        assert!(args.arguments.is_empty());
    }

    #[test]
    fn test_args_short_flags() {
        let args = Args::parse_from([
            "mdexpand",
            "-c",
            "/custom/config.yml",
            "-s",
            "/bin/bash",
            "-t",
            "5",
            "-w",
            "/tmp",
            "-r",
            "execute",
        ]);

        assert_eq!(args.config_path, Some("/custom/config.yml".to_string()));
        assert_eq!(args.shell, Some("/bin/bash".to_string()));
        assert_eq!(args.timeout, Some(5));
        assert_eq!(args.working_directory, Some("/tmp".to_string()));
        assert!(args.raw);
    }

    #[test]
    fn test_args_long_flags() {
        let args = Args::parse_from([
            "mdexpand",
            "--config-path",
            "/custom/config.yml",
            "--shell",
            "/bin/zsh",
            "--timeout",
            "10",
            "--working-directory",
            "~/docs",
            "--raw",
            "view",
        ]);

        assert_eq!(args.config_path, Some("/custom/config.yml".to_string()));
        assert_eq!(args.shell, Some("/bin/zsh".to_string()));
        assert_eq!(args.timeout, Some(10));
        assert_eq!(args.working_directory, Some("~/docs".to_string()));
        assert!(args.raw);
    }

    #[test]
    fn test_args_directive_arguments() {
        let args = Args::parse_from([
            "mdexpand",
            "execute",
            "cmd=ls -la | head -n 2",
            "attach_cmd=t",
        ]);

        assert_eq!(args.action, "execute");
        assert_eq!(args.arguments, vec!["cmd=ls -la | head -n 2", "attach_cmd=t"]);
    }

    #[test]
    fn test_args_missing_action_is_error() {
        assert!(Args::try_parse_from(["mdexpand"]).is_err());
    }

    #[test]
    fn test_settings_overrides() {
        let args = Args::parse_from(["mdexpand", "--timeout", "3", "execute"]);
        let overrides = args.settings_overrides();

        assert!(overrides.shell.is_none());
        assert_eq!(overrides.timeout_seconds, Some(3));
        assert!(overrides.working_directory.is_none());
    }
}
