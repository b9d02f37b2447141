//! Typed directives and their rendering.
//!
//! Every directive is built once by [`crate::factory::create`] and is immutable
//! afterwards. Rendering reads files or runs the shell each time it is called;
//! nothing is cached.

use std::fmt::{Display, Formatter};

use itertools::Itertools;
use log::debug;

use crate::error::Result;
use crate::format::OutputFormat;
use crate::lines::read_line_range;
use crate::shell::ShellRunner;

pub const VIEW_ACTION: &str = "view";
pub const EXECUTE_ACTION: &str = "execute";

/// Shows a slice of another file's lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewCommand {
    pub file_path: String,
    /// 1-based, inclusive. Zero together with a zero `end_line` means the whole file.
    pub start_line: usize,
    /// 1-based, inclusive. Clamped to the file's line count when rendering.
    pub end_line: usize,
    pub language: String,
    pub format: OutputFormat,
}

/// Shows the captured output of a shell command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecuteCommand {
    /// Passed verbatim to the shell, never tokenized here.
    pub command_line: String,
    pub attach_command_line: bool,
    pub format: OutputFormat,
}

/// Placeholder for an action this engine does not know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand {
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    View(ViewCommand),
    Execute(ExecuteCommand),
    Unknown(UnknownCommand),
}

impl ViewCommand {
    /// Lines of the selected range followed by one empty line.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the range does not fit
    /// the file.
    pub fn raw_lines(&self) -> Result<Vec<String>> {
        let mut lines = read_line_range(&self.file_path, self.start_line, self.end_line)?;
        debug!("Read {} lines from `{}`", lines.len(), self.file_path);
        lines.push(String::new());
        Ok(lines)
    }

    /// [`ViewCommand::raw_lines`] wrapped in the command's format, tagged with its language.
    ///
    /// # Errors
    ///
    /// See [`ViewCommand::raw_lines`].
    pub fn render_lines(&self) -> Result<Vec<String>> {
        Ok(self.format.wrap(self.raw_lines()?, Some(&self.language)))
    }
}

impl ExecuteCommand {
    /// Captured stdout, then stderr, followed by one empty line.
    ///
    /// The command line is prepended as `$ <command line>` when
    /// `attach_command_line` is set. The executed program's exit status does not
    /// affect the result.
    ///
    /// # Errors
    ///
    /// Returns an error only if the shell itself could not be run.
    pub fn raw_lines(&self, runner: &ShellRunner) -> Result<Vec<String>> {
        let output = runner.run(&self.command_line)?;

        let mut lines = Vec::with_capacity(output.stdout.len() + output.stderr.len() + 2);
        if self.attach_command_line {
            lines.push(format!("$ {}", self.command_line));
        }
        lines.extend(output.stdout);
        lines.extend(output.stderr);
        lines.push(String::new());
        Ok(lines)
    }

    /// [`ExecuteCommand::raw_lines`] wrapped in the command's format.
    ///
    /// # Errors
    ///
    /// See [`ExecuteCommand::raw_lines`].
    pub fn render_lines(&self, runner: &ShellRunner) -> Result<Vec<String>> {
        Ok(self.format.wrap(self.raw_lines(runner)?, None))
    }
}

impl UnknownCommand {
    #[must_use]
    pub fn raw_lines(&self) -> Vec<String> {
        vec![format!("Action={}", self.action)]
    }
}

impl Command {
    /// The action name this command was created from.
    #[must_use]
    pub fn action(&self) -> &str {
        match self {
            Command::View(_) => VIEW_ACTION,
            Command::Execute(_) => EXECUTE_ACTION,
            Command::Unknown(unknown) => &unknown.action,
        }
    }

    /// Output lines before any format wrapping.
    ///
    /// # Errors
    ///
    /// Returns an error if a view's file cannot be read, its range is invalid,
    /// or the shell for an execute cannot be run.
    pub fn raw_lines(&self, runner: &ShellRunner) -> Result<Vec<String>> {
        match self {
            Command::View(view) => view.raw_lines(),
            Command::Execute(execute) => execute.raw_lines(runner),
            Command::Unknown(unknown) => Ok(unknown.raw_lines()),
        }
    }

    /// Renders with the default [`ShellRunner`].
    ///
    /// # Errors
    ///
    /// See [`Command::raw_lines`].
    pub fn render_lines(&self) -> Result<Vec<String>> {
        self.render_lines_with(&ShellRunner::default())
    }

    /// Output lines wrapped in the command's format. Unknown actions are never wrapped.
    ///
    /// # Errors
    ///
    /// See [`Command::raw_lines`].
    pub fn render_lines_with(&self, runner: &ShellRunner) -> Result<Vec<String>> {
        match self {
            Command::View(view) => view.render_lines(),
            Command::Execute(execute) => execute.render_lines(runner),
            Command::Unknown(unknown) => Ok(unknown.raw_lines()),
        }
    }

    /// Rendered lines joined with newlines, ready to splice into a document.
    ///
    /// # Errors
    ///
    /// See [`Command::raw_lines`].
    pub fn render(&self, runner: &ShellRunner) -> Result<String> {
        Ok(self.render_lines_with(runner)?.join("\n"))
    }
}

fn quote(value: &str) -> String {
    if value.is_empty() || value.contains(char::is_whitespace) {
        format!("{value:?}")
    } else {
        value.to_string()
    }
}

impl Display for ViewCommand {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{VIEW_ACTION} file={} start={} end={} lang={} fmt={}",
            quote(&self.file_path),
            self.start_line,
            self.end_line,
            quote(&self.language),
            self.format.as_str()
        )
    }
}

impl Display for ExecuteCommand {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        let mut arguments = vec![format!("cmd={}", quote(&self.command_line))];
        if self.attach_command_line {
            arguments.push("attach_cmd=t".to_string());
        }
        arguments.push(format!("fmt={}", self.format.as_str()));

        write!(formatter, "{EXECUTE_ACTION} {}", arguments.iter().join(" "))
    }
}

impl Display for UnknownCommand {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.action)
    }
}

impl Display for Command {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::View(view) => view.fmt(formatter),
            Command::Execute(execute) => execute.fmt(formatter),
            Command::Unknown(unknown) => unknown.fmt(formatter),
        }
    }
}
