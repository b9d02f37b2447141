//! Building typed commands from an action name and loosely-typed arguments.
//!
//! | Action    | Key          | Default              |
//! |-----------|--------------|----------------------|
//! | `view`    | `file`       | empty path           |
//! | `view`    | `start`      | `0`                  |
//! | `view`    | `end`        | `0`                  |
//! | `view`    | `lang`       | extension of `file`  |
//! | `view`    | `fmt`        | `code`               |
//! | `execute` | `cmd`        | empty command line   |
//! | `execute` | `attach_cmd` | off unless non-empty |
//! | `execute` | `fmt`        | `code`               |

use std::collections::HashMap;
use std::hash::BuildHasher;
use std::path::Path;

use log::debug;

use crate::command::{
    Command, ExecuteCommand, UnknownCommand, ViewCommand, EXECUTE_ACTION, VIEW_ACTION,
};
use crate::error::{Error, Result};
use crate::format::OutputFormat;

pub const FILE_KEY: &str = "file";
pub const START_KEY: &str = "start";
pub const END_KEY: &str = "end";
pub const LANGUAGE_KEY: &str = "lang";
pub const FORMAT_KEY: &str = "fmt";
pub const COMMAND_KEY: &str = "cmd";
pub const ATTACH_COMMAND_KEY: &str = "attach_cmd";

/// Creates the command for `action` from `arguments`.
///
/// Missing arguments fall back to their defaults and unrecognized actions
/// become [`Command::Unknown`], ignoring every argument.
///
/// # Errors
///
/// Returns [`Error::InvalidNumber`] if `start` or `end` is present but is not a
/// non-negative decimal integer.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use mdexpand_core::command::Command;
/// use mdexpand_core::factory::create;
///
/// let arguments = HashMap::from([("cmd".to_string(), "echo hello".to_string())]);
/// let command = create("execute", &arguments)?;
/// assert!(matches!(command, Command::Execute(_)));
/// # Ok::<(), mdexpand_core::error::Error>(())
/// ```
pub fn create<S: BuildHasher>(action: &str, arguments: &HashMap<String, String, S>) -> Result<Command> {
    let command = match action {
        VIEW_ACTION => Command::View(create_view(arguments)?),
        EXECUTE_ACTION => Command::Execute(create_execute(arguments)),
        _ => Command::Unknown(UnknownCommand {
            action: action.to_string(),
        }),
    };

    debug!("Created command: {}", command);
    Ok(command)
}

fn create_view<S: BuildHasher>(arguments: &HashMap<String, String, S>) -> Result<ViewCommand> {
    let file_path = get_string(arguments, FILE_KEY);
    let language = match arguments.get(LANGUAGE_KEY) {
        Some(language) => language.clone(),
        None => default_language(&file_path),
    };

    Ok(ViewCommand {
        start_line: get_line_number(arguments, START_KEY)?,
        end_line: get_line_number(arguments, END_KEY)?,
        language,
        format: get_format(arguments),
        file_path,
    })
}

fn create_execute<S: BuildHasher>(arguments: &HashMap<String, String, S>) -> ExecuteCommand {
    ExecuteCommand {
        command_line: get_string(arguments, COMMAND_KEY),
        attach_command_line: get_flag(arguments, ATTACH_COMMAND_KEY),
        format: get_format(arguments),
    }
}

/// The extension of `file_path` without the dot, or empty if it has none.
#[must_use]
pub fn default_language(file_path: &str) -> String {
    Path::new(file_path)
        .extension()
        .map(|extension| extension.to_string_lossy().to_string())
        .unwrap_or_default()
}

fn get_string<S: BuildHasher>(arguments: &HashMap<String, String, S>, key: &str) -> String {
    arguments.get(key).cloned().unwrap_or_default()
}

fn get_flag<S: BuildHasher>(arguments: &HashMap<String, String, S>, key: &str) -> bool {
    arguments.get(key).is_some_and(|value| !value.is_empty())
}

fn get_format<S: BuildHasher>(arguments: &HashMap<String, String, S>) -> OutputFormat {
    OutputFormat::from_arg(arguments.get(FORMAT_KEY).map(String::as_str))
}

fn get_line_number<S: BuildHasher>(arguments: &HashMap<String, String, S>, key: &str) -> Result<usize> {
    let Some(value) = arguments.get(key) else {
        return Ok(0);
    };

    value.trim().parse::<usize>().map_err(|_| Error::InvalidNumber {
        key: key.to_string(),
        value: value.clone(),
    })
}
