//! mdexpand Core Library
//!
//! This crate provides the directive model for mdexpand: small textual
//! directives embedded in a document that expand into a slice of another file
//! or the captured output of a shell command.
//!
//! # Key Features
//!
//! - **Command Factory**: Turn an action name and `key=value` arguments into a typed command
//! - **View**: Inclusive, 1-based line ranges of another file
//! - **Execute**: Full shell command lines with stdout and stderr captured
//! - **Output Formats**: Fenced code blocks or blockquotes
//! - **Error Handling**: Distinct errors for IO, line ranges and shell launch failures
//!
//! # Examples
//!
//! ```no_run
//! use std::collections::HashMap;
//! use mdexpand_core::factory::create;
//!
//! let arguments = HashMap::from([
//!     ("file".to_string(), "src/main.rs".to_string()),
//!     ("start".to_string(), "1".to_string()),
//!     ("end".to_string(), "10".to_string()),
//! ]);
//! let command = create("view", &arguments)?;
//! for line in command.render_lines()? {
//!     println!("{line}");
//! }
//! # Ok::<(), mdexpand_core::error::Error>(())
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod factory;
pub mod format;
pub mod lines;
pub mod shell;
