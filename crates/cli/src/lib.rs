//! mdexpand CLI Library
//!
//! This crate provides the command-line interface for mdexpand. It renders a
//! single directive given on the command line and prints the resulting text,
//! ready to be spliced into a document.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`arguments`]: Turning `key=value` tokens into the directive's argument map
//!
//! # Examples
//!
//! ```bash
//! # Lines 1 to 10 of a file as a fenced code block
//! mdexpand view file=src/main.rs start=1 end=10
//!
//! # Output of a pipeline as a blockquote, with the command line shown
//! mdexpand execute "cmd=ls | sort" attach_cmd=t fmt=blockquote
//!
//! # Kill the command if it runs longer than 5 seconds
//! mdexpand --timeout 5 execute "cmd=make test"
//! ```

pub mod arguments;
pub mod cli_args;
