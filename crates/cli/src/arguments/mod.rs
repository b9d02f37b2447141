//! Argument processing for the mdexpand CLI.
//!
//! Directive arguments are given as `key=value` tokens and collected into the
//! string-keyed map the directive factory expects.

pub mod processing;

pub use processing::process_named_arguments;
