use std::collections::HashMap;

use log::debug;
use mdexpand_core::error::Error::ArgumentFormat;
use mdexpand_core::error::Result;

/// Collects `key=value` tokens into a map.
///
/// Each token is split at its first `=`, so values may themselves contain `=`.
/// A later token with the same key replaces an earlier one.
///
/// # Errors
///
/// Returns [`ArgumentFormat`] for a token without `=` or with an empty key.
///
/// # Examples
///
/// ```rust
/// use mdexpand_cli::arguments::process_named_arguments;
///
/// let arguments = process_named_arguments(&["cmd=echo a=b".to_string()]).unwrap();
/// assert_eq!(arguments["cmd"], "echo a=b");
/// ```
pub fn process_named_arguments(named_args: &[String]) -> Result<HashMap<String, String>> {
    let mut arguments = HashMap::with_capacity(named_args.len());

    for argument in named_args {
        let Some((key, value)) = argument.split_once('=') else {
            return Err(ArgumentFormat(argument.to_string()));
        };

        if key.is_empty() {
            return Err(ArgumentFormat(argument.to_string()));
        }

        if let Some(previous) = arguments.insert(key.to_string(), value.to_string()) {
            debug!("Argument `{}` given more than once, replacing \"{}\"", key, previous);
        }
    }

    Ok(arguments)
}
