use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error launching shell process: {}", _0)]
    SubProcess(#[from] std::io::Error),

    #[error("Command `{}` did not finish within {:?} and was killed.", .command, .timeout)]
    Timeout {
        command: String,
        timeout: std::time::Duration,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("Start line {} is beyond the end of `{}` ({} lines)", .start, .path, .line_count)]
    LineOutOfRange {
        path: String,
        start: usize,
        line_count: usize,
    },

    #[error("Invalid line range: start line {} is after end line {}", .start, .end)]
    InvalidLineRange { start: usize, end: usize },

    #[error("Argument `{}` must be a non-negative integer, got \"{}\"", .key, .value)]
    InvalidNumber { key: String, value: String },

    #[error("STDIO error: {}", .0)]
    Stdio(std::io::Error),

    #[error("Argument `{}` is not in the format key=value", .0)]
    ArgumentFormat(String),
}

impl Error {
    pub fn io_error(file_description: &str, path: &str, original: std::io::Error) -> Self {
        Self::Io {
            file_description: file_description.to_string(),
            path: path.to_string(),
            original,
        }
    }

    pub fn yaml_error(
        action: &str,
        file_description: &str,
        path: &str,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action: action.to_string(),
            file_description: file_description.to_string(),
            path: path.to_string(),
            original,
        }
    }

    pub fn line_out_of_range(path: &str, start: usize, line_count: usize) -> Self {
        Self::LineOutOfRange {
            path: path.to_string(),
            start,
            line_count,
        }
    }
}
