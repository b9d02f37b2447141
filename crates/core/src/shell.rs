//! Running command lines through a system shell and capturing their output.

use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use log::debug;

use crate::config::{expand_working_directory, DEFAULT_SHELL};
use crate::error::{Error, Result};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Captured result of a shell invocation.
///
/// A nonzero exit code or text on stderr is ordinary output here, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellOutput {
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
}

impl ShellOutput {
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Hands command lines verbatim to `<shell> -c`, so pipes, redirection and the
/// rest of the shell grammar are resolved by the shell itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellRunner {
    pub shell: String,
    pub working_directory: Option<String>,
    /// Bounds the whole run, including draining output. The child is killed
    /// if it is still running when this elapses.
    pub timeout: Option<Duration>,
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self {
            shell: DEFAULT_SHELL.to_string(),
            working_directory: None,
            timeout: None,
        }
    }
}

type StreamReader = Receiver<std::io::Result<Vec<u8>>>;

impl ShellRunner {
    #[must_use]
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_working_directory(mut self, working_directory: Option<String>) -> Self {
        self.working_directory = working_directory;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Runs `command_line` and waits for it to finish.
    ///
    /// # Errors
    ///
    /// - [`Error::SubProcess`] if the shell cannot be started or waited on
    /// - [`Error::Timeout`] if the deadline elapsed before the shell exited and
    ///   both output pipes closed
    pub fn run(&self, command_line: &str) -> Result<ShellOutput> {
        let deadline = self.timeout.map(|timeout| Deadline::after(timeout, command_line));

        let mut command = Command::new(&self.shell);
        command
            .arg("-c")
            .arg(command_line)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(working_directory) = expand_working_directory(&self.working_directory) {
            command.current_dir(working_directory);
        }

        debug!("Running `{}` with {}", command_line, self.shell);
        let mut child = command.spawn()?;

        // Both pipes are drained concurrently so a chatty child cannot block on a full pipe.
        let stdout_reader = spawn_reader(child.stdout.take());
        let stderr_reader = spawn_reader(child.stderr.take());

        let status = match &deadline {
            Some(deadline) => wait_with_deadline(&mut child, deadline)?,
            None => child.wait()?,
        };

        // A backgrounded grandchild can keep a pipe open after the shell exits.
        let output = ShellOutput {
            stdout: collect_lines(&stdout_reader, deadline.as_ref())?,
            stderr: collect_lines(&stderr_reader, deadline.as_ref())?,
            exit_code: status.code(),
        };

        debug!("`{}` exited with {:?}", command_line, output.exit_code);
        Ok(output)
    }
}

struct Deadline {
    at: Instant,
    timeout: Duration,
    command_line: String,
}

impl Deadline {
    fn after(timeout: Duration, command_line: &str) -> Self {
        Self {
            at: Instant::now() + timeout,
            timeout,
            command_line: command_line.to_string(),
        }
    }

    fn remaining(&self) -> Duration {
        self.at.saturating_duration_since(Instant::now())
    }

    fn expired(&self) -> Error {
        Error::Timeout {
            command: self.command_line.clone(),
            timeout: self.timeout,
        }
    }
}

/// Reads `stream` to the end on its own thread. The thread is never joined,
/// so it may outlive the run if something else still holds the pipe.
fn spawn_reader<R: Read + Send + 'static>(stream: Option<R>) -> StreamReader {
    let (sender, receiver) = mpsc::channel();

    thread::spawn(move || {
        let mut buffer = Vec::new();
        let result = match stream {
            Some(mut stream) => stream.read_to_end(&mut buffer).map(|_| buffer),
            None => Ok(buffer),
        };
        // The receiver is gone once the run has timed out.
        let _ = sender.send(result);
    });

    receiver
}

fn collect_lines(reader: &StreamReader, deadline: Option<&Deadline>) -> Result<Vec<String>> {
    let received = match deadline {
        Some(deadline) => reader
            .recv_timeout(deadline.remaining())
            .map_err(|e| match e {
                RecvTimeoutError::Timeout => deadline.expired(),
                RecvTimeoutError::Disconnected => reader_stopped().into(),
            })?,
        None => reader.recv().map_err(|_| reader_stopped())?,
    };
    let bytes = received?;

    Ok(String::from_utf8_lossy(&bytes)
        .lines()
        .map(ToString::to_string)
        .collect())
}

fn reader_stopped() -> std::io::Error {
    std::io::Error::other("output reader thread stopped without a result")
}

fn wait_with_deadline(child: &mut Child, deadline: &Deadline) -> Result<ExitStatus> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(status);
        }

        if deadline.remaining().is_zero() {
            // kill fails if the child exited after the poll; wait still reaps it.
            let _ = child.kill();
            child.wait()?;
            return Err(deadline.expired());
        }

        thread::sleep(POLL_INTERVAL);
    }
}
