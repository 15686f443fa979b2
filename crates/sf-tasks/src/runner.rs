//! Running the Ant executable.

use std::future::Future;
use std::path::PathBuf;
use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tracing::{error, info};

use crate::error::{Error, ErrorKind, Result};

/// One Ant command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AntInvocation {
    pub command: String,
    pub build_file: PathBuf,
    pub lib_dir: PathBuf,
    pub base_dir: PathBuf,
    /// Build file target to run.
    pub target: String,
}

impl AntInvocation {
    /// `-buildfile <build.xml> -lib <lib dir> -Dbasedir=<dir> <target>`
    pub fn args(&self) -> Vec<String> {
        vec![
            "-buildfile".to_string(),
            self.build_file.display().to_string(),
            "-lib".to_string(),
            self.lib_dir.display().to_string(),
            format!("-Dbasedir={}", self.base_dir.display()),
            self.target.clone(),
        ]
    }

    /// The full command line, for logging.
    pub fn command_line(&self) -> String {
        let mut line = self.command.clone();
        for arg in self.args() {
            line.push(' ');
            line.push_str(&arg);
        }
        line
    }
}

/// Exit status and captured output of an Ant run.
#[derive(Debug, Clone, Default)]
pub struct AntOutput {
    /// Exit code; `None` when the process was killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl AntOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Executes Ant invocations.
pub trait AntRunner {
    fn run(&self, invocation: &AntInvocation) -> impl Future<Output = Result<AntOutput>> + Send;
}

/// Runs Ant as a child process, streaming stdout to `info` and stderr to
/// `error` line by line.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessAntRunner;

impl AntRunner for ProcessAntRunner {
    async fn run(&self, invocation: &AntInvocation) -> Result<AntOutput> {
        let spawn_error = |e: std::io::Error| {
            let message = e.to_string();
            Error::with_source(
                ErrorKind::AntSpawn {
                    command: invocation.command.clone(),
                    message,
                },
                e,
            )
        };

        let mut child = Command::new(&invocation.command)
            .args(invocation.args())
            .current_dir(&invocation.base_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(spawn_error)?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        let (stdout, stderr, status) = tokio::join!(
            stream_lines(stdout, false),
            stream_lines(stderr, true),
            child.wait()
        );
        let status = status.map_err(spawn_error)?;

        Ok(AntOutput {
            code: status.code(),
            stdout: stdout?,
            stderr: stderr?,
        })
    }
}

/// Log and capture `reader` line by line. Bytes that are not valid UTF-8
/// are replaced rather than failing the run.
async fn stream_lines<R>(reader: Option<R>, is_stderr: bool) -> Result<String>
where
    R: AsyncRead + Unpin,
{
    let mut captured = String::new();
    let Some(reader) = reader else {
        return Ok(captured);
    };

    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        let text = String::from_utf8_lossy(&buf);
        let line = text.trim_end_matches(['\r', '\n']);
        if is_stderr {
            error!("{}", line);
        } else {
            info!("{}", line);
        }
        captured.push_str(line);
        captured.push('\n');
    }
    Ok(captured)
}
