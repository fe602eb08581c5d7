//! Smoke-test runner
//!
//! Spawns the MCP server, performs one blocking `tools/call` request over
//! its stdio, and collects everything the server writes back. The server's
//! output is treated as opaque text and never parsed.

use std::process::{ExitStatus, Stdio};

use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::common::config::ServerCommand;
use crate::common::{Error, Result};
use crate::mcp::ToolCallRequest;

/// Everything one run produced
#[derive(Debug)]
pub struct SmokeReport {
    /// Full stdout text of the server
    pub stdout: String,
    /// Full stderr text of the server; non-empty text is a failure
    /// indicator but does not abort the run
    pub stderr: String,
    /// Exit status of the server process
    pub status: ExitStatus,
}

impl SmokeReport {
    /// Whether the server wrote anything to its error channel
    pub fn has_failure_output(&self) -> bool {
        !self.stderr.is_empty()
    }
}

/// Perform one blocking `tools/call` request against the server
///
/// The child inherits the full environment and the current working
/// directory. There is no retry, timeout, or cancellation: a hung server
/// hangs the runner.
pub async fn run(server: &ServerCommand, request: &ToolCallRequest) -> Result<SmokeReport> {
    let payload = serde_json::to_string(request)?;
    tracing::debug!("request payload: {payload}");

    let mut command = Command::new(&server.path);
    command
        .args(&server.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let mut child = command.spawn().map_err(|source| Error::SpawnFailed {
        path: server.path.display().to_string(),
        source,
    })?;

    let mut stdin = child.stdin.take().ok_or(Error::StdinUnavailable)?;
    stdin.write_all(payload.as_bytes()).await?;
    stdin.write_all(b"\n").await?;
    stdin.flush().await?;
    // Dropping the handle closes the pipe; the server sees end-of-input
    // after the single request.
    drop(stdin);

    let output = child.wait_with_output().await?;
    tracing::debug!("server exited with {}", output.status);

    Ok(SmokeReport {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        status: output.status,
    })
}
