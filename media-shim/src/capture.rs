use std::collections::HashMap;
use std::process::ExitStatus;

use crate::command::CommandBuilder;
use crate::error::Result;

/// Everything a single extractor run printed, owned by the call that ran it.
#[derive(Debug, Clone)]
pub struct CapturedOutput {
    pub stdout: String,
    pub stderr: String,
    pub status: ExitStatus
}

impl CapturedOutput {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Exit code, or -1 when the process was terminated by a signal.
    pub fn code(&self) -> i32 {
        self.status.code().unwrap_or(-1)
    }
}

/// Runs the command to completion and captures both output streams.
///
/// Each run gets its own pipes. The child is killed if the returned future
/// is dropped before it finishes.
pub(crate) async fn capture(
    builder: &CommandBuilder,
    env_vars: &HashMap<String, String>
) -> Result<CapturedOutput> {
    tracing::debug!(
        program = %builder.program().display(),
        args = ?builder.get_args(),
        "spawning extractor"
    );

    let output = builder.build_with_env(env_vars).output().await?;

    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    for line in stderr.lines() {
        tracing::trace!(line = %line, "extractor stderr");
    }

    Ok(CapturedOutput {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr,
        status: output.status
    })
}
