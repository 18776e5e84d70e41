//! Code execution sandbox
//!
//! Runs untrusted submitted code under a hard deadline and returns a
//! structured, Judge0-shaped result. The one property this module commits to
//! precisely: **no failure mode escapes as an error**. Decode failures,
//! compile errors, runtime crashes, timeouts and transport faults are all
//! folded into an [`ExecutionResult`]; callers treat execution as
//! always-succeeding-with-a-result.
//!
//! Each request spawns exactly one ephemeral process (or one remote
//! invocation). Temp workspaces are RAII-scoped and child processes are
//! killed on drop, so resources are released on every exit path, timeout
//! included. There is no queueing or admission control: concurrent requests
//! each cost one process, and resource exhaustion under load is an open risk
//! of this design, not handled here.

pub mod compiled;
pub mod local;
pub mod remote;

use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use uuid::Uuid;
use validator::Validate;

use crate::config::{Config, SandboxConfig};
use crate::models::{Backend, ExecStatus, ExecutionRequest, ExecutionResult, Language};

/// Sandbox facade dispatching requests to the configured execution paths
pub struct Sandbox {
    config: SandboxConfig,
    remote: remote::RemoteExecutor,
}

impl Sandbox {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.sandbox.clone(),
            remote: remote::RemoteExecutor::new(config.remote.clone()),
        }
    }

    /// A sandbox with default local toolchain settings and no remote backend
    pub fn with_defaults() -> Self {
        Self::new(&Config::default())
    }

    /// Execute one request. Infallible by contract: every failure mode is
    /// returned as a structured result.
    pub async fn execute(&self, request: &ExecutionRequest) -> ExecutionResult {
        let request_id = Uuid::new_v4();
        tracing::info!(
            %request_id,
            language = ?request.language,
            backend = ?request.backend,
            base64 = request.base64_encoded,
            "executing submission"
        );

        let mut result = self.execute_inner(request).await;

        // Input/output encoding symmetry: outputs are re-encoded iff the
        // caller submitted base64.
        if request.base64_encoded {
            encode_outputs(&mut result);
        }

        tracing::info!(%request_id, status = result.status.id, "execution finished");
        result
    }

    async fn execute_inner(&self, request: &ExecutionRequest) -> ExecutionResult {
        if let Err(e) = request.validate() {
            return ExecutionResult::rejected(format!("Invalid request: {e}"));
        }

        let (source, stdin) = if request.base64_encoded {
            match decode_inputs(&request.source_code, &request.stdin) {
                Ok(decoded) => decoded,
                Err(e) => {
                    return ExecutionResult::rejected(format!("Failed to decode base64: {e}"));
                }
            }
        } else {
            (request.source_code.clone(), request.stdin.clone())
        };

        match (request.language, request.backend) {
            (Language::C, _) => {
                compiled::execute(&self.config, &source, &stdin, request.timeout_secs).await
            }
            (Language::Python, Backend::Local) => {
                local::execute(&self.config, &source, &stdin, request.timeout_secs).await
            }
            (Language::Python, Backend::Remote) => {
                self.remote.execute(&source, &stdin, request.timeout_secs).await
            }
        }
    }
}

fn decode_inputs(source: &str, stdin: &str) -> Result<(String, String), String> {
    let source = decode_text(source)?;
    let stdin = if stdin.is_empty() {
        String::new()
    } else {
        decode_text(stdin)?
    };
    Ok((source, stdin))
}

fn decode_text(encoded: &str) -> Result<String, String> {
    let bytes = BASE64
        .decode(encoded.trim())
        .map_err(|e| e.to_string())?;
    String::from_utf8(bytes).map_err(|e| e.to_string())
}

fn encode_outputs(result: &mut ExecutionResult) {
    for field in [
        &mut result.stdout,
        &mut result.stderr,
        &mut result.message,
    ] {
        if let Some(text) = field {
            *text = BASE64.encode(text.as_bytes());
        }
    }
}

/// Build a result from a finished child process.
///
/// `stderr` is `None` when empty, never an empty string; `stdout` is always
/// present on completed runs.
pub(crate) fn result_from_output(
    output: std::process::Output,
    elapsed: Duration,
) -> ExecutionResult {
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    let status = if output.status.success() {
        ExecStatus::accepted()
    } else {
        ExecStatus::runtime_error()
    };

    ExecutionResult {
        stdout: Some(stdout),
        stderr: if stderr.is_empty() { None } else { Some(stderr) },
        status,
        time: Some(format!("{:.3}", elapsed.as_secs_f64())),
        memory: None,
        compile_output: None,
        message: None,
    }
}
