//! Compiled execution path
//!
//! Writes the C source to an isolated temp workspace, compiles it with the
//! configured toolchain under its own deadline, then runs the produced
//! binary with stdin piped in under the request's run deadline. The compile
//! deadline (default 10s) is distinct from the run deadline (default 5s).

use std::io::ErrorKind;
use std::process::Stdio;
use std::time::Instant;

use tempfile::tempdir;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::time::{timeout, Duration};

use crate::config::SandboxConfig;
use crate::models::ExecutionResult;

/// Execute a C submission: compile then run. Never returns an error.
pub(crate) async fn execute(
    config: &SandboxConfig,
    source: &str,
    stdin: &str,
    timeout_secs: u64,
) -> ExecutionResult {
    match run(config, source, stdin, timeout_secs).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("compiled execution failed: {e:#}");
            ExecutionResult::internal_error(format!("Execution error: {e}"))
        }
    }
}

async fn run(
    config: &SandboxConfig,
    source: &str,
    stdin: &str,
    timeout_secs: u64,
) -> anyhow::Result<ExecutionResult> {
    let workspace = tempdir()?;
    let source_path = workspace.path().join("main.c");
    let binary_path = workspace.path().join("program");
    tokio::fs::write(&source_path, source).await?;

    // Compile under the compile deadline.
    let compiler = Command::new(&config.cc_bin)
        .arg("-O2")
        .arg("-o")
        .arg(&binary_path)
        .arg(&source_path)
        .current_dir(workspace.path())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn();

    let compiler = match compiler {
        Ok(child) => child,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Ok(ExecutionResult::internal_error(format!(
                "C toolchain '{}' not found on host",
                config.cc_bin
            )));
        }
        Err(e) => return Err(e.into()),
    };

    let compile_output = match timeout(
        Duration::from_secs(config.compile_timeout_secs),
        compiler.wait_with_output(),
    )
    .await
    {
        Ok(finished) => finished?,
        Err(_) => {
            return Ok(ExecutionResult::compile_error(format!(
                "compilation timed out after {}s",
                config.compile_timeout_secs
            )));
        }
    };

    if !compile_output.status.success() {
        let diagnostics = String::from_utf8_lossy(&compile_output.stderr).into_owned();
        return Ok(ExecutionResult::compile_error(diagnostics));
    }

    // Run the binary under the request's run deadline.
    let started = Instant::now();
    let mut child = Command::new(&binary_path)
        .current_dir(workspace.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()?;

    if let Some(mut pipe) = child.stdin.take() {
        let payload = stdin.as_bytes().to_vec();
        // Written concurrently with output collection so a child that fills
        // its stdout pipe before reading stdin cannot block the writer.
        tokio::spawn(async move {
            let _ = pipe.write_all(&payload).await;
        });
    }

    let output = match timeout(
        Duration::from_secs(timeout_secs),
        child.wait_with_output(),
    )
    .await
    {
        Ok(finished) => finished?,
        Err(_) => return Ok(ExecutionResult::timed_out(timeout_secs)),
    };

    Ok(super::result_from_output(output, started.elapsed()))
}
