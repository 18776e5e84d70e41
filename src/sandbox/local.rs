//! Local interpreted execution
//!
//! Runs a Python submission in a child interpreter behind a fixed harness
//! that exposes only an allow-list of safe builtins: arithmetic, string and
//! sequence helpers, `print`, `input`, comparisons and iteration. No
//! filesystem, process or import access — `__import__` itself is absent from
//! the restricted symbol table. The deadline is enforced by killing the
//! child process, which works uniformly across platforms.

use std::process::Stdio;
use std::time::Instant;

use tempfile::tempdir;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::time::{timeout, Duration};

use crate::config::SandboxConfig;
use crate::models::ExecutionResult;

/// Harness executed by the interpreter; the submission path arrives in argv.
/// The harness itself uses full builtins, the submission does not.
const HARNESS: &str = r#"import builtins
import sys

ALLOWED = (
    "abs", "all", "any", "ascii", "bin", "bool", "bytearray", "bytes",
    "callable", "chr", "complex", "dict", "divmod", "enumerate", "filter",
    "float", "format", "frozenset", "hash", "hex", "input", "int",
    "isinstance", "issubclass", "iter", "len", "list", "map", "max", "min",
    "next", "oct", "ord", "pow", "print", "range", "repr", "reversed",
    "round", "set", "slice", "sorted", "str", "sum", "tuple", "zip",
)


def main():
    with open(sys.argv[1], "r") as handle:
        source = handle.read()
    restricted = {name: getattr(builtins, name) for name in ALLOWED}
    exec(compile(source, "<submission>", "exec"), {"__builtins__": restricted})


main()
"#;

/// Execute a Python submission locally. Never returns an error: internal
/// failures (temp workspace, spawn) become Internal Error results.
pub(crate) async fn execute(
    config: &SandboxConfig,
    source: &str,
    stdin: &str,
    timeout_secs: u64,
) -> ExecutionResult {
    match run(config, source, stdin, timeout_secs).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("local execution failed: {e:#}");
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
    // Workspace is dropped (and deleted) on every exit path below.
    let workspace = tempdir()?;
    let program_path = workspace.path().join("program.py");
    let harness_path = workspace.path().join("harness.py");
    tokio::fs::write(&program_path, source).await?;
    tokio::fs::write(&harness_path, HARNESS).await?;

    let started = Instant::now();
    let mut child = Command::new(&config.python_bin)
        .arg(&harness_path)
        .arg(&program_path)
        .current_dir(workspace.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()?;

    if let Some(mut pipe) = child.stdin.take() {
        let payload = stdin.as_bytes().to_vec();
        // Written concurrently with output collection: a child that fills
        // its stdout pipe before reading stdin must not block the writer.
        // A program that never reads stdin closes the pipe early; that is
        // not our failure.
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
        // Dropping the timed-out future drops the child, which kills it.
        Err(_) => return Ok(ExecutionResult::timed_out(timeout_secs)),
    };

    Ok(super::result_from_output(output, started.elapsed()))
}
