//! End-to-end tests for the local interpreted execution path.
//!
//! These spawn a real interpreter; they skip themselves on hosts without
//! one rather than failing.

use std::time::{Duration, Instant};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use edujudge::models::ExecutionRequest;
use edujudge::Sandbox;

fn python_available() -> bool {
    init_tracing();
    std::process::Command::new("python3")
        .arg("--version")
        .output()
        .is_ok()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Count interpreter children left over from a finished request.
///
/// A live request's child still has its workspace on disk; a leaked child
/// from a completed request points its cwd at the deleted workspace.
fn lingering_sandboxed_interpreters() -> usize {
    let Ok(entries) = std::fs::read_dir("/proc") else {
        return 0;
    };
    entries
        .flatten()
        .filter(|entry| {
            let name = entry.file_name();
            let Some(pid) = name.to_str() else {
                return false;
            };
            if !pid.bytes().all(|b| b.is_ascii_digit()) {
                return false;
            }
            let cmdline = std::fs::read(format!("/proc/{pid}/cmdline")).unwrap_or_default();
            if !cmdline
                .split(|b| *b == 0)
                .any(|arg| arg.ends_with(b"harness.py"))
            {
                return false;
            }
            matches!(
                std::fs::read_link(format!("/proc/{pid}/cwd")),
                Ok(cwd) if !cwd.exists()
            )
        })
        .count()
}

#[tokio::test]
async fn hello_world_is_accepted() {
    if !python_available() {
        eprintln!("skipping: python3 not available");
        return;
    }

    let sandbox = Sandbox::with_defaults();
    let result = sandbox
        .execute(&ExecutionRequest::new(r#"print("hello")"#))
        .await;

    assert_eq!(result.status.id, 3, "stderr: {:?}", result.stderr);
    assert_eq!(result.stdout.as_deref(), Some("hello\n"));
    assert!(result.stderr.is_none());
    assert!(result.time.is_some());
}

#[tokio::test]
async fn stdin_is_piped_to_the_program() {
    if !python_available() {
        eprintln!("skipping: python3 not available");
        return;
    }

    let sandbox = Sandbox::with_defaults();
    let request = ExecutionRequest::new("print(input())").with_stdin("forty two\n");
    let result = sandbox.execute(&request).await;

    assert_eq!(result.status.id, 3, "stderr: {:?}", result.stderr);
    assert_eq!(result.stdout.as_deref(), Some("forty two\n"));
}

#[tokio::test]
async fn base64_round_trip_is_symmetric() {
    if !python_available() {
        eprintln!("skipping: python3 not available");
        return;
    }

    let original = "round trip payload";
    let source = BASE64.encode("print(input())");
    let stdin = BASE64.encode(format!("{original}\n"));

    let sandbox = Sandbox::with_defaults();
    let request = ExecutionRequest::new(source)
        .with_stdin(stdin)
        .base64_encoded(true);
    let result = sandbox.execute(&request).await;

    assert_eq!(result.status.id, 3);
    let decoded = BASE64.decode(result.stdout.unwrap()).unwrap();
    assert_eq!(String::from_utf8(decoded).unwrap(), format!("{original}\n"));
}

#[tokio::test]
async fn infinite_loop_times_out_within_margin() {
    if !python_available() {
        eprintln!("skipping: python3 not available");
        return;
    }

    let sandbox = Sandbox::with_defaults();
    let request = ExecutionRequest::new("while True:\n    pass").with_timeout(2);

    let started = Instant::now();
    let result = sandbox.execute(&request).await;
    let elapsed = started.elapsed();

    assert_eq!(result.status.id, 5);
    assert!(
        elapsed.as_secs_f64() < 4.0,
        "timeout not enforced promptly: {elapsed:?}"
    );

    // The killed child must be reaped; reaping runs in the background, so
    // give it a moment before declaring a leak.
    let mut lingering = lingering_sandboxed_interpreters();
    for _ in 0..20 {
        if lingering == 0 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
        lingering = lingering_sandboxed_interpreters();
    }
    assert_eq!(lingering, 0, "timed-out interpreter left running");
}

#[tokio::test]
async fn large_output_before_reading_stdin_does_not_deadlock() {
    if !python_available() {
        eprintln!("skipping: python3 not available");
        return;
    }

    // Larger than the 64 KiB pipe buffers on both streams: the program
    // fills stdout before touching stdin, so stdin must be written
    // concurrently with output collection.
    let source = "print(\"x\" * (2 * 1024 * 1024))\nprint(len(input()))";
    let request = ExecutionRequest::new(source)
        .with_stdin(format!("{}\n", "y".repeat(1024 * 1024)))
        .with_timeout(10);

    let sandbox = Sandbox::with_defaults();
    let result = tokio::time::timeout(Duration::from_secs(20), sandbox.execute(&request))
        .await
        .expect("execution must finish within its deadline");

    assert_eq!(result.status.id, 3, "stderr: {:?}", result.stderr);
    assert!(result.stdout.unwrap().ends_with("1048576\n"));
}

#[tokio::test]
async fn runtime_exception_is_a_runtime_error() {
    if !python_available() {
        eprintln!("skipping: python3 not available");
        return;
    }

    let sandbox = Sandbox::with_defaults();
    let result = sandbox.execute(&ExecutionRequest::new("print(1 / 0)")).await;

    assert_eq!(result.status.id, 11);
    assert!(result
        .stderr
        .as_deref()
        .unwrap_or_default()
        .contains("ZeroDivisionError"));
}

#[tokio::test]
async fn import_is_blocked_by_the_restricted_builtins() {
    if !python_available() {
        eprintln!("skipping: python3 not available");
        return;
    }

    let sandbox = Sandbox::with_defaults();
    let result = sandbox
        .execute(&ExecutionRequest::new("import os\nprint(os.getcwd())"))
        .await;

    assert_eq!(result.status.id, 11);
}

#[tokio::test]
async fn filesystem_access_is_blocked_by_the_restricted_builtins() {
    if !python_available() {
        eprintln!("skipping: python3 not available");
        return;
    }

    let sandbox = Sandbox::with_defaults();
    let result = sandbox
        .execute(&ExecutionRequest::new(
            "handle = open(\"leak.txt\", \"w\")\nhandle.write(\"x\")",
        ))
        .await;

    assert_eq!(result.status.id, 11);
}

#[tokio::test]
async fn allowed_builtins_still_work() {
    if !python_available() {
        eprintln!("skipping: python3 not available");
        return;
    }

    let sandbox = Sandbox::with_defaults();
    let source = "values = [3, 1, 2]\nprint(sum(sorted(values)), max(values), len(values))";
    let result = sandbox.execute(&ExecutionRequest::new(source)).await;

    assert_eq!(result.status.id, 3, "stderr: {:?}", result.stderr);
    assert_eq!(result.stdout.as_deref(), Some("6 3 3\n"));
}
