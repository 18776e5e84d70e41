//! Execution request and result wire shapes
//!
//! The result shape is a compatibility contract with the Judge0 grading API:
//! field names and status-code numbering must be reproduced exactly so that
//! existing clients cannot observe a deviation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{status_ids, DEFAULT_RUN_TIMEOUT_SECONDS};

/// Submission language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Python,
    C,
}

/// Execution backend for interpreted submissions
///
/// Compiled submissions always run locally; the backend choice only applies
/// to the interpreted path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Local,
    Remote,
}

/// One code execution request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExecutionRequest {
    /// Source code, base64-encoded when `base64_encoded` is set
    #[validate(length(min = 1, max = 1048576))] // 1MB max
    pub source_code: String,

    /// Standard input for the program
    #[serde(default)]
    pub stdin: String,

    /// Whether `source_code`/`stdin` are base64-encoded; outputs are
    /// re-encoded symmetrically
    #[serde(default)]
    pub base64_encoded: bool,

    #[serde(default)]
    pub language: Language,

    #[serde(default)]
    pub backend: Backend,

    /// Run deadline in seconds
    #[serde(default = "default_timeout", alias = "timeout")]
    #[validate(range(min = 1, max = 30))]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    DEFAULT_RUN_TIMEOUT_SECONDS
}

impl ExecutionRequest {
    pub fn new(source_code: impl Into<String>) -> Self {
        Self {
            source_code: source_code.into(),
            stdin: String::new(),
            base64_encoded: false,
            language: Language::default(),
            backend: Backend::default(),
            timeout_secs: DEFAULT_RUN_TIMEOUT_SECONDS,
        }
    }

    pub fn with_stdin(mut self, stdin: impl Into<String>) -> Self {
        self.stdin = stdin.into();
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn base64_encoded(mut self, encoded: bool) -> Self {
        self.base64_encoded = encoded;
        self
    }
}

/// Judge0-compatible execution status descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecStatus {
    pub id: i32,
    pub description: String,
}

impl ExecStatus {
    pub fn accepted() -> Self {
        Self {
            id: status_ids::ACCEPTED,
            description: "Accepted".to_string(),
        }
    }

    pub fn time_limit_exceeded() -> Self {
        Self {
            id: status_ids::TIME_LIMIT_EXCEEDED,
            description: "Time Limit Exceeded".to_string(),
        }
    }

    pub fn compilation_error() -> Self {
        Self {
            id: status_ids::COMPILATION_ERROR,
            description: "Compilation Error".to_string(),
        }
    }

    pub fn runtime_error() -> Self {
        Self {
            id: status_ids::RUNTIME_ERROR,
            description: "Runtime Error".to_string(),
        }
    }

    pub fn internal_error() -> Self {
        Self {
            id: status_ids::INTERNAL_ERROR,
            description: "Internal Error".to_string(),
        }
    }
}

/// Structured outcome of one execution request
///
/// Created fresh per request, returned once, never persisted. `stdout` and
/// `stderr` are independently optional: `stderr` is `None` when empty, not
/// an empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub status: ExecStatus,
    /// Wall-clock seconds, formatted to 3 decimals
    pub time: Option<String>,
    /// Peak memory in kilobytes, when the backend measures it
    pub memory: Option<i64>,
    pub compile_output: Option<String>,
    pub message: Option<String>,
}

impl ExecutionResult {
    /// An Internal Error result carrying the failure text in both `stderr`
    /// and `message`, matching the remote executor's error shape
    pub fn internal_error(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            stdout: None,
            stderr: Some(message.clone()),
            status: ExecStatus::internal_error(),
            time: None,
            memory: None,
            compile_output: None,
            message: Some(message),
        }
    }

    /// A Runtime Error result for failures before the program ran at all
    /// (bad base64 input, invalid request)
    pub fn rejected(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            stdout: None,
            stderr: Some(message.clone()),
            status: ExecStatus::runtime_error(),
            time: None,
            memory: None,
            compile_output: None,
            message: Some(message),
        }
    }

    /// A Time Limit Exceeded result after a forced kill at the deadline
    pub fn timed_out(timeout_secs: u64) -> Self {
        Self {
            stdout: None,
            stderr: None,
            status: ExecStatus::time_limit_exceeded(),
            time: Some(format!("{:.3}", timeout_secs as f64)),
            memory: None,
            compile_output: None,
            message: None,
        }
    }

    /// A Compilation Error result carrying the toolchain's diagnostics
    pub fn compile_error(compile_output: impl Into<String>) -> Self {
        Self {
            stdout: None,
            stderr: None,
            status: ExecStatus::compilation_error(),
            time: None,
            memory: None,
            compile_output: Some(compile_output.into()),
            message: None,
        }
    }
}
