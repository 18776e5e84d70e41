//! Custom error types and handling
//!
//! Engine errors are contract violations (a score set that does not cover the
//! rubric, an answer set that references questions that do not exist) and
//! propagate to the caller, which decides the user-visible response. Sandbox
//! execution outcomes are deliberately *not* errors: they are folded into
//! structured [`ExecutionResult`](crate::models::ExecutionResult) values at
//! the sandbox boundary.

/// Evaluation engine error type
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    /// The rubric names a criterion the score set does not carry.
    /// Criteria are never silently defaulted.
    #[error("Missing criterion in score set: {0}")]
    MissingCriterion(String),

    /// The answer set references question indices inconsistent with the
    /// question sequence.
    #[error("Malformed attempt: {0}")]
    MalformedAttempt(String),

    /// The external judging collaborator returned a payload that cannot be
    /// coerced into per-criterion scores.
    #[error("Invalid judge response: {0}")]
    InvalidJudgeResponse(String),
}

impl EvalError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingCriterion(_) => "MISSING_CRITERION",
            Self::MalformedAttempt(_) => "MALFORMED_ATTEMPT",
            Self::InvalidJudgeResponse(_) => "INVALID_JUDGE_RESPONSE",
        }
    }
}

/// Result type alias using EvalError
pub type EvalResult<T> = Result<T, EvalError>;
