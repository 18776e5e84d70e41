//! Application-wide constants
//!
//! This module contains all constant values used throughout the crate.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SANDBOX DEFAULTS
// =============================================================================

/// Default run deadline for a single execution, in seconds
pub const DEFAULT_RUN_TIMEOUT_SECONDS: u64 = 5;

/// Compile deadline for the compiled-language path, in seconds
pub const DEFAULT_COMPILE_TIMEOUT_SECONDS: u64 = 10;

/// Maximum run deadline in seconds (to prevent abuse)
pub const MAX_TIME_LIMIT_SECONDS: u64 = 30;

/// Maximum source code size in bytes (1 MB)
pub const MAX_SOURCE_CODE_SIZE: usize = 1024 * 1024;

/// Default interpreter binary for the local interpreted path
pub const DEFAULT_PYTHON_BIN: &str = "python3";

/// Default C toolchain binary for the compiled path
pub const DEFAULT_CC_BIN: &str = "gcc";

// =============================================================================
// EXECUTION STATUS CODES
// =============================================================================

/// Execution status identifiers, wire-compatible with the Judge0 grading API.
/// Clients consuming the `ExecutionResult` shape depend on this exact
/// numbering; do not renumber.
pub mod status_ids {
    pub const ACCEPTED: i32 = 3;
    pub const TIME_LIMIT_EXCEEDED: i32 = 5;
    pub const COMPILATION_ERROR: i32 = 6;
    pub const RUNTIME_ERROR: i32 = 11;
    pub const INTERNAL_ERROR: i32 = 13;
}

// =============================================================================
// EVALUATION DEFAULTS
// =============================================================================

/// Default group-discussion rubric: criterion key, weight (percent), description.
/// Weights sum to 100 so weighted totals land on a 0-100 scale.
pub const DEFAULT_GD_CRITERIA: &[(&str, u32, &str)] = &[
    (
        "communication_skills",
        25,
        "Clarity, articulation, and language proficiency",
    ),
    (
        "leadership",
        20,
        "Initiative taking and group steering ability",
    ),
    (
        "logical_reasoning",
        20,
        "Quality of arguments and critical thinking",
    ),
    (
        "content_relevance",
        20,
        "Knowledge and relevance of points made",
    ),
    (
        "listening_team_dynamics",
        15,
        "Active listening and team collaboration",
    ),
];

/// Performance classification thresholds (inclusive lower bounds)
pub mod performance_thresholds {
    pub const EXCELLENT: f64 = 90.0;
    pub const VERY_GOOD: f64 = 75.0;
    pub const GOOD: f64 = 60.0;
    pub const AVERAGE: f64 = 40.0;
}

// =============================================================================
// MOCK JUDGE SCORE RANGES
// =============================================================================

/// Score range for the real participant when no AI judge is available
pub const MOCK_SELF_SCORE_MIN: u32 = 70;
pub const MOCK_SELF_SCORE_MAX: u32 = 95;

/// Score range for generated peer participants
pub const MOCK_PEER_SCORE_MIN: u32 = 60;
pub const MOCK_PEER_SCORE_MAX: u32 = 90;
