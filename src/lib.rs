//! EduJudge - Evaluation & Code Execution Core
//!
//! This library provides the scoring core of a learning platform: weighted
//! multi-criteria evaluation and ranking for aptitude tests and
//! group-discussion rounds, plus a sandboxed code-execution facade with a
//! Judge0-compatible result shape.
//!
//! # Features
//!
//! - Weighted rubric scoring with stable, insertion-order tie-breaking
//! - Deterministic aptitude grading with performance classification
//! - A judging seam for external AI evaluators, with a random fallback
//! - Local restricted-interpreter, compiled-C and remote-serverless
//!   execution paths behind one infallible `execute` call
//!
//! # Architecture
//!
//! The crate is a library with no HTTP surface of its own:
//! - **Models**: value objects and wire shapes
//! - **Engine**: pure scoring, ranking and grading computation
//! - **Sandbox**: per-request process lifecycle under hard deadlines
//!
//! Persistence, routing, auth and AI prompt content are collaborator
//! concerns outside this crate.

pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod models;
pub mod sandbox;

// Re-export commonly used types
pub use config::Config;
pub use error::{EvalError, EvalResult};
pub use sandbox::Sandbox;
