//! Domain models and wire shapes

pub mod aptitude;
pub mod evaluation;
pub mod execution;
pub mod rubric;

pub use aptitude::{
    AnswerStatus, AptitudeAttempt, AptitudeGradingReport, PerformanceAnalysis, Question,
    QuestionResult,
};
pub use evaluation::{CriterionScore, EvaluationResult, ParticipantScoreSet};
pub use execution::{Backend, ExecStatus, ExecutionRequest, ExecutionResult, Language};
pub use rubric::{Criterion, Rubric};
