//! Aptitude test models

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    /// Exactly four options in display order
    pub options: Vec<String>,
    /// One of `options`, compared by exact string equality
    pub correct_answer: String,
    pub explanation: String,
}

/// One participant's attempt at an aptitude test
///
/// Answers are keyed by the 0-based question index rendered as a string;
/// an absent key means the question was left unanswered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AptitudeAttempt {
    pub questions: Vec<Question>,
    #[serde(default)]
    pub answers: HashMap<String, String>,
}

/// Per-question classification of an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerStatus {
    Correct,
    Incorrect,
    Unanswered,
}

impl AnswerStatus {
    /// Get status as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Incorrect => "incorrect",
            Self::Unanswered => "unanswered",
        }
    }
}

/// Graded outcome for one question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResult {
    /// 1-based question number
    pub question_number: u32,
    pub question: String,
    pub options: Vec<String>,
    pub user_answer: Option<String>,
    pub correct_answer: String,
    pub explanation: String,
    pub status: AnswerStatus,
}

/// Full grading report for an aptitude attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AptitudeGradingReport {
    pub total_questions: u32,
    pub correct_answers: u32,
    pub incorrect_answers: u32,
    pub unanswered: u32,
    /// correct / total × 100, rounded to 2 decimal places (0 when empty)
    pub score: f64,
    pub results: Vec<QuestionResult>,
    pub performance: PerformanceAnalysis,
}

/// Human-readable performance classification for a 0-100 score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceAnalysis {
    pub level: String,
    pub message: String,
    pub recommendation: String,
}
