//! Aptitude test grading
//!
//! Objective, deterministic grading against known correct answers: exact
//! case-sensitive string comparison, no partial credit, no fuzzy matching.

use std::collections::HashMap;

use crate::constants::performance_thresholds;
use crate::error::{EvalError, EvalResult};
use crate::models::{
    AnswerStatus, AptitudeAttempt, AptitudeGradingReport, PerformanceAnalysis, Question,
    QuestionResult,
};

/// Grade a complete attempt as submitted over the wire.
pub fn grade(attempt: &AptitudeAttempt) -> EvalResult<AptitudeGradingReport> {
    grade_attempt(&attempt.questions, &attempt.answers)
}

/// Grade an attempt: three-way classification per question.
///
/// Answers are keyed by the 0-based question index as a string. An absent
/// key is "unanswered", which is distinct from an incorrect answer. Keys
/// that are non-numeric or out of range are a malformed attempt.
pub fn grade_attempt(
    questions: &[Question],
    answers: &HashMap<String, String>,
) -> EvalResult<AptitudeGradingReport> {
    for key in answers.keys() {
        let index: usize = key.parse().map_err(|_| {
            EvalError::MalformedAttempt(format!("answer key '{key}' is not a question index"))
        })?;
        if index >= questions.len() {
            return Err(EvalError::MalformedAttempt(format!(
                "answer key '{key}' is out of range for {} questions",
                questions.len()
            )));
        }
    }

    let total_questions = questions.len() as u32;
    let mut correct_answers = 0u32;
    let mut incorrect_answers = 0u32;
    let mut unanswered = 0u32;
    let mut results = Vec::with_capacity(questions.len());

    for (index, question) in questions.iter().enumerate() {
        let user_answer = answers.get(&index.to_string()).cloned();

        let status = match &user_answer {
            None => {
                unanswered += 1;
                AnswerStatus::Unanswered
            }
            Some(answer) if *answer == question.correct_answer => {
                correct_answers += 1;
                AnswerStatus::Correct
            }
            Some(_) => {
                incorrect_answers += 1;
                AnswerStatus::Incorrect
            }
        };

        results.push(QuestionResult {
            question_number: (index + 1) as u32,
            question: question.question.clone(),
            options: question.options.clone(),
            user_answer,
            correct_answer: question.correct_answer.clone(),
            explanation: question.explanation.clone(),
            status,
        });
    }

    let score = if total_questions > 0 {
        let raw = correct_answers as f64 / total_questions as f64 * 100.0;
        (raw * 100.0).round() / 100.0
    } else {
        0.0
    };

    Ok(AptitudeGradingReport {
        total_questions,
        correct_answers,
        incorrect_answers,
        unanswered,
        score,
        results,
        performance: classify_performance(score),
    })
}

/// Classify a 0-100 score into a performance level.
///
/// Thresholds are inclusive lower bounds: 90, 75, 60, 40.
pub fn classify_performance(score: f64) -> PerformanceAnalysis {
    let (level, message, recommendation) = if score >= performance_thresholds::EXCELLENT {
        (
            "Excellent",
            "Outstanding performance! You have mastered this topic.",
            "Try harder topics or help others learn.",
        )
    } else if score >= performance_thresholds::VERY_GOOD {
        (
            "Very Good",
            "Great job! You have a strong understanding.",
            "Practice a few more challenging problems.",
        )
    } else if score >= performance_thresholds::GOOD {
        (
            "Good",
            "Good effort! You're on the right track.",
            "Review the concepts and practice more.",
        )
    } else if score >= performance_thresholds::AVERAGE {
        (
            "Average",
            "You need more practice on this topic.",
            "Go through video tutorials and practice questions.",
        )
    } else {
        (
            "Needs Improvement",
            "Keep practicing! Everyone starts somewhere.",
            "Start with basics and work through examples step by step.",
        )
    };

    PerformanceAnalysis {
        level: level.to_string(),
        message: message.to_string(),
        recommendation: recommendation.to_string(),
    }
}
