//! Evaluation & ranking engine
//!
//! Pure computation over rubrics, score sets and aptitude attempts: no I/O,
//! no shared state, safe under unlimited parallelism. Persistence of the
//! produced value objects and the HTTP surface that serializes them belong
//! to the calling layer.

pub mod aptitude;
pub mod judge;
pub mod ranking;
pub mod scoring;

use std::collections::HashMap;

use crate::error::EvalResult;
use crate::models::{EvaluationResult, Rubric};

/// One participant's raw criterion scores entering a round
#[derive(Debug, Clone)]
pub struct RoundEntry {
    pub participant_id: String,
    /// Producer-clamped 0-100 scores, one per rubric criterion
    pub raw_scores: HashMap<String, u32>,
}

impl RoundEntry {
    pub fn new(participant_id: impl Into<String>, raw_scores: HashMap<String, u32>) -> Self {
        Self {
            participant_id: participant_id.into(),
            raw_scores,
        }
    }
}

/// Score every entry against the rubric, then rank the round.
///
/// Entries are scored in the order given and ties keep that order, so callers
/// that insert the real participant first keep them ranked above generated
/// peers on equal totals.
pub fn evaluate_round(
    entries: Vec<RoundEntry>,
    rubric: &Rubric,
) -> EvalResult<Vec<EvaluationResult>> {
    let mut results = Vec::with_capacity(entries.len());

    for entry in entries {
        let scores = scoring::score_participant(&entry.raw_scores, rubric)?;
        let total_score = scoring::compute_weighted_total(&scores);
        results.push(EvaluationResult::unranked(
            entry.participant_id,
            scores,
            total_score,
        ));
    }

    Ok(ranking::rank_participants(results))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rubric() -> Rubric {
        Rubric::new()
            .with_criterion("clarity", 50, "how clear")
            .with_criterion("depth", 50, "how deep")
    }

    fn entry(id: &str, clarity: u32, depth: u32) -> RoundEntry {
        let mut raw = HashMap::new();
        raw.insert("clarity".to_string(), clarity);
        raw.insert("depth".to_string(), depth);
        RoundEntry::new(id, raw)
    }

    #[test]
    fn test_evaluate_round_scores_and_ranks() {
        let results = evaluate_round(
            vec![entry("student", 80, 80), entry("agent_1", 90, 90)],
            &rubric(),
        )
        .unwrap();

        assert_eq!(results[0].participant_id, "agent_1");
        assert_eq!(results[0].rank, 1);
        assert_eq!(results[0].total_score, 90.0);
        assert_eq!(results[1].participant_id, "student");
        assert_eq!(results[1].rank, 2);
    }

    #[test]
    fn test_evaluate_round_tie_keeps_insertion_order() {
        let results = evaluate_round(
            vec![entry("student", 85, 85), entry("agent_1", 85, 85)],
            &rubric(),
        )
        .unwrap();

        // The participant inserted first wins the tie.
        assert_eq!(results[0].participant_id, "student");
        assert_eq!(results[0].rank, 1);
        assert_eq!(results[1].participant_id, "agent_1");
        assert_eq!(results[1].rank, 2);
    }

    #[test]
    fn test_evaluate_round_missing_criterion_is_an_error() {
        let mut raw = HashMap::new();
        raw.insert("clarity".to_string(), 80);

        let err = evaluate_round(vec![RoundEntry::new("student", raw)], &rubric()).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_CRITERION");
    }
}
