//! Participant scoring
//!
//! Pairs raw per-criterion scores with rubric weights and aggregates them
//! into a weighted total. Raw scores are clamped to 0-100 by their producer
//! (the deterministic grader or the judge-payload adapter); this module
//! assumes well-formed input and does not re-clamp.

use std::collections::HashMap;

use crate::error::{EvalError, EvalResult};
use crate::models::{CriterionScore, ParticipantScoreSet, Rubric};

/// Pair every rubric criterion with its raw score.
///
/// Every criterion in the rubric must appear in `raw`; a missing criterion is
/// an error, never silently defaulted. Extra keys in `raw` are ignored.
pub fn score_participant(
    raw: &HashMap<String, u32>,
    rubric: &Rubric,
) -> EvalResult<ParticipantScoreSet> {
    let mut scores = ParticipantScoreSet::new();

    for (key, criterion) in rubric.iter() {
        let score = raw
            .get(key)
            .copied()
            .ok_or_else(|| EvalError::MissingCriterion(key.to_string()))?;
        scores.push(
            key,
            CriterionScore {
                score,
                weight: criterion.weight,
            },
        );
    }

    Ok(scores)
}

/// Weighted total: Σ(score × weight) / 100, rounded to 2 decimal places.
///
/// No normalization is applied when weights do not sum to 100; partial
/// rubrics simply produce totals on a smaller scale.
pub fn compute_weighted_total(scores: &ParticipantScoreSet) -> f64 {
    let total: f64 = scores
        .iter()
        .map(|(_, cs)| f64::from(cs.score) * f64::from(cs.weight) / 100.0)
        .sum();

    (total * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rubric() -> Rubric {
        Rubric::new()
            .with_criterion("clarity", 60, "clear points")
            .with_criterion("depth", 40, "substantive points")
    }

    fn raw(clarity: u32, depth: u32) -> HashMap<String, u32> {
        let mut scores = HashMap::new();
        scores.insert("clarity".to_string(), clarity);
        scores.insert("depth".to_string(), depth);
        scores
    }

    #[test]
    fn test_score_participant_follows_rubric_order() {
        let scores = score_participant(&raw(80, 70), &rubric()).unwrap();
        let keys: Vec<&str> = scores.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["clarity", "depth"]);
        assert_eq!(scores.get("clarity").unwrap().weight, 60);
    }

    #[test]
    fn test_score_participant_missing_criterion() {
        let mut partial = HashMap::new();
        partial.insert("clarity".to_string(), 80);

        match score_participant(&partial, &rubric()) {
            Err(EvalError::MissingCriterion(key)) => assert_eq!(key, "depth"),
            other => panic!("expected MissingCriterion, got {:?}", other),
        }
    }

    #[test]
    fn test_score_participant_ignores_extra_keys() {
        let mut extra = raw(80, 70);
        extra.insert("unlisted".to_string(), 99);

        let scores = score_participant(&extra, &rubric()).unwrap();
        assert_eq!(scores.len(), 2);
        assert!(scores.get("unlisted").is_none());
    }

    #[test]
    fn test_weighted_total() {
        // 80 * 60 / 100 + 70 * 40 / 100 = 48 + 28 = 76
        let scores = score_participant(&raw(80, 70), &rubric()).unwrap();
        assert_eq!(compute_weighted_total(&scores), 76.0);
    }

    #[test]
    fn test_weighted_total_rounds_to_two_decimals() {
        let rubric = Rubric::new().with_criterion("only", 33, "one third");
        let mut raw = HashMap::new();
        raw.insert("only".to_string(), 77);

        // 77 * 33 / 100 = 25.41
        let scores = score_participant(&raw, &rubric).unwrap();
        assert_eq!(compute_weighted_total(&scores), 25.41);
    }

    #[test]
    fn test_weighted_total_is_linear_in_scores() {
        let single = score_participant(&raw(30, 20), &rubric()).unwrap();
        let doubled = score_participant(&raw(60, 40), &rubric()).unwrap();

        assert_eq!(
            compute_weighted_total(&doubled),
            compute_weighted_total(&single) * 2.0
        );
    }

    #[test]
    fn test_weighted_total_with_partial_rubric() {
        // Weights summing to 50 yield totals on a 0-50 scale.
        let rubric = Rubric::new()
            .with_criterion("clarity", 30, "clear")
            .with_criterion("depth", 20, "deep");
        let scores = score_participant(&raw(100, 100), &rubric).unwrap();
        assert_eq!(compute_weighted_total(&scores), 50.0);
    }

    #[test]
    fn test_weighted_total_does_not_overflow_on_oversized_weights() {
        // score * weight here exceeds u32::MAX; the product must be taken
        // in floating point.
        let rubric = Rubric::new().with_criterion("only", 100_000_000, "oversized weight");
        let mut raw = HashMap::new();
        raw.insert("only".to_string(), 100);

        let scores = score_participant(&raw, &rubric).unwrap();
        assert_eq!(compute_weighted_total(&scores), 100_000_000.0);
    }

    #[test]
    fn test_weighted_total_empty_set_is_zero() {
        assert_eq!(compute_weighted_total(&ParticipantScoreSet::new()), 0.0);
    }
}
