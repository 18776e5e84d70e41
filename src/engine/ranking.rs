//! Round ranking
//!
//! Assigns 1-based ranks by descending weighted total. The sort is stable
//! with no secondary key: participants tied on total keep their input order.
//! Callers insert the real participant before generated peers, so on an
//! exact tie the real participant keeps the lower rank number. This is a
//! deliberate, user-visible contract.

use std::cmp::Ordering;

use crate::models::EvaluationResult;

/// Sort by descending total score and assign 1-based ranks.
pub fn rank_participants(mut results: Vec<EvaluationResult>) -> Vec<EvaluationResult> {
    results.sort_by(|a, b| {
        b.total_score
            .partial_cmp(&a.total_score)
            .unwrap_or(Ordering::Equal)
    });

    for (idx, result) in results.iter_mut().enumerate() {
        result.rank = (idx + 1) as u32;
    }

    results
}
