//! Judging seam
//!
//! Free-text responses are scored by an external AI collaborator. The engine
//! never sees the collaborator's untyped reply: it is coerced into validated
//! raw scores at this boundary, and the engine works only on the validated
//! shape. A random fallback judge stands in when no collaborator is
//! configured.

use std::collections::HashMap;

use async_trait::async_trait;
use rand::Rng;

use crate::constants::{
    MOCK_PEER_SCORE_MAX, MOCK_PEER_SCORE_MIN, MOCK_SELF_SCORE_MAX, MOCK_SELF_SCORE_MIN,
};
use crate::error::{EvalError, EvalResult};
use crate::models::{ParticipantScoreSet, Rubric};

/// Scores one free-text response against every rubric criterion (0-100 each).
///
/// Implementations are external collaborators (an AI judge) or fallbacks;
/// retries, if any, belong to them, never to the engine.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResponseJudge: Send + Sync {
    async fn judge(
        &self,
        response_text: &str,
        topic: &str,
        rubric: &Rubric,
    ) -> EvalResult<HashMap<String, u32>>;
}

/// Fallback judge producing uniform random scores per criterion.
///
/// Used when no AI collaborator is available, with a slightly higher range
/// for the real participant than for generated peers.
#[derive(Debug, Clone)]
pub struct RandomJudge {
    min: u32,
    max: u32,
}

impl RandomJudge {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Range used for the real participant's responses
    pub fn for_self() -> Self {
        Self::new(MOCK_SELF_SCORE_MIN, MOCK_SELF_SCORE_MAX)
    }

    /// Range used for generated peer participants
    pub fn for_peer() -> Self {
        Self::new(MOCK_PEER_SCORE_MIN, MOCK_PEER_SCORE_MAX)
    }
}

#[async_trait]
impl ResponseJudge for RandomJudge {
    async fn judge(
        &self,
        _response_text: &str,
        _topic: &str,
        rubric: &Rubric,
    ) -> EvalResult<HashMap<String, u32>> {
        let mut rng = rand::rng();
        Ok(rubric
            .iter()
            .map(|(key, _)| (key.to_string(), rng.random_range(self.min..=self.max)))
            .collect())
    }
}

/// Coerce an untyped collaborator reply into validated raw scores.
///
/// The reply must be a JSON object carrying a numeric score for every rubric
/// criterion. Values are clamped to 0-100 here, once, so the engine never
/// has to re-validate.
pub fn scores_from_judge_payload(
    payload: &serde_json::Value,
    rubric: &Rubric,
) -> EvalResult<HashMap<String, u32>> {
    let object = payload.as_object().ok_or_else(|| {
        EvalError::InvalidJudgeResponse("expected a JSON object of criterion scores".to_string())
    })?;

    let mut raw = HashMap::with_capacity(rubric.len());
    for (key, _) in rubric.iter() {
        let value = object.get(key).ok_or_else(|| {
            EvalError::InvalidJudgeResponse(format!("missing score for criterion '{key}'"))
        })?;
        let score = value.as_f64().ok_or_else(|| {
            EvalError::InvalidJudgeResponse(format!("non-numeric score for criterion '{key}'"))
        })?;
        raw.insert(key.to_string(), score.clamp(0.0, 100.0).round() as u32);
    }

    Ok(raw)
}

/// Judge a response and fold the result straight into a score set.
pub async fn judge_and_score(
    judge: &dyn ResponseJudge,
    response_text: &str,
    topic: &str,
    rubric: &Rubric,
) -> EvalResult<ParticipantScoreSet> {
    let raw = judge.judge(response_text, topic, rubric).await?;
    super::scoring::score_participant(&raw, rubric)
}
