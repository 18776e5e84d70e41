//! Evaluation result models

use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Score and weight recorded for one criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionScore {
    /// Producer-clamped score in 0-100
    pub score: u32,
    /// Criterion weight in percent, copied from the rubric
    pub weight: u32,
}

/// Ordered per-criterion scores for one participant in one round
///
/// Derived from a rubric plus raw scores; entry order follows the rubric.
/// Serialized as a JSON object keyed by criterion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipantScoreSet {
    entries: Vec<(String, CriterionScore)>,
}

impl ParticipantScoreSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, score: CriterionScore) {
        self.entries.push((key.into(), score));
    }

    pub fn get(&self, key: &str) -> Option<&CriterionScore> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, s)| s)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CriterionScore)> {
        self.entries.iter().map(|(k, s)| (k.as_str(), s))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ParticipantScoreSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, score) in &self.entries {
            map.serialize_entry(key, score)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ParticipantScoreSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScoreSetVisitor;

        impl<'de> Visitor<'de> for ScoreSetVisitor {
            type Value = ParticipantScoreSet;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of criterion keys to {score, weight}")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, score)) = access.next_entry::<String, CriterionScore>()? {
                    entries.push((key, score));
                }
                Ok(ParticipantScoreSet { entries })
            }
        }

        deserializer.deserialize_map(ScoreSetVisitor)
    }
}

/// Scored, ranked outcome for one participant in an evaluation round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub participant_id: String,
    pub scores: ParticipantScoreSet,
    /// Weighted total, rounded to 2 decimal places
    pub total_score: f64,
    /// 1-based rank within the round; 0 until ranking has run
    pub rank: u32,
    pub evaluated_at: DateTime<Utc>,
}

impl EvaluationResult {
    /// An unranked result, as produced by scoring before the round is ranked
    pub fn unranked(
        participant_id: impl Into<String>,
        scores: ParticipantScoreSet,
        total_score: f64,
    ) -> Self {
        Self {
            participant_id: participant_id.into(),
            scores,
            total_score,
            rank: 0,
            evaluated_at: Utc::now(),
        }
    }
}
