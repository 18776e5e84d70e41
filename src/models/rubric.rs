//! Rubric model
//!
//! A rubric is an ordered mapping from criterion key to a percentage weight
//! and a human-readable description. The design intent is that weights sum to
//! 100, but the aggregation formula is weight-proportional regardless, so
//! partial rubrics are allowed at the cost of cross-round comparability.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::DEFAULT_GD_CRITERIA;

/// One named evaluation dimension carrying a percentage weight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    pub weight: u32,
    pub description: String,
}

/// Ordered, weighted set of evaluation criteria
///
/// Serialized as a JSON object; entry order follows insertion order, which is
/// also the order criteria appear in derived score sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rubric {
    entries: Vec<(String, Criterion)>,
}

impl Rubric {
    pub fn new() -> Self {
        Self::default()
    }

    /// The default group-discussion rubric (weights sum to 100)
    pub fn default_gd() -> Self {
        let mut rubric = Self::new();
        for (key, weight, description) in DEFAULT_GD_CRITERIA {
            rubric.push(*key, *weight, *description);
        }
        rubric
    }

    /// Append a criterion, keeping insertion order
    pub fn push(&mut self, key: impl Into<String>, weight: u32, description: impl Into<String>) {
        self.entries.push((
            key.into(),
            Criterion {
                weight,
                description: description.into(),
            },
        ));
    }

    /// Builder-style variant of [`push`](Self::push)
    pub fn with_criterion(
        mut self,
        key: impl Into<String>,
        weight: u32,
        description: impl Into<String>,
    ) -> Self {
        self.push(key, weight, description);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Criterion> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, c)| c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Criterion)> {
        self.entries.iter().map(|(k, c)| (k.as_str(), c))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all criterion weights (100 for well-formed rubrics)
    pub fn total_weight(&self) -> u32 {
        self.entries.iter().map(|(_, c)| c.weight).sum()
    }
}

impl Serialize for Rubric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, criterion) in &self.entries {
            map.serialize_entry(key, criterion)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Rubric {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RubricVisitor;

        impl<'de> Visitor<'de> for RubricVisitor {
            type Value = Rubric;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of criterion keys to {weight, description}")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, criterion)) = access.next_entry::<String, Criterion>()? {
                    entries.push((key, criterion));
                }
                Ok(Rubric { entries })
            }
        }

        deserializer.deserialize_map(RubricVisitor)
    }
}
