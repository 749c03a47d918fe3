//! Named evaluation axes with 1-5 importance weights.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;

/// Lowest allowed criterion weight (nice-to-have).
pub const MIN_WEIGHT: u8 = 1;
/// Highest allowed criterion weight (critical).
pub const MAX_WEIGHT: u8 = 5;

/// A named evaluation axis for candidate scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: Uuid,
    pub name: String,
    pub weight: u8, // 1-5
}

impl Criterion {
    pub fn new(name: impl Into<String>, weight: u8) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            weight,
        }
    }
}

/// Clamps an arbitrary weight into the valid [1, 5] range.
pub fn clamp_weight(weight: i64) -> u8 {
    weight.clamp(i64::from(MIN_WEIGHT), i64::from(MAX_WEIGHT)) as u8
}

/// The criteria a fresh analysis session starts with.
pub fn default_criteria() -> Vec<Criterion> {
    vec![
        Criterion::new("Technical Skills", 4),
        Criterion::new("Relevant Experience", 4),
        Criterion::new("Communication Skills", 3),
    ]
}

/// Rejects blank names and out-of-range weights. Runs before any scoring or
/// AI call; the aggregator itself assumes valid criteria.
pub fn validate_criteria(criteria: &[Criterion]) -> Result<(), EngineError> {
    if criteria.is_empty() {
        return Err(EngineError::Validation(
            "At least one criterion is required".to_string(),
        ));
    }
    for criterion in criteria {
        if criterion.name.trim().is_empty() {
            return Err(EngineError::Validation(
                "Criterion names cannot be blank".to_string(),
            ));
        }
        if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&criterion.weight) {
            return Err(EngineError::Validation(format!(
                "Criterion '{}' has weight {}, expected {MIN_WEIGHT}-{MAX_WEIGHT}",
                criterion.name, criterion.weight
            )));
        }
    }
    Ok(())
}

/// One AI-scored criterion for a single candidate, as returned on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionScore {
    pub criterion_name: String,
    pub score: f64, // 0-100
    pub justification: String,
}
