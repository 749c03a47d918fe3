//! Big Five scoring: Likert sums per dimension with proportional bands.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::behavioral::answers::{BigFiveAnswers, LIKERT_MAX};
use crate::behavioral::catalog::BigFiveTest;

/// Interpretation band for one dimension, relative to that dimension's own
/// maximum: above two thirds is High, below one third is Low, and exact
/// boundaries fall into Moderate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpretationBand {
    High,
    Moderate,
    Low,
}

impl InterpretationBand {
    /// Integer comparison only; a zero-question dimension (max 0) lands in
    /// Moderate without any division.
    pub fn classify(raw: u32, max: u32) -> Self {
        if 3 * raw > 2 * max {
            InterpretationBand::High
        } else if 3 * raw < max {
            InterpretationBand::Low
        } else {
            InterpretationBand::Moderate
        }
    }
}

/// One dimension's scored result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionScore {
    pub dimension: String,
    /// Display name from the catalog.
    pub name: String,
    pub raw: u32,
    pub max: u32,
    pub percentage: f64,
    pub band: InterpretationBand,
}

/// All dimensions, in catalog declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BigFiveReport {
    pub dimensions: Vec<DimensionScore>,
}

impl BigFiveReport {
    pub fn dimension(&self, id: &str) -> Option<&DimensionScore> {
        self.dimensions.iter().find(|d| d.dimension == id)
    }
}

/// Scores a Big Five answer sheet against a catalog document.
///
/// Every declared dimension is reported, even with no answered questions.
/// Questions tagged with an undeclared dimension are ignored. Unanswered
/// questions contribute nothing. Each dimension's maximum is its own
/// question count times 5.
pub fn score_big_five(answers: &BigFiveAnswers, test: &BigFiveTest) -> BigFiveReport {
    let mut raw_sums: BTreeMap<&str, u32> = test
        .dimensions
        .iter()
        .map(|dimension| (dimension.id.as_str(), 0))
        .collect();
    let mut question_counts: BTreeMap<&str, u32> = test
        .dimensions
        .iter()
        .map(|dimension| (dimension.id.as_str(), 0))
        .collect();

    for question in &test.questions {
        match question_counts.get_mut(question.dimension.as_str()) {
            Some(count) => *count += 1,
            None => continue, // dimension not declared by the catalog
        }
        if let Some(value) = answers.get(&question.id) {
            if let Some(sum) = raw_sums.get_mut(question.dimension.as_str()) {
                *sum += u32::from(value);
            }
        }
    }

    let dimensions = test
        .dimensions
        .iter()
        .map(|info| {
            let raw = raw_sums.get(info.id.as_str()).copied().unwrap_or(0);
            let count = question_counts.get(info.id.as_str()).copied().unwrap_or(0);
            let max = count * u32::from(LIKERT_MAX);
            let percentage = if max > 0 {
                f64::from(raw) / f64::from(max) * 100.0
            } else {
                0.0
            };
            DimensionScore {
                dimension: info.id.clone(),
                name: info.name.clone(),
                raw,
                max,
                percentage,
                band: InterpretationBand::classify(raw, max),
            }
        })
        .collect();

    BigFiveReport { dimensions }
}
