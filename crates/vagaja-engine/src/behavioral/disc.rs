//! DISC scoring: net most/least counts per dimension.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::behavioral::answers::DiscAnswers;

/// The four DISC dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DiscDimension {
    D,
    I,
    S,
    C,
}

impl DiscDimension {
    pub const ALL: [DiscDimension; 4] = [
        DiscDimension::D,
        DiscDimension::I,
        DiscDimension::S,
        DiscDimension::C,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DiscDimension::D => "D",
            DiscDimension::I => "I",
            DiscDimension::S => "S",
            DiscDimension::C => "C",
        }
    }

    /// Classic DISC display label.
    pub fn label(&self) -> &'static str {
        match self {
            DiscDimension::D => "Dominance",
            DiscDimension::I => "Influence",
            DiscDimension::S => "Steadiness",
            DiscDimension::C => "Conscientiousness",
        }
    }
}

impl fmt::Display for DiscDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Net scores per dimension. For N answered questions each score lies in
/// [-N, +N].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscReport {
    pub scores: BTreeMap<DiscDimension, i32>,
}

impl DiscReport {
    pub fn score(&self, dimension: DiscDimension) -> i32 {
        self.scores.get(&dimension).copied().unwrap_or(0)
    }
}

/// Scores a DISC answer sheet.
///
/// Every dimension starts at 0; each answered question adds +1 to its `most`
/// dimension and -1 to its `least` dimension. An empty slot contributes
/// nothing. The sheet's most != least invariant is trusted, not re-checked.
pub fn score_disc(answers: &DiscAnswers) -> DiscReport {
    let mut scores: BTreeMap<DiscDimension, i32> = DiscDimension::ALL
        .iter()
        .map(|dimension| (*dimension, 0))
        .collect();

    for (_question_id, selection) in answers.iter() {
        if let Some(most) = selection.most {
            *scores.entry(most).or_insert(0) += 1;
        }
        if let Some(least) = selection.least {
            *scores.entry(least).or_insert(0) -= 1;
        }
    }

    DiscReport { scores }
}
