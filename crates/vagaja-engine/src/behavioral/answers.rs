//! Answer sheets: typed, validated input for the three scorers.
//!
//! Input invariants live here (Likert range, DISC slot exclusivity) so the
//! scorers themselves stay trusting and pure.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::behavioral::disc::DiscDimension;
use crate::error::EngineError;

/// The three supported assessment kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestType {
    #[serde(rename = "big-five")]
    BigFive,
    #[serde(rename = "disc")]
    Disc,
    #[serde(rename = "sjt")]
    Sjt,
}

impl TestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestType::BigFive => "big-five",
            TestType::Disc => "disc",
            TestType::Sjt => "sjt",
        }
    }
}

/// One completed answer sheet, tagged by test kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "test", content = "answers")]
pub enum AnswerSet {
    #[serde(rename = "big-five")]
    BigFive(BigFiveAnswers),
    #[serde(rename = "disc")]
    Disc(DiscAnswers),
    #[serde(rename = "sjt")]
    Sjt(SjtAnswers),
}

impl AnswerSet {
    pub fn test_type(&self) -> TestType {
        match self {
            AnswerSet::BigFive(_) => TestType::BigFive,
            AnswerSet::Disc(_) => TestType::Disc,
            AnswerSet::Sjt(_) => TestType::Sjt,
        }
    }

    /// Re-checks the input-layer invariants. Sheets built through the
    /// recording methods always hold them; sheets deserialized from JSON
    /// must be validated before scoring.
    pub fn validate(&self) -> Result<(), EngineError> {
        match self {
            AnswerSet::BigFive(answers) => answers.validate(),
            AnswerSet::Disc(answers) => answers.validate(),
            AnswerSet::Sjt(_) => Ok(()),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Big Five (Likert 1-5)
// ────────────────────────────────────────────────────────────────────────────

pub const LIKERT_MIN: u8 = 1;
pub const LIKERT_MAX: u8 = 5;

/// Likert answers keyed by question id. Unanswered questions are absent,
/// and absence is meaningful: the scorer never substitutes a neutral value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BigFiveAnswers {
    responses: BTreeMap<String, u8>,
}

impl BigFiveAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one Likert response. Values outside 1-5 are rejected.
    pub fn record(
        &mut self,
        question_id: impl Into<String>,
        value: u8,
    ) -> Result<(), EngineError> {
        if !(LIKERT_MIN..=LIKERT_MAX).contains(&value) {
            return Err(EngineError::Validation(format!(
                "Likert value {value} outside {LIKERT_MIN}-{LIKERT_MAX}"
            )));
        }
        self.responses.insert(question_id.into(), value);
        Ok(())
    }

    pub fn get(&self, question_id: &str) -> Option<u8> {
        self.responses.get(question_id).copied()
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        for (question_id, value) in &self.responses {
            if !(LIKERT_MIN..=LIKERT_MAX).contains(value) {
                return Err(EngineError::Validation(format!(
                    "Question {question_id}: Likert value {value} outside {LIKERT_MIN}-{LIKERT_MAX}"
                )));
            }
        }
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// DISC (forced choice most/least)
// ────────────────────────────────────────────────────────────────────────────

/// The most/least slots for one DISC question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscSelection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most: Option<DiscDimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub least: Option<DiscDimension>,
}

/// Forced-choice selections keyed by question id.
///
/// The selection methods reproduce the picker behavior: choosing the value a
/// slot already holds clears that slot, and choosing a value held by the
/// opposite slot steals it. most != least holds after any call sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscAnswers {
    selections: BTreeMap<String, DiscSelection>,
}

impl DiscAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_most(&mut self, question_id: impl Into<String>, dimension: DiscDimension) {
        let slot = self.selections.entry(question_id.into()).or_default();
        if slot.most == Some(dimension) {
            slot.most = None;
            return;
        }
        if slot.least == Some(dimension) {
            slot.least = None;
        }
        slot.most = Some(dimension);
    }

    pub fn select_least(&mut self, question_id: impl Into<String>, dimension: DiscDimension) {
        let slot = self.selections.entry(question_id.into()).or_default();
        if slot.least == Some(dimension) {
            slot.least = None;
            return;
        }
        if slot.most == Some(dimension) {
            slot.most = None;
        }
        slot.least = Some(dimension);
    }

    pub fn get(&self, question_id: &str) -> Option<&DiscSelection> {
        self.selections.get(question_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &DiscSelection)> {
        self.selections.iter()
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Rejects sheets where a question holds the same dimension in both slots.
    pub fn validate(&self) -> Result<(), EngineError> {
        for (question_id, selection) in &self.selections {
            if let (Some(most), Some(least)) = (selection.most, selection.least) {
                if most == least {
                    return Err(EngineError::Validation(format!(
                        "Question {question_id}: most and least are both {most}"
                    )));
                }
            }
        }
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Situational judgment (one option per scenario)
// ────────────────────────────────────────────────────────────────────────────

/// Chosen option ids keyed by scenario id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SjtAnswers {
    choices: BTreeMap<String, String>,
}

impl SjtAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the chosen option for a scenario, replacing any earlier choice.
    pub fn choose(&mut self, scenario_id: impl Into<String>, option_id: impl Into<String>) {
        self.choices.insert(scenario_id.into(), option_id.into());
    }

    pub fn get(&self, scenario_id: &str) -> Option<&str> {
        self.choices.get(scenario_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }
}
