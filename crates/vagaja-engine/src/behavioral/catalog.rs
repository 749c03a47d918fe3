//! Questionnaire catalogs, the read-only documents the scorers run against.
//!
//! The documents keep their original Portuguese wire keys (`teste`,
//! `perguntas`, `dimensao`, ...); field names stay English in Rust.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Canonical catalog file names inside a data directory.
pub const BIG_FIVE_FILE: &str = "big_five_questions.json";
pub const DISC_FILE: &str = "disc_questions.json";
pub const SJT_FILE: &str = "sjt_scenarios.json";

// ────────────────────────────────────────────────────────────────────────────
// Big Five
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BigFiveDocument {
    #[serde(rename = "teste")]
    pub test: BigFiveTest,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BigFiveTest {
    #[serde(rename = "perguntas")]
    pub questions: Vec<BigFiveQuestion>,
    #[serde(rename = "dimensoes")]
    pub dimensions: Vec<DimensionInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BigFiveQuestion {
    pub id: String,
    #[serde(rename = "dimensao")]
    pub dimension: String,
    #[serde(rename = "texto")]
    pub text: String,
}

/// A personality dimension declared by the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionInfo {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: String,
}

// ────────────────────────────────────────────────────────────────────────────
// DISC
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscDocument {
    #[serde(rename = "teste")]
    pub test: Vec<DiscQuestion>,
}

/// A forced-choice word group: one descriptive word per DISC dimension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscQuestion {
    pub id: String,
    #[serde(rename = "opcoes")]
    pub options: BTreeMap<String, String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Situational judgment
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SjtDocument {
    #[serde(rename = "teste")]
    pub test: Vec<SjtScenario>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SjtScenario {
    pub id: String,
    #[serde(rename = "texto")]
    pub text: String,
    #[serde(rename = "opcoes")]
    pub options: Vec<SjtOption>,
}

/// One response option. `points` maps competency ids to awarded points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SjtOption {
    pub id: String,
    #[serde(rename = "texto")]
    pub text: String,
    #[serde(rename = "pontos")]
    pub points: BTreeMap<String, i32>,
}

// ────────────────────────────────────────────────────────────────────────────
// Library
// ────────────────────────────────────────────────────────────────────────────

/// The three questionnaire documents bundled together.
#[derive(Debug, Clone)]
pub struct TestLibrary {
    pub big_five: BigFiveDocument,
    pub disc: DiscDocument,
    pub sjt: SjtDocument,
}

impl TestLibrary {
    /// Parses the documents shipped with the crate.
    pub fn bundled() -> Result<Self, EngineError> {
        Ok(Self {
            big_five: serde_json::from_str(include_str!("../../assets/big_five_questions.json"))?,
            disc: serde_json::from_str(include_str!("../../assets/disc_questions.json"))?,
            sjt: serde_json::from_str(include_str!("../../assets/sjt_scenarios.json"))?,
        })
    }

    /// Loads the documents from a directory using the canonical file names.
    pub fn load_from_dir(dir: &Path) -> Result<Self, EngineError> {
        Ok(Self {
            big_five: load_document(&dir.join(BIG_FIVE_FILE))?,
            disc: load_document(&dir.join(DISC_FILE))?,
            sjt: load_document(&dir.join(SJT_FILE))?,
        })
    }
}

/// Reads and parses one JSON document from disk.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T, EngineError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
