//! Pipeline configuration: stage enablement and score-weight validation.
//!
//! A bad weight total only warns; it never blocks saving or running a
//! pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::behavioral::catalog::load_document;
use crate::error::EngineError;

/// Canonical pipeline model file name.
pub const PIPELINE_FILE: &str = "modelo_selecao_vaga_ja.json";

/// Enabled weights must round to exactly this percentage.
pub const TARGET_PERCENT: i64 = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineDocument {
    #[serde(rename = "processo_seletivo")]
    pub selection_process: SelectionProcess,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionProcess {
    #[serde(rename = "etapas_disponiveis")]
    pub available_stages: Vec<StageDefinition>,
    #[serde(rename = "regras_score")]
    pub score_rules: ScoreRules,
}

/// The scoring formula, surfaced verbatim for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRules {
    pub formula: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageDefinition {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "formato")]
    pub format: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "obrigatorio")]
    pub mandatory: bool,
    /// Fraction of the overall score, in [0, 1].
    #[serde(rename = "peso_score")]
    pub weight: f64,
    #[serde(rename = "exemplo")]
    pub example: String,
    /// Estimated duration in minutes; 0 means untimed.
    pub duration: u32,
}

/// One stage with its recruiter-facing enablement flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageConfig {
    #[serde(flatten)]
    pub stage: StageDefinition,
    pub enabled: bool,
}

/// A configurable selection pipeline built from the catalog document.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    stages: Vec<StageConfig>,
    formula: String,
}

impl PipelineConfig {
    /// Builds the initial configuration: mandatory stages and stages with a
    /// positive weight start enabled.
    pub fn from_document(document: &PipelineDocument) -> Self {
        let stages = document
            .selection_process
            .available_stages
            .iter()
            .map(|stage| StageConfig {
                enabled: stage.mandatory || stage.weight > 0.0,
                stage: stage.clone(),
            })
            .collect();
        Self {
            stages,
            formula: document.selection_process.score_rules.formula.clone(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let document: PipelineDocument = load_document(path)?;
        Ok(Self::from_document(&document))
    }

    /// Builds the configuration from the model shipped with the crate.
    pub fn bundled() -> Result<Self, EngineError> {
        let document: PipelineDocument =
            serde_json::from_str(include_str!("../assets/modelo_selecao_vaga_ja.json"))?;
        Ok(Self::from_document(&document))
    }

    pub fn stages(&self) -> &[StageConfig] {
        &self.stages
    }

    pub fn formula(&self) -> &str {
        &self.formula
    }

    /// Flips a stage's enablement and returns the resulting flag, or None
    /// for unknown ids. Mandatory stages stay enabled; toggling them is a
    /// no-op.
    pub fn toggle_stage(&mut self, stage_id: &str) -> Option<bool> {
        let config = self.stages.iter_mut().find(|s| s.stage.id == stage_id)?;
        if !config.stage.mandatory {
            config.enabled = !config.enabled;
        }
        Some(config.enabled)
    }

    /// Sets a stage's weight, clamped into [0, 1]. Returns the stored value,
    /// or None for unknown ids.
    pub fn set_weight(&mut self, stage_id: &str, weight: f64) -> Option<f64> {
        let config = self.stages.iter_mut().find(|s| s.stage.id == stage_id)?;
        config.stage.weight = weight.clamp(0.0, 1.0);
        Some(config.stage.weight)
    }

    pub fn check_weights(&self) -> WeightCheck {
        validate_stage_weights(&self.stages)
    }
}

/// Result of the weight check. `is_valid` means the enabled weights round to
/// exactly 100%.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightCheck {
    pub total_weight: f64,
    pub is_valid: bool,
}

/// Sums weights over stages that are enabled and carry a positive weight.
pub fn validate_stage_weights(stages: &[StageConfig]) -> WeightCheck {
    let total_weight: f64 = stages
        .iter()
        .filter(|config| config.enabled && config.stage.weight > 0.0)
        .map(|config| config.stage.weight)
        .sum();

    let is_valid = (total_weight * 100.0).round() as i64 == TARGET_PERCENT;
    if !is_valid {
        warn!(
            "Enabled stage weights sum to {:.0}%, expected {}%",
            total_weight * 100.0,
            TARGET_PERCENT
        );
    }

    WeightCheck {
        total_weight,
        is_valid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_stage(id: &str, mandatory: bool, weight: f64) -> StageDefinition {
        StageDefinition {
            id: id.to_string(),
            name: format!("Stage {id}"),
            kind: "online".to_string(),
            format: "formulario".to_string(),
            description: String::new(),
            mandatory,
            weight,
            example: String::new(),
            duration: 10,
        }
    }

    fn make_document(stages: Vec<StageDefinition>) -> PipelineDocument {
        PipelineDocument {
            selection_process: SelectionProcess {
                available_stages: stages,
                score_rules: ScoreRules {
                    formula: "score_final = soma(etapa.score * etapa.peso)".to_string(),
                },
            },
        }
    }

    fn enabled_config(weights: &[f64]) -> Vec<StageConfig> {
        weights
            .iter()
            .enumerate()
            .map(|(i, weight)| StageConfig {
                stage: make_stage(&format!("s{i}"), false, *weight),
                enabled: true,
            })
            .collect()
    }

    #[test]
    fn test_over_allocated_weights_are_invalid() {
        let check = validate_stage_weights(&enabled_config(&[0.5, 0.3, 0.25]));
        assert!((check.total_weight - 1.05).abs() < 1e-9);
        assert!(!check.is_valid);
    }

    #[test]
    fn test_exact_total_is_valid() {
        let check = validate_stage_weights(&enabled_config(&[0.4, 0.6]));
        assert!(check.is_valid);
    }

    #[test]
    fn test_rounding_tolerance_at_half_percent() {
        // 99.5% rounds half away from zero to 100%
        let check = validate_stage_weights(&enabled_config(&[0.995]));
        assert!(check.is_valid);

        let check = validate_stage_weights(&enabled_config(&[0.994]));
        assert!(!check.is_valid);
    }

    #[test]
    fn test_disabled_stages_excluded_from_total() {
        let mut stages = enabled_config(&[0.5, 0.5, 0.5]);
        stages[2].enabled = false;

        let check = validate_stage_weights(&stages);
        assert!(check.is_valid, "Two enabled halves sum to 100%");
    }

    #[test]
    fn test_zero_weight_enabled_stages_excluded() {
        let mut stages = enabled_config(&[1.0]);
        stages.push(StageConfig {
            stage: make_stage("registration", true, 0.0),
            enabled: true,
        });

        let check = validate_stage_weights(&stages);
        assert!((check.total_weight - 1.0).abs() < 1e-9);
        assert!(check.is_valid);
    }

    #[test]
    fn test_initial_enablement_mandatory_or_weighted() {
        let document = make_document(vec![
            make_stage("registration", true, 0.0),
            make_stage("interview", false, 0.3),
            make_stage("group_dynamics", false, 0.0),
        ]);

        let config = PipelineConfig::from_document(&document);
        assert!(config.stages()[0].enabled, "Mandatory starts enabled");
        assert!(config.stages()[1].enabled, "Weighted starts enabled");
        assert!(!config.stages()[2].enabled, "Optional zero-weight starts disabled");
    }

    #[test]
    fn test_toggle_mandatory_stage_is_noop() {
        let document = make_document(vec![make_stage("registration", true, 0.0)]);
        let mut config = PipelineConfig::from_document(&document);

        assert_eq!(config.toggle_stage("registration"), Some(true));
        assert!(config.stages()[0].enabled);
    }

    #[test]
    fn test_toggle_optional_stage_flips() {
        let document = make_document(vec![make_stage("interview", false, 0.3)]);
        let mut config = PipelineConfig::from_document(&document);

        assert_eq!(config.toggle_stage("interview"), Some(false));
        assert_eq!(config.toggle_stage("interview"), Some(true));
    }

    #[test]
    fn test_toggle_unknown_stage_returns_none() {
        let mut config = PipelineConfig::from_document(&make_document(vec![]));
        assert_eq!(config.toggle_stage("ghost"), None);
    }

    #[test]
    fn test_set_weight_clamps_to_unit_interval() {
        let document = make_document(vec![make_stage("interview", false, 0.3)]);
        let mut config = PipelineConfig::from_document(&document);

        assert_eq!(config.set_weight("interview", 1.5), Some(1.0));
        assert_eq!(config.set_weight("interview", -0.2), Some(0.0));
        assert_eq!(config.set_weight("interview", 0.45), Some(0.45));
    }

    #[test]
    fn test_formula_surfaced_verbatim() {
        let config = PipelineConfig::from_document(&make_document(vec![]));
        assert_eq!(config.formula(), "score_final = soma(etapa.score * etapa.peso)");
    }

    #[test]
    fn test_bundled_model_defaults_are_valid() {
        let config = PipelineConfig::bundled().unwrap();
        assert!(!config.stages().is_empty());
        let check = config.check_weights();
        assert!(
            check.is_valid,
            "Shipped default weights must sum to 100%, got {}",
            check.total_weight
        );
    }

    #[test]
    fn test_stage_config_serializes_flat() {
        let config = StageConfig {
            stage: make_stage("interview", false, 0.3),
            enabled: true,
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["id"], "interview");
        assert_eq!(json["peso_score"], 0.3);
        assert_eq!(json["enabled"], true);
    }
}
