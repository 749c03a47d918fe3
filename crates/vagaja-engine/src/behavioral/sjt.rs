//! Situational judgment scoring: competency point accumulation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::behavioral::answers::SjtAnswers;
use crate::behavioral::catalog::SjtScenario;

/// Points a scenario is assumed to award on its primary competency.
/// Display scaling only; never validated against the authored data.
pub const POINTS_PER_SCENARIO: i32 = 5;

/// Accumulated competency totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SjtReport {
    pub competencies: BTreeMap<String, i32>,
    /// Scenario count times 5, the conventional display ceiling per competency.
    pub display_max: i32,
}

impl SjtReport {
    pub fn competency(&self, id: &str) -> i32 {
        self.competencies.get(id).copied().unwrap_or(0)
    }
}

/// Scores an SJT answer sheet against the scenario list.
///
/// Every competency mentioned anywhere in the document starts at 0, so a
/// competency that never received points still reports. Unanswered scenarios
/// contribute nothing. A recorded option id that no longer exists in the
/// document is skipped silently.
pub fn score_sjt(answers: &SjtAnswers, scenarios: &[SjtScenario]) -> SjtReport {
    let mut competencies: BTreeMap<String, i32> = BTreeMap::new();
    for scenario in scenarios {
        for option in &scenario.options {
            for competency in option.points.keys() {
                competencies.entry(competency.clone()).or_insert(0);
            }
        }
    }

    for scenario in scenarios {
        if let Some(option_id) = answers.get(&scenario.id) {
            match scenario.options.iter().find(|option| option.id == option_id) {
                Some(option) => {
                    for (competency, points) in &option.points {
                        *competencies.entry(competency.clone()).or_insert(0) += points;
                    }
                }
                None => {
                    debug!(
                        "Option '{}' no longer exists in scenario '{}', skipped",
                        option_id, scenario.id
                    );
                }
            }
        }
    }

    SjtReport {
        display_max: scenarios.len() as i32 * POINTS_PER_SCENARIO,
        competencies,
    }
}
