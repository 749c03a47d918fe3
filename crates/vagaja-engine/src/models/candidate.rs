//! Candidate models: per-CV analysis output and the ranked candidate.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::criteria::CriterionScore;

/// One work-experience entry extracted from a CV. `dates` stays free text
/// ("Jan 2020 - Present"); it is displayed, never parsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub job_title: String,
    pub company: String,
    pub dates: String,
    pub description: String,
}

/// One education entry extracted from a CV.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub dates: String,
}

/// Raw per-CV output of the AI analysis, before aggregation.
/// The list fields default to empty when the model omits them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub candidate_name: String,
    pub scores: Vec<CriterionScore>,
    #[serde(default)]
    pub work_experience: Vec<WorkExperience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// A ranked candidate: one analysis result joined with its weighted overall.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: Uuid,
    pub name: String,
    pub overall_score: f64,
    pub scores: Vec<CriterionScore>,
    pub work_experience: Vec<WorkExperience>,
    pub education: Vec<Education>,
    pub skills: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_analysis_result_parses_camel_case_wire_shape() {
        let raw = json!({
            "candidateName": "Ana Souza",
            "scores": [
                {
                    "criterionName": "Technical Skills",
                    "score": 85,
                    "justification": "Five years of backend work."
                }
            ],
            "workExperience": [
                {
                    "jobTitle": "Backend Engineer",
                    "company": "Acme",
                    "dates": "2019 - 2024",
                    "description": "Built billing services."
                }
            ],
            "education": [
                {
                    "degree": "BSc Computer Science",
                    "institution": "USP",
                    "dates": "2015 - 2019"
                }
            ],
            "skills": ["Rust", "PostgreSQL"]
        });

        let result: AnalysisResult = serde_json::from_value(raw).unwrap();
        assert_eq!(result.candidate_name, "Ana Souza");
        assert_eq!(result.scores.len(), 1);
        assert_eq!(result.scores[0].score, 85.0);
        assert_eq!(result.work_experience[0].job_title, "Backend Engineer");
        assert_eq!(result.education[0].institution, "USP");
        assert_eq!(result.skills, vec!["Rust", "PostgreSQL"]);
    }

    #[test]
    fn test_analysis_result_tolerates_missing_lists() {
        let raw = json!({
            "candidateName": "Bruno Lima",
            "scores": []
        });

        let result: AnalysisResult = serde_json::from_value(raw).unwrap();
        assert!(result.work_experience.is_empty());
        assert!(result.education.is_empty());
        assert!(result.skills.is_empty());
    }
}
