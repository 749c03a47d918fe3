//! Batch CV analysis.
//!
//! The [`CandidateAnalyzer`] trait is the seam between the scoring engine and
//! the AI backend. [`analyze_and_rank`] fans one task out per CV, waits for
//! all of them, and hands the results to the ranking module. The batch is
//! all-or-nothing: a single failed CV fails the whole run.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::EngineError;
use crate::gemini::{prompts, schema, GeminiClient};
use crate::locale::Locale;
use crate::models::candidate::{AnalysisResult, Candidate};
use crate::models::criteria::{clamp_weight, validate_criteria, Criterion};
use crate::ranking::rank_candidates;

/// Separator line between CVs pasted as a single block of text.
pub const CV_DELIMITER: &str = "---";

/// One AI-proposed evaluation criterion, before clamping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestedCriterion {
    pub name: String,
    pub weight: i64,
}

/// Anything that can score a CV against a job description.
///
/// The production implementation is [`GeminiClient`]; tests substitute a stub.
#[async_trait]
pub trait CandidateAnalyzer: Send + Sync {
    /// Scores one CV against the job description on every criterion.
    async fn analyze(
        &self,
        job_description: &str,
        candidate_cv: &str,
        criteria: &[Criterion],
        locale: Locale,
    ) -> Result<AnalysisResult, EngineError>;

    /// Proposes evaluation criteria for a job description.
    async fn suggest_criteria(
        &self,
        job_description: &str,
        locale: Locale,
    ) -> Result<Vec<SuggestedCriterion>, EngineError>;
}

#[async_trait]
impl CandidateAnalyzer for GeminiClient {
    async fn analyze(
        &self,
        job_description: &str,
        candidate_cv: &str,
        criteria: &[Criterion],
        locale: Locale,
    ) -> Result<AnalysisResult, EngineError> {
        let prompt = prompts::analysis_prompt(locale, job_description, candidate_cv, criteria);
        self.generate_json::<AnalysisResult>(&prompt, schema::analysis_schema())
            .await
            .map_err(|e| EngineError::Analysis(e.to_string()))
    }

    async fn suggest_criteria(
        &self,
        job_description: &str,
        locale: Locale,
    ) -> Result<Vec<SuggestedCriterion>, EngineError> {
        let prompt = prompts::suggestion_prompt(locale, job_description);
        self.generate_json::<Vec<SuggestedCriterion>>(&prompt, schema::suggestion_schema())
            .await
            .map_err(|e| EngineError::Analysis(e.to_string()))
    }
}

/// Splits a pasted block of CVs on the `---` delimiter, dropping
/// whitespace-only segments.
pub fn split_cv_bundle(bundle: &str) -> Vec<&str> {
    bundle
        .split(CV_DELIMITER)
        .filter(|segment| !segment.trim().is_empty())
        .collect()
}

/// Turns AI suggestions into usable criteria: blank names are dropped,
/// weights are clamped into [1, 5].
pub fn criteria_from_suggestions(suggestions: Vec<SuggestedCriterion>) -> Vec<Criterion> {
    suggestions
        .into_iter()
        .filter(|suggestion| !suggestion.name.trim().is_empty())
        .map(|suggestion| Criterion::new(suggestion.name, clamp_weight(suggestion.weight)))
        .collect()
}

/// Everything one batch analysis needs.
#[derive(Debug, Clone)]
pub struct AnalyzeRequest {
    pub job_description: String,
    pub cv_bundle: String,
    pub criteria: Vec<Criterion>,
    pub locale: Locale,
}

/// Runs the full batch: validate, split, analyze every CV concurrently,
/// then rank by weighted overall score.
///
/// Results are collected in input order, so equal scores rank in the order
/// the CVs were pasted.
pub async fn analyze_and_rank(
    analyzer: Arc<dyn CandidateAnalyzer>,
    request: AnalyzeRequest,
) -> Result<Vec<Candidate>, EngineError> {
    if request.job_description.trim().is_empty() {
        return Err(EngineError::Validation(
            "Job description cannot be empty".to_string(),
        ));
    }
    validate_criteria(&request.criteria)?;

    let cvs: Vec<String> = split_cv_bundle(&request.cv_bundle)
        .into_iter()
        .map(str::to_owned)
        .collect();
    if cvs.is_empty() {
        return Err(EngineError::Validation(
            "No CVs found in input".to_string(),
        ));
    }

    info!("Analyzing {} CV(s)", cvs.len());

    let job_description = Arc::new(request.job_description);
    let criteria = Arc::new(request.criteria);
    let locale = request.locale;

    let mut handles = Vec::with_capacity(cvs.len());
    for cv in cvs {
        let analyzer = Arc::clone(&analyzer);
        let job_description = Arc::clone(&job_description);
        let criteria = Arc::clone(&criteria);
        handles.push(tokio::spawn(async move {
            analyzer
                .analyze(job_description.as_str(), &cv, criteria.as_slice(), locale)
                .await
        }));
    }

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        match handle.await {
            Ok(Ok(result)) => {
                debug!("Analyzed candidate: {}", result.candidate_name);
                results.push(result);
            }
            Ok(Err(e)) => {
                warn!("Candidate analysis failed: {}", e);
                return Err(e);
            }
            Err(e) => {
                return Err(EngineError::Internal(format!(
                    "Analysis task panicked: {e}"
                )));
            }
        }
    }

    Ok(rank_candidates(results, criteria.as_slice()))
}
