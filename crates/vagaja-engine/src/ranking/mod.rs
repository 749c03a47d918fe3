//! Ranking turns per-CV analysis results into a sorted candidate list.

pub mod aggregate;

use std::cmp::Ordering;

use tracing::debug;
use uuid::Uuid;

use crate::models::candidate::{AnalysisResult, Candidate};
use crate::models::criteria::Criterion;

use aggregate::aggregate_overall_score;

/// Joins one analysis result with its computed overall score.
pub fn build_candidate(result: AnalysisResult, criteria: &[Criterion]) -> Candidate {
    let overall_score = aggregate_overall_score(&result.scores, criteria);
    Candidate {
        id: Uuid::new_v4(),
        name: result.candidate_name,
        overall_score,
        scores: result.scores,
        work_experience: result.work_experience,
        education: result.education,
        skills: result.skills,
    }
}

/// Builds and ranks candidates, best overall first.
///
/// The sort is stable: candidates with equal overalls keep their input order.
pub fn rank_candidates(results: Vec<AnalysisResult>, criteria: &[Criterion]) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = results
        .into_iter()
        .map(|result| build_candidate(result, criteria))
        .collect();

    candidates.sort_by(|a, b| {
        b.overall_score
            .partial_cmp(&a.overall_score)
            .unwrap_or(Ordering::Equal)
    });

    debug!("Ranked {} candidate(s)", candidates.len());
    candidates
}
