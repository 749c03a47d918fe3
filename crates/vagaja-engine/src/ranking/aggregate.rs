//! Weighted aggregation of per-criterion AI scores into one overall score.

use tracing::debug;

use crate::models::criteria::{Criterion, CriterionScore};

/// Computes the weighted overall score for one candidate.
///
/// Each score is matched to a criterion by exact name; the first criterion
/// with that name wins. Scores with no matching criterion are excluded from
/// both the numerator and the denominator. Returns 0.0 when no weight was
/// matched at all.
///
/// The result is not rounded here; presentation layers round for display.
pub fn aggregate_overall_score(scores: &[CriterionScore], criteria: &[Criterion]) -> f64 {
    let mut total_weighted = 0.0_f64;
    let mut total_weight = 0.0_f64;

    for scored in scores {
        if let Some(criterion) = criteria.iter().find(|c| c.name == scored.criterion_name) {
            total_weighted += scored.score * f64::from(criterion.weight);
            total_weight += f64::from(criterion.weight);
        } else {
            debug!(
                "Score for unknown criterion '{}' excluded from aggregation",
                scored.criterion_name
            );
        }
    }

    if total_weight > 0.0 {
        total_weighted / total_weight
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::criteria::Criterion;

    fn make_score(name: &str, score: f64) -> CriterionScore {
        CriterionScore {
            criterion_name: name.to_string(),
            score,
            justification: "test".to_string(),
        }
    }

    #[test]
    fn test_weighted_mean_of_matched_scores() {
        let criteria = vec![
            Criterion::new("Technical Skills", 4),
            Criterion::new("Relevant Experience", 4),
            Criterion::new("Communication Skills", 3),
        ];
        let scores = vec![
            make_score("Technical Skills", 80.0),
            make_score("Relevant Experience", 60.0),
            make_score("Communication Skills", 90.0),
        ];

        let overall = aggregate_overall_score(&scores, &criteria);
        // (80*4 + 60*4 + 90*3) / 11 = 830/11
        assert!(
            (overall - 830.0 / 11.0).abs() < 1e-9,
            "Expected 830/11, got {overall}"
        );
    }

    #[test]
    fn test_unmatched_score_excluded_from_both_sides() {
        let criteria = vec![Criterion::new("Technical Skills", 4)];
        let scores = vec![
            make_score("Technical Skills", 80.0),
            make_score("Leadership", 10.0), // no such criterion
        ];

        let overall = aggregate_overall_score(&scores, &criteria);
        assert_eq!(overall, 80.0, "Unmatched score must not dilute the mean");
    }

    #[test]
    fn test_no_matches_returns_zero() {
        let criteria = vec![Criterion::new("Technical Skills", 4)];
        let scores = vec![make_score("Leadership", 95.0)];

        assert_eq!(aggregate_overall_score(&scores, &criteria), 0.0);
    }

    #[test]
    fn test_empty_scores_returns_zero() {
        let criteria = vec![Criterion::new("Technical Skills", 4)];
        assert_eq!(aggregate_overall_score(&[], &criteria), 0.0);
    }

    #[test]
    fn test_overall_bounded_by_matched_scores() {
        let criteria = vec![
            Criterion::new("Technical Skills", 5),
            Criterion::new("Communication Skills", 1),
        ];
        let scores = vec![
            make_score("Technical Skills", 40.0),
            make_score("Communication Skills", 90.0),
        ];

        let overall = aggregate_overall_score(&scores, &criteria);
        assert!(overall >= 40.0 && overall <= 90.0, "Got {overall}");
    }

    #[test]
    fn test_duplicate_criterion_names_first_match_wins() {
        let criteria = vec![
            Criterion::new("Technical Skills", 5),
            Criterion::new("Technical Skills", 1),
            Criterion::new("Communication Skills", 5),
        ];
        let scores = vec![
            make_score("Technical Skills", 70.0),
            make_score("Communication Skills", 30.0),
        ];

        let overall = aggregate_overall_score(&scores, &criteria);
        // First match (weight 5): (70*5 + 30*5) / 10 = 50.
        // Had the weight-1 duplicate won: (70*1 + 30*5) / 6, about 36.7.
        assert!(
            (overall - 50.0).abs() < 1e-9,
            "Expected 50 with first-match weight 5, got {overall}"
        );
    }
}
