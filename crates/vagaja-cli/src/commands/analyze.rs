//! `vagaja analyze`: score a batch of CVs against a job description and
//! print the ranked result.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Args;
use tracing::info;

use vagaja_engine::analysis::{
    analyze_and_rank, criteria_from_suggestions, AnalyzeRequest, CandidateAnalyzer,
};
use vagaja_engine::gemini::GeminiClient;
use vagaja_engine::locale::Locale;
use vagaja_engine::models::candidate::Candidate;
use vagaja_engine::models::criteria::{default_criteria, Criterion, MAX_WEIGHT, MIN_WEIGHT};

use crate::commands::{parse_locale, read_text, resolve_locale};
use crate::config::Config;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File containing the job description
    #[arg(long)]
    pub jd: PathBuf,

    /// File containing the CVs, separated by lines of `---`
    #[arg(long)]
    pub cvs: PathBuf,

    /// Evaluation criterion as NAME=WEIGHT, repeatable (weight 1-5)
    #[arg(long = "criterion", value_name = "NAME=WEIGHT", value_parser = parse_criterion)]
    pub criteria: Vec<Criterion>,

    /// Ask the AI to suggest criteria from the job description instead
    #[arg(long, conflicts_with = "criteria")]
    pub suggest: bool,

    /// Output language: en or pt
    #[arg(long, value_parser = parse_locale)]
    pub locale: Option<Locale>,

    /// Print the ranked candidates as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_criterion(raw: &str) -> Result<Criterion, String> {
    let (name, weight) = raw
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=WEIGHT, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("criterion name is empty in '{raw}'"));
    }
    let weight: u8 = weight
        .trim()
        .parse()
        .map_err(|_| format!("weight must be a number in '{raw}'"))?;
    if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&weight) {
        return Err(format!(
            "weight must be between {MIN_WEIGHT} and {MAX_WEIGHT}, got {weight}"
        ));
    }
    Ok(Criterion::new(name, weight))
}

pub async fn run(args: AnalyzeArgs, config: &Config) -> Result<()> {
    let AnalyzeArgs {
        jd,
        cvs,
        criteria,
        suggest,
        locale,
        json,
    } = args;

    let locale = resolve_locale(locale, config)?;
    let client = GeminiClient::new(config.require_api_key()?.to_string());

    let job_description = read_text(&jd)?;
    let cv_bundle = read_text(&cvs)?;

    let criteria = if suggest {
        info!("Requesting criteria suggestions from Gemini");
        let suggestions = client.suggest_criteria(&job_description, locale).await?;
        let suggested = criteria_from_suggestions(suggestions);
        if suggested.is_empty() {
            bail!("The AI returned no usable criteria; pass --criterion instead");
        }
        suggested
    } else if criteria.is_empty() {
        default_criteria()
    } else {
        criteria
    };

    let ranked = analyze_and_rank(
        Arc::new(client),
        AnalyzeRequest {
            job_description,
            cv_bundle,
            criteria,
            locale,
        },
    )
    .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
    } else {
        print_ranking(&ranked);
    }
    Ok(())
}

fn print_ranking(candidates: &[Candidate]) {
    println!("Ranked candidates");
    for (position, candidate) in candidates.iter().enumerate() {
        println!(
            "\n{}. {} (overall {:.1})",
            position + 1,
            candidate.name,
            candidate.overall_score
        );
        for score in &candidate.scores {
            println!(
                "   - {}: {:.0} | {}",
                score.criterion_name, score.score, score.justification
            );
        }
        if !candidate.skills.is_empty() {
            println!("   Skills: {}", candidate.skills.join(", "));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_criterion_name_and_weight() {
        let criterion = parse_criterion("Technical Skills=4").unwrap();
        assert_eq!(criterion.name, "Technical Skills");
        assert_eq!(criterion.weight, 4);
    }

    #[test]
    fn test_parse_criterion_trims_whitespace() {
        let criterion = parse_criterion("  Communication = 3 ").unwrap();
        assert_eq!(criterion.name, "Communication");
        assert_eq!(criterion.weight, 3);
    }

    #[test]
    fn test_parse_criterion_keeps_equals_signs_in_name() {
        // rsplit: only the last '=' separates the weight
        let criterion = parse_criterion("C++=5").unwrap();
        assert_eq!(criterion.name, "C++");
        assert_eq!(criterion.weight, 5);
    }

    #[test]
    fn test_parse_criterion_rejects_bad_input() {
        assert!(parse_criterion("no-weight").is_err());
        assert!(parse_criterion("=4").is_err());
        assert!(parse_criterion("Name=abc").is_err());
        assert!(parse_criterion("Name=0").is_err());
        assert!(parse_criterion("Name=6").is_err());
    }
}
