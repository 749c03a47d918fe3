//! `vagaja suggest`: ask the AI for evaluation criteria.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use vagaja_engine::analysis::{criteria_from_suggestions, CandidateAnalyzer};
use vagaja_engine::gemini::GeminiClient;
use vagaja_engine::locale::Locale;

use crate::commands::{parse_locale, read_text, resolve_locale};
use crate::config::Config;

#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// File containing the job description
    #[arg(long)]
    pub jd: PathBuf,

    /// Output language: en or pt
    #[arg(long, value_parser = parse_locale)]
    pub locale: Option<Locale>,
}

pub async fn run(args: SuggestArgs, config: &Config) -> Result<()> {
    let locale = resolve_locale(args.locale, config)?;
    let client = GeminiClient::new(config.require_api_key()?.to_string());
    let job_description = read_text(&args.jd)?;

    let suggestions = client.suggest_criteria(&job_description, locale).await?;
    let criteria = criteria_from_suggestions(suggestions);

    if criteria.is_empty() {
        println!("No usable criteria were suggested.");
        return Ok(());
    }

    println!("Suggested criteria");
    for criterion in &criteria {
        println!("- {} (weight {})", criterion.name, criterion.weight);
    }
    Ok(())
}
