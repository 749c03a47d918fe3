//! `vagaja pipeline`: inspect and adjust the selection pipeline model.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use serde_json::json;

use vagaja_engine::pipeline::{PipelineConfig, PIPELINE_FILE};

use crate::config::Config;

#[derive(Args, Debug)]
pub struct PipelineArgs {
    /// Pipeline model file (defaults to the bundled model)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Toggle a stage on or off by id, repeatable
    #[arg(long = "toggle", value_name = "STAGE_ID")]
    pub toggles: Vec<String>,

    /// Override a stage weight as ID=FRACTION, repeatable (clamped into 0-1)
    #[arg(long = "weight", value_name = "ID=FRACTION", value_parser = parse_weight)]
    pub weights: Vec<(String, f64)>,

    /// Print stages and the weight check as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_weight(raw: &str) -> Result<(String, f64), String> {
    let (id, fraction) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ID=FRACTION, got '{raw}'"))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(format!("stage id is empty in '{raw}'"));
    }
    let fraction: f64 = fraction
        .trim()
        .parse()
        .map_err(|_| format!("fraction must be a number in '{raw}'"))?;
    Ok((id.to_string(), fraction))
}

pub fn run(args: PipelineArgs, config: &Config) -> Result<()> {
    let mut pipeline = match args.data.as_ref() {
        Some(path) => PipelineConfig::load(path)?,
        None => match config.data_dir.as_ref() {
            Some(dir) => PipelineConfig::load(&dir.join(PIPELINE_FILE))?,
            None => PipelineConfig::bundled()?,
        },
    };

    for stage_id in &args.toggles {
        match pipeline.toggle_stage(stage_id) {
            Some(enabled) => {
                let state = if enabled { "enabled" } else { "disabled" };
                println!("Stage '{stage_id}' is now {state}");
            }
            None => bail!("Unknown stage id '{stage_id}'"),
        }
    }

    for (stage_id, fraction) in &args.weights {
        match pipeline.set_weight(stage_id, *fraction) {
            Some(weight) => {
                println!("Stage '{stage_id}' weight set to {:.0}%", weight * 100.0)
            }
            None => bail!("Unknown stage id '{stage_id}'"),
        }
    }

    let check = pipeline.check_weights();

    if args.json {
        let output = json!({
            "stages": pipeline.stages(),
            "weightCheck": check,
            "formula": pipeline.formula(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Selection pipeline");
    for stage_config in pipeline.stages() {
        let stage = &stage_config.stage;
        let marker = if stage_config.enabled { "x" } else { " " };
        let mut line = format!("- [{marker}] {} ({})", stage.name, stage.id);
        if stage.mandatory {
            line.push_str(" | mandatory");
        }
        if stage.weight > 0.0 {
            line.push_str(&format!(" | weight {:.0}%", stage.weight * 100.0));
        }
        if stage.duration > 0 {
            line.push_str(&format!(" | ~{} min", stage.duration));
        }
        println!("{line}");
    }

    println!("\nTotal weight: {:.0}%", check.total_weight * 100.0);
    if !check.is_valid {
        println!("Warning: enabled stage weights must sum to 100% for a correct final score.");
    }
    println!("Score formula: {}", pipeline.formula());

    Ok(())
}
