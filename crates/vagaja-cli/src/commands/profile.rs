//! `vagaja profile`: view and edit the locally saved candidate profile.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};

use vagaja_engine::profile::{CandidateProfile, JsonFileStore, ProfileStore};

use crate::config::Config;

const DEFAULT_PROFILE_FILE: &str = "vagaja_profile.json";

#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    /// Show the saved profile
    Get,
    /// Save a profile, replacing any existing one
    Set(SetArgs),
    /// Delete the saved profile
    Clear,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Candidate name
    #[arg(long)]
    pub name: String,

    /// Contact email
    #[arg(long)]
    pub email: String,

    /// Contact phone
    #[arg(long)]
    pub phone: Option<String>,

    /// Desired role
    #[arg(long)]
    pub role: String,
}

pub fn run(command: ProfileCommand, store_path: Option<PathBuf>, config: &Config) -> Result<()> {
    let path = store_path
        .or_else(|| config.profile_path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PROFILE_FILE));
    let store = JsonFileStore::new(path);

    match command {
        ProfileCommand::Get => match store.load() {
            Some(profile) => print_profile(&profile),
            None => println!("No profile saved."),
        },
        ProfileCommand::Set(args) => {
            let profile = CandidateProfile::new(args.name, args.email, args.phone, args.role);
            store.save(&profile)?;
            println!("Profile saved to {}", store.path().display());
        }
        ProfileCommand::Clear => {
            store.clear()?;
            println!("Profile cleared.");
        }
    }
    Ok(())
}

fn print_profile(profile: &CandidateProfile) {
    println!("Name:         {}", profile.name);
    println!("Email:        {}", profile.email);
    if let Some(phone) = &profile.phone {
        println!("Phone:        {phone}");
    }
    println!("Desired role: {}", profile.desired_role);
    println!(
        "Saved at:     {}",
        profile.saved_at.format("%Y-%m-%d %H:%M UTC")
    );
}
