//! Subcommand implementations. Each module owns its clap `Args` struct and a
//! `run` function; `main.rs` only dispatches.

pub mod analyze;
pub mod pipeline;
pub mod profile;
pub mod suggest;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use vagaja_engine::error::EngineError;
use vagaja_engine::locale::Locale;

use crate::config::Config;

/// Locale precedence: `--locale` flag, then `VAGAJA_LOCALE`, then Portuguese.
pub fn resolve_locale(flag: Option<Locale>, config: &Config) -> Result<Locale> {
    if let Some(locale) = flag {
        return Ok(locale);
    }
    match config.locale.as_deref() {
        Some(raw) => Ok(raw.parse()?),
        None => Ok(Locale::default()),
    }
}

/// Clap value parser for `--locale`.
pub fn parse_locale(raw: &str) -> Result<Locale, String> {
    raw.parse().map_err(|e: EngineError| e.to_string())
}

/// Reads a UTF-8 text file, naming the path in the error message.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Could not read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_locale(locale: Option<&str>) -> Config {
        Config {
            gemini_api_key: None,
            locale: locale.map(str::to_string),
            data_dir: None,
            profile_path: None,
            rust_log: "info".to_string(),
        }
    }

    #[test]
    fn test_resolve_locale_defaults_to_portuguese() {
        let locale = resolve_locale(None, &config_with_locale(None)).unwrap();
        assert_eq!(locale, Locale::Pt);
    }

    #[test]
    fn test_resolve_locale_reads_environment() {
        let locale = resolve_locale(None, &config_with_locale(Some("en-US"))).unwrap();
        assert_eq!(locale, Locale::En);
    }

    #[test]
    fn test_resolve_locale_flag_wins_over_environment() {
        let locale = resolve_locale(Some(Locale::Pt), &config_with_locale(Some("en-US"))).unwrap();
        assert_eq!(locale, Locale::Pt);
    }

    #[test]
    fn test_resolve_locale_rejects_unknown_environment_value() {
        assert!(resolve_locale(None, &config_with_locale(Some("fr-FR"))).is_err());
    }

    #[test]
    fn test_parse_locale_accepts_both_languages() {
        assert_eq!(parse_locale("en").unwrap(), Locale::En);
        assert_eq!(parse_locale("pt-BR").unwrap(), Locale::Pt);
        assert!(parse_locale("de").is_err());
    }
}
