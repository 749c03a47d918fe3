//! Explicit language selection for localized operations.
//!
//! Every prompt builder takes a `Locale` value; nothing reads global
//! language state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Supported interface languages. The recruiting flows were written for a
/// Brazilian audience first, so Portuguese is the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    #[default]
    Pt,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Pt => "pt",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = EngineError;

    /// Accepts bare codes and full language tags ("en-US", "pt-BR") by prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        if tag.starts_with("en") {
            Ok(Locale::En)
        } else if tag.starts_with("pt") {
            Ok(Locale::Pt)
        } else {
            Err(EngineError::Validation(format!("Unsupported locale: {s}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_bare_codes() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("pt".parse::<Locale>().unwrap(), Locale::Pt);
    }

    #[test]
    fn test_parses_full_language_tags() {
        assert_eq!("en-US".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("pt-BR".parse::<Locale>().unwrap(), Locale::Pt);
    }

    #[test]
    fn test_default_is_portuguese() {
        assert_eq!(Locale::default(), Locale::Pt);
    }

    #[test]
    fn test_rejects_unsupported_tags() {
        assert!("fr".parse::<Locale>().is_err());
        assert!("".parse::<Locale>().is_err());
    }
}
