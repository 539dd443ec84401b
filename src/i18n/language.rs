//! Supported interface languages and their tags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::ui::Style;

/// Language the assistant backend always answers in.
pub const BASE_LANGUAGE: Language = Language::English;

/// A language the client can display and translate into.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    French,
    Ewondo,
    Douala,
    Bassa,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error(
    "Invalid language: '{0}'\n\n\
     Supported languages: english, french, ewondo, douala, bassa\n\
     Run 'medichat languages' to see all of them."
)]
pub struct LanguageError(pub String);

impl Language {
    pub const ALL: [Self; 5] = [
        Self::English,
        Self::French,
        Self::Ewondo,
        Self::Douala,
        Self::Bassa,
    ];

    /// Tag used on the wire and in stored preferences.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::French => "french",
            Self::Ewondo => "ewondo",
            Self::Douala => "douala",
            Self::Bassa => "bassa",
        }
    }

    /// Name of the language in the language itself.
    pub const fn label(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::French => "Français",
            Self::Ewondo => "Ewondo",
            Self::Douala => "Duala",
            Self::Bassa => "Bassa",
        }
    }

    /// BCP 47 voice used for speech synthesis.
    ///
    /// The Cameroonian languages have no synthesis voices, so they use French.
    pub const fn voice(self) -> &'static str {
        match self {
            Self::English => "en-US",
            Self::French | Self::Ewondo | Self::Douala | Self::Bassa => "fr-FR",
        }
    }

    pub const fn is_base(self) -> bool {
        matches!(self, Self::English)
    }

    /// Parses a language tag, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag is not one of the supported languages.
    pub fn parse(tag: &str) -> Result<Self, LanguageError> {
        let normalized = tag.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.tag() == normalized)
            .ok_or_else(|| LanguageError(tag.to_string()))
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Prints all supported languages to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported languages"));
    for lang in Language::ALL {
        let marker = if lang.is_base() {
            format!(" {}", Style::default_marker())
        } else {
            String::new()
        };
        println!(
            "  {:8} {}{marker}",
            Style::code(lang.tag()),
            Style::secondary(lang.label())
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_tags() {
        assert_eq!(Language::parse("english"), Ok(Language::English));
        assert_eq!(Language::parse("French"), Ok(Language::French));
        assert_eq!(Language::parse(" bassa "), Ok(Language::Bassa));
    }

    #[test]
    fn test_parse_invalid_tag() {
        let err = Language::parse("klingon").unwrap_err();
        assert!(err.to_string().contains("klingon"));
        assert!(Language::parse("").is_err());
    }

    #[test]
    fn test_tags_round_trip_through_display() {
        for lang in Language::ALL {
            assert_eq!(lang.to_string().parse::<Language>(), Ok(lang));
        }
    }

    #[test]
    fn test_cameroonian_languages_use_french_voice() {
        assert_eq!(Language::English.voice(), "en-US");
        assert_eq!(Language::Ewondo.voice(), "fr-FR");
        assert_eq!(Language::Douala.voice(), "fr-FR");
    }

    #[test]
    fn test_only_english_is_base() {
        assert!(BASE_LANGUAGE.is_base());
        assert!(!Language::French.is_base());
    }
}
