//! Language tag for the bilingual UI.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two supported display languages.
///
/// English is the primary language and Tamil the secondary; every
/// user-visible piece of provider content carries both renderings and the
/// active language only selects which one is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ta,
}

impl Language {
    /// Returns the other supported language.
    pub fn toggled(&self) -> Language {
        match self {
            Language::En => Language::Ta,
            Language::Ta => Language::En,
        }
    }

    /// Returns the BCP 47 language tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ta => "ta",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_language_is_english() {
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn toggled_flips_between_the_two_languages() {
        assert_eq!(Language::En.toggled(), Language::Ta);
        assert_eq!(Language::Ta.toggled(), Language::En);
    }

    #[test]
    fn toggled_twice_is_identity() {
        for lang in [Language::En, Language::Ta] {
            assert_eq!(lang.toggled().toggled(), lang);
        }
    }

    #[test]
    fn language_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Language::En).unwrap(), "\"en\"");
        assert_eq!(serde_json::to_string(&Language::Ta).unwrap(), "\"ta\"");
    }
}
