//! Bilingual value pairs.
//!
//! Provider content arrives with an English and a Tamil rendering of the
//! same value. These pair types carry both and defer the language choice
//! to display time, so no per-field language branching leaks into callers.

use serde::{Deserialize, Serialize};

use super::Language;

/// A string carrying both language renderings of the same content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BilingualText {
    pub en: String,
    pub ta: String,
}

impl BilingualText {
    /// Creates a new bilingual text pair.
    pub fn new(en: impl Into<String>, ta: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ta: ta.into(),
        }
    }

    /// Returns the rendering for the given language.
    pub fn localized(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Ta => &self.ta,
        }
    }
}

/// A sequence of strings carrying both language renderings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BilingualList {
    pub en: Vec<String>,
    pub ta: Vec<String>,
}

impl BilingualList {
    /// Creates a new bilingual list pair.
    pub fn new(en: Vec<String>, ta: Vec<String>) -> Self {
        Self { en, ta }
    }

    /// Returns the sequence for the given language.
    pub fn localized(&self, language: Language) -> &[String] {
        match language {
            Language::En => &self.en,
            Language::Ta => &self.ta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bilingual_text_localizes_per_language() {
        let text = BilingualText::new("Fever", "காய்ச்சல்");
        assert_eq!(text.localized(Language::En), "Fever");
        assert_eq!(text.localized(Language::Ta), "காய்ச்சல்");
    }

    #[test]
    fn bilingual_list_localizes_per_language() {
        let list = BilingualList::new(
            vec!["Drink fluids".to_string()],
            vec!["திரவங்கள் குடிக்கவும்".to_string()],
        );
        assert_eq!(list.localized(Language::En), ["Drink fluids".to_string()]);
        assert_eq!(list.localized(Language::Ta).len(), 1);
    }

    #[test]
    fn bilingual_text_round_trips_through_json() {
        let text = BilingualText::new("Headache", "தலைவலி");
        let json = serde_json::to_string(&text).unwrap();
        let back: BilingualText = serde_json::from_str(&json).unwrap();
        assert_eq!(text, back);
    }
}
