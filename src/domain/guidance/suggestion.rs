//! Provider-issued symptom suggestions.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::BilingualText;

/// A refined symptom suggestion returned by the guidance provider.
///
/// Immutable once issued; the `id` is a provider-chosen stable identifier
/// within a single suggestion batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomSuggestion {
    pub id: String,
    pub label: BilingualText,
}

impl SymptomSuggestion {
    /// Creates a new suggestion.
    pub fn new(id: impl Into<String>, label: BilingualText) -> Self {
        Self {
            id: id.into(),
            label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Language;

    #[test]
    fn suggestion_label_localizes() {
        let s = SymptomSuggestion::new("s1", BilingualText::new("Dry cough", "வறட்டு இருமல்"));
        assert_eq!(s.label.localized(Language::En), "Dry cough");
        assert_eq!(s.label.localized(Language::Ta), "வறட்டு இருமல்");
    }
}
