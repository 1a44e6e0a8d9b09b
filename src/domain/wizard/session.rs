//! Wizard session entity.
//!
//! Tracks the complete state of one wizard run, independent of the
//! guidance provider. The session is a value type: observers receive
//! clones, and every mutation goes through the named methods here (driven
//! by the application controller, the sole mutator).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Age, Language, SessionId, StateMachine};
use crate::domain::guidance::{MedicationGuidance, SymptomSuggestion};

use super::{WizardError, WizardStep};

/// Complete state of a wizard session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WizardSession {
    pub session_id: SessionId,
    pub language: Language,
    pub symptoms_text: String,
    pub age: Option<Age>,
    pub step: WizardStep,
    pub suggested_symptoms: Vec<SymptomSuggestion>,
    /// Labels selected on the Confirm step, in selection order. The label
    /// text is whichever language rendering was active at selection time.
    pub confirmed_symptoms: Vec<String>,
    pub results: Option<MedicationGuidance>,
    pub loading: bool,
    pub error: Option<WizardError>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WizardSession {
    /// Creates a fresh session with default state.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            session_id: SessionId::new(),
            language: Language::default(),
            symptoms_text: String::new(),
            age: None,
            step: WizardStep::Input,
            suggested_symptoms: Vec::new(),
            confirmed_symptoms: Vec::new(),
            results: None,
            loading: false,
            error: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the free-text symptom description.
    pub fn set_symptoms_text(&mut self, text: impl Into<String>) {
        self.symptoms_text = text.into();
        self.touch();
    }

    /// Replaces the optional age.
    pub fn set_age(&mut self, age: Option<Age>) {
        self.age = age;
        self.touch();
    }

    /// Marks a provider call as outstanding and clears any prior error.
    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.error = None;
        self.touch();
    }

    /// Stores a suggestion batch and advances to the Confirm step.
    ///
    /// Previously confirmed labels that no longer appear in the new batch
    /// are dropped, keeping `confirmed_symptoms` a subset of the suggested
    /// labels.
    pub fn apply_suggestions(&mut self, suggestions: Vec<SymptomSuggestion>) {
        if !self.step.can_transition_to(&WizardStep::Confirm) {
            return;
        }
        self.confirmed_symptoms
            .retain(|label| suggestions.iter().any(|s| s.label.en == *label || s.label.ta == *label));
        self.suggested_symptoms = suggestions;
        self.step = WizardStep::Confirm;
        self.loading = false;
        self.touch();
    }

    /// Stores a guidance record and advances to the Results step.
    pub fn apply_guidance(&mut self, guidance: MedicationGuidance) {
        if !self.step.can_transition_to(&WizardStep::Results) {
            return;
        }
        self.results = Some(guidance);
        self.step = WizardStep::Results;
        self.loading = false;
        self.touch();
    }

    /// Records a failed provider call, leaving the step unchanged.
    pub fn fail(&mut self, error: WizardError) {
        self.loading = false;
        self.error = Some(error);
        self.touch();
    }

    /// Toggles a label in the confirmed set. Confirm step only.
    pub fn toggle_symptom(&mut self, label: &str) {
        if self.step != WizardStep::Confirm {
            return;
        }
        if let Some(pos) = self.confirmed_symptoms.iter().position(|s| s == label) {
            self.confirmed_symptoms.remove(pos);
        } else {
            self.confirmed_symptoms.push(label.to_string());
        }
        self.touch();
    }

    /// Returns from Confirm to Input, keeping text, age, and suggestions
    /// so the user can refine and resubmit.
    pub fn go_back(&mut self) {
        if self.step != WizardStep::Confirm {
            return;
        }
        self.step = WizardStep::Input;
        self.touch();
    }

    /// Flips the display language. Never touches step or data.
    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
        self.touch();
    }

    /// Clears a surfaced error. No-op when already clear.
    pub fn dismiss_error(&mut self) {
        if self.error.is_some() {
            self.error = None;
            self.touch();
        }
    }

    /// Returns every field except `language` to its default.
    pub fn reset(&mut self) {
        self.symptoms_text = String::new();
        self.age = None;
        self.step = WizardStep::Input;
        self.suggested_symptoms = Vec::new();
        self.confirmed_symptoms = Vec::new();
        self.results = None;
        self.loading = false;
        self.error = None;
        self.touch();
    }

    /// Builds the combined symptom list for the guidance request: the raw
    /// narrative first, then every confirmed label. The narrative is always
    /// included even when redundant with confirmed labels.
    pub fn combined_symptoms(&self) -> Vec<String> {
        let mut all = Vec::with_capacity(1 + self.confirmed_symptoms.len());
        all.push(self.symptoms_text.clone());
        all.extend(self.confirmed_symptoms.iter().cloned());
        all
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}
