//! WizardController - Orchestrates the symptom-intake wizard.
//!
//! The controller owns the single session and is its sole mutator. The
//! presentation layer drives the wizard exclusively through the operations
//! here and observes state through immutable [`WizardSession`] snapshots.
//!
//! # In-flight discipline
//!
//! At most one provider call is outstanding per session: while
//! `loading` is true the provider-backed operations are ignored. Calls are
//! tagged with a generation counter captured before the await; `reset()`
//! bumps the counter, so a late-arriving response for a pre-reset call is
//! discarded instead of mutating the fresh session.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::foundation::Age;
use crate::domain::wizard::{WizardError, WizardSession, WizardStep};
use crate::ports::GuidanceProvider;

/// Controller owning one wizard session.
pub struct WizardController {
    provider: Arc<dyn GuidanceProvider>,
    session: Mutex<WizardSession>,
    generation: AtomicU64,
}

impl WizardController {
    /// Creates a controller with a fresh session.
    pub fn new(provider: Arc<dyn GuidanceProvider>) -> Self {
        Self {
            provider,
            session: Mutex::new(WizardSession::new()),
            generation: AtomicU64::new(0),
        }
    }

    /// Returns an immutable snapshot of the current session.
    pub fn snapshot(&self) -> WizardSession {
        self.session.lock().unwrap().clone()
    }

    /// Replaces the free-text symptom description as the user types.
    pub fn set_symptoms_text(&self, text: &str) {
        self.session.lock().unwrap().set_symptoms_text(text);
    }

    /// Replaces the optional age. Validation happens at `Age` construction.
    pub fn set_age(&self, age: Option<Age>) {
        self.session.lock().unwrap().set_age(age);
    }

    /// Submits the free-text symptom description (Request A).
    ///
    /// Whitespace-only text is a silent no-op: the step does not change and
    /// the provider is not invoked. On failure the session stays in Input
    /// with an advisory error.
    pub async fn submit_symptoms(&self, text: &str) {
        let generation = {
            let mut session = self.session.lock().unwrap();
            if session.loading || session.step != WizardStep::Input {
                return;
            }
            if text.trim().is_empty() {
                return;
            }
            session.set_symptoms_text(text);
            session.begin_loading();
            self.generation.load(Ordering::SeqCst)
        };

        let result = self.provider.suggest_symptoms(text).await;

        let mut session = self.session.lock().unwrap();
        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!("discarding stale suggestion response after reset");
            return;
        }
        match result {
            Ok(suggestions) => {
                tracing::debug!(count = suggestions.len(), "storing symptom suggestions");
                session.apply_suggestions(suggestions);
            }
            Err(err) => {
                tracing::warn!(error = %err, "symptom suggestion request failed");
                session.fail(WizardError::SuggestionFetchFailed);
            }
        }
    }

    /// Toggles a suggestion label in the confirmed set. Confirm step only.
    pub fn toggle_symptom(&self, label: &str) {
        self.session.lock().unwrap().toggle_symptom(label);
    }

    /// Returns from Confirm to Input, keeping the resubmission context.
    pub fn go_back(&self) {
        self.session.lock().unwrap().go_back();
    }

    /// Requests medication guidance for the combined symptom list
    /// (Request B).
    ///
    /// The combined list always starts with the raw narrative, followed by
    /// every confirmed label. On failure the session stays in Confirm with
    /// an advisory error.
    pub async fn confirm_and_fetch_guidance(&self) {
        let (symptoms, age, generation) = {
            let mut session = self.session.lock().unwrap();
            if session.loading || session.step != WizardStep::Confirm {
                return;
            }
            session.begin_loading();
            (
                session.combined_symptoms(),
                session.age,
                self.generation.load(Ordering::SeqCst),
            )
        };

        let result = self.provider.medication_guidance(&symptoms, age).await;

        let mut session = self.session.lock().unwrap();
        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!("discarding stale guidance response after reset");
            return;
        }
        match result {
            Ok(guidance) => {
                tracing::debug!(confidence = %guidance.confidence, "storing medication guidance");
                session.apply_guidance(guidance);
            }
            Err(err) => {
                tracing::warn!(error = %err, "medication guidance request failed");
                session.fail(WizardError::GuidanceFetchFailed);
            }
        }
    }

    /// Flips the display language. Pure; never touches step or data.
    pub fn toggle_language(&self) {
        self.session.lock().unwrap().toggle_language();
    }

    /// Returns the session to defaults, keeping only the language.
    ///
    /// Bumps the generation counter so an outstanding provider response
    /// cannot land on the fresh session.
    pub fn reset(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.session.lock().unwrap().reset();
    }

    /// Clears a surfaced error. No-op when already clear.
    pub fn dismiss_error(&self) {
        self.session.lock().unwrap().dismiss_error();
    }
}
