//! Wizard error kinds.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::localization::UiStrings;

/// The two advisory error kinds a wizard run can surface.
///
/// Every provider failure, whatever its transport-level cause, collapses
/// into the kind matching the request that failed. Both are recoverable
/// and user-dismissable; neither is fatal to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardError {
    /// The symptom suggestion request failed. Retry by resubmitting.
    #[error("unable to analyze symptoms")]
    SuggestionFetchFailed,

    /// The medication guidance request failed. Retry from Confirm or go back.
    #[error("unable to generate guidance")]
    GuidanceFetchFailed,
}

impl WizardError {
    /// Returns the localized advisory message for this error.
    pub fn message<'a>(&self, strings: &'a UiStrings) -> &'a str {
        match self {
            WizardError::SuggestionFetchFailed => strings.suggestion_error,
            WizardError::GuidanceFetchFailed => strings.guidance_error,
        }
    }
}
