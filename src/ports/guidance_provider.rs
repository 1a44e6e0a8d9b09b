//! Guidance Provider Port - Interface to the external AI capability.
//!
//! The wizard core depends only on this request/response contract; the
//! provider's internal reasoning is opaque. Adapters implement the port
//! against a concrete API (or as a mock for tests).
//!
//! # Contract
//!
//! - `suggest_symptoms` returns a batch of 5-8 bilingual suggestions, or
//!   fails atomically. A structurally invalid response is a failure, never
//!   a partial result.
//! - `medication_guidance` returns one complete guidance record with all
//!   bilingual fields, dosage keyed by the four fixed age groups, and a
//!   confidence score in [0,100].

use async_trait::async_trait;

use crate::domain::foundation::Age;
use crate::domain::guidance::{MedicationGuidance, SymptomSuggestion};

/// Port for the external AI guidance capability.
#[async_trait]
pub trait GuidanceProvider: Send + Sync {
    /// Refines a free-text symptom description into a suggestion batch
    /// (Request A).
    async fn suggest_symptoms(
        &self,
        text: &str,
    ) -> Result<Vec<SymptomSuggestion>, ProviderError>;

    /// Produces medication guidance from the combined symptom list and
    /// optional age (Request B). The first list element is the raw
    /// narrative; the rest are confirmed labels.
    async fn medication_guidance(
        &self,
        symptoms: &[String],
        age: Option<Age>,
    ) -> Result<MedicationGuidance, ProviderError>;
}

/// Guidance provider errors.
///
/// The wizard collapses every variant into a single advisory error per
/// call site; the variants exist so adapters and logs can tell transport,
/// protocol, and schema failures apart.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },

    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Provider returned an unexpected HTTP status.
    #[error("http status {status}: {message}")]
    Http {
        /// Status code.
        status: u16,
        /// Error details.
        message: String,
    },

    /// Response did not match the expected schema.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates an HTTP status error.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// Creates an invalid response error.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }
}
