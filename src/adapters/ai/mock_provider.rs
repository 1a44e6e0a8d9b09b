//! Mock Guidance Provider for testing.
//!
//! Provides a configurable mock implementation of the GuidanceProvider
//! port, allowing tests to run without calling the real AI API.
//!
//! # Features
//!
//! - Pre-configured responses per request kind
//! - Simulated delays for in-flight-state testing
//! - Error injection for failure-path testing
//! - Call tracking for verification

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::foundation::{Age, BilingualText};
use crate::domain::guidance::{MedicationGuidance, SymptomSuggestion};
use crate::ports::{GuidanceProvider, ProviderError};

/// Mock guidance provider for testing.
///
/// Configurable to return specific responses, simulate delays, or inject
/// errors. Each request kind consumes its own response queue in order.
#[derive(Debug, Clone, Default)]
pub struct MockGuidanceProvider {
    suggestion_responses: Arc<Mutex<VecDeque<Result<Vec<SymptomSuggestion>, MockError>>>>,
    guidance_responses: Arc<Mutex<VecDeque<Result<MedicationGuidance, MockError>>>>,
    delay: Duration,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

/// A recorded provider call, for test assertions.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    /// Request A with the submitted free text.
    Suggest { text: String },
    /// Request B with the combined symptom list and optional age.
    Guidance {
        symptoms: Vec<String>,
        age: Option<Age>,
    },
}

/// Mock error kinds for testing error handling.
#[derive(Debug, Clone)]
pub enum MockError {
    /// Simulate a network failure.
    Network { message: String },
    /// Simulate a timeout.
    Timeout { timeout_secs: u32 },
    /// Simulate an authentication failure.
    AuthenticationFailed,
    /// Simulate an unexpected HTTP status.
    Http { status: u16, message: String },
    /// Simulate a schema-invalid response.
    InvalidResponse { message: String },
}

impl From<MockError> for ProviderError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::Network { message } => ProviderError::network(message),
            MockError::Timeout { timeout_secs } => ProviderError::Timeout { timeout_secs },
            MockError::AuthenticationFailed => ProviderError::AuthenticationFailed,
            MockError::Http { status, message } => ProviderError::http(status, message),
            MockError::InvalidResponse { message } => ProviderError::invalid_response(message),
        }
    }
}

impl MockGuidanceProvider {
    /// Creates a new mock provider with empty queues.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful suggestion batch.
    pub fn with_suggestions(self, suggestions: Vec<SymptomSuggestion>) -> Self {
        self.suggestion_responses
            .lock()
            .unwrap()
            .push_back(Ok(suggestions));
        self
    }

    /// Queues a suggestion failure.
    pub fn with_suggestion_error(self, error: MockError) -> Self {
        self.suggestion_responses
            .lock()
            .unwrap()
            .push_back(Err(error));
        self
    }

    /// Queues a successful guidance record.
    pub fn with_guidance(self, guidance: MedicationGuidance) -> Self {
        self.guidance_responses
            .lock()
            .unwrap()
            .push_back(Ok(guidance));
        self
    }

    /// Queues a guidance failure.
    pub fn with_guidance_error(self, error: MockError) -> Self {
        self.guidance_responses
            .lock()
            .unwrap()
            .push_back(Err(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of calls made to this provider.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Clears the call history.
    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Builds a batch of `count` numbered bilingual suggestions.
    pub fn sample_suggestions(count: usize) -> Vec<SymptomSuggestion> {
        (1..=count)
            .map(|i| {
                SymptomSuggestion::new(
                    format!("s{}", i),
                    BilingualText::new(format!("Symptom {}", i), format!("அறிகுறி {}", i)),
                )
            })
            .collect()
    }
}

#[async_trait]
impl GuidanceProvider for MockGuidanceProvider {
    async fn suggest_symptoms(
        &self,
        text: &str,
    ) -> Result<Vec<SymptomSuggestion>, ProviderError> {
        self.calls.lock().unwrap().push(RecordedCall::Suggest {
            text: text.to_string(),
        });

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        let next = self.suggestion_responses.lock().unwrap().pop_front();
        match next {
            Some(Ok(suggestions)) => Ok(suggestions),
            Some(Err(err)) => Err(err.into()),
            None => Ok(Self::sample_suggestions(5)),
        }
    }

    async fn medication_guidance(
        &self,
        symptoms: &[String],
        age: Option<Age>,
    ) -> Result<MedicationGuidance, ProviderError> {
        self.calls.lock().unwrap().push(RecordedCall::Guidance {
            symptoms: symptoms.to_vec(),
            age,
        });

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        let next = self.guidance_responses.lock().unwrap().pop_front();
        match next {
            Some(Ok(guidance)) => Ok(guidance),
            Some(Err(err)) => Err(err.into()),
            None => Err(ProviderError::invalid_response(
                "no guidance response configured",
            )),
        }
    }
}
