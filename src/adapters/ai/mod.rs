//! AI adapters implementing the GuidanceProvider port.

mod gemini_provider;
mod mock_provider;

pub use gemini_provider::{GeminiConfig, GeminiProvider};
pub use mock_provider::{MockError, MockGuidanceProvider, RecordedCall};
