//! Adapters - Implementations of ports against concrete technology.

pub mod ai;

pub use ai::{GeminiConfig, GeminiProvider, MockError, MockGuidanceProvider, RecordedCall};
