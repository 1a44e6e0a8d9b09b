//! Foundation value objects shared across the domain.

mod age;
mod bilingual;
mod confidence;
mod errors;
mod ids;
mod language;
mod state_machine;

pub use age::{Age, AgeGroup};
pub use bilingual::{BilingualList, BilingualText};
pub use confidence::ConfidenceScore;
pub use errors::ValidationError;
pub use ids::SessionId;
pub use language::Language;
pub use state_machine::StateMachine;
