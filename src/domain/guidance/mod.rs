//! Guidance domain types: symptom suggestions and medication guidance.

mod guidance;
mod suggestion;

pub use guidance::{DosageTable, MedicationGuidance};
pub use suggestion::SymptomSuggestion;
