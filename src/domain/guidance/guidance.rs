//! Medication guidance record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AgeGroup, BilingualList, BilingualText, ConfidenceScore};

/// Dosage guidance keyed by the four fixed age groups.
///
/// `Some("")` means the provider explicitly marked the group as not
/// recommended; `None` means the provider omitted the group entirely.
/// Renderers must treat the two differently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DosageTable {
    pub infant: Option<String>,
    pub child: Option<String>,
    pub adult: Option<String>,
    pub elderly: Option<String>,
}

impl DosageTable {
    /// Returns the dosage entry for the given age group.
    pub fn for_group(&self, group: AgeGroup) -> Option<&str> {
        match group {
            AgeGroup::Infant => self.infant.as_deref(),
            AgeGroup::Child => self.child.as_deref(),
            AgeGroup::Adult => self.adult.as_deref(),
            AgeGroup::Elderly => self.elderly.as_deref(),
        }
    }

    /// Returns true if the group carries a usable dosage string.
    ///
    /// Empty string means "not recommended", which is present but unusable.
    pub fn is_recommended_for(&self, group: AgeGroup) -> bool {
        self.for_group(group).is_some_and(|d| !d.is_empty())
    }
}

/// Complete guidance record for one wizard run.
///
/// Immutable once received from the provider; advisory only, never a
/// diagnosis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationGuidance {
    pub possible_condition: BilingualText,
    pub medicine: BilingualText,
    pub dosage: DosageTable,
    pub timing: BilingualText,
    pub duration: BilingualText,
    pub confidence: ConfidenceScore,
    pub precautions: BilingualList,
}
