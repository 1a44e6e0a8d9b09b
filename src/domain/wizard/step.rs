//! Wizard step enum.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// The three wizard screens, exactly one active at a time.
///
/// `Input` is the initial step and the target of every reset. No step is
/// entered on a timer; only user actions and provider responses move the
/// wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    #[default]
    Input,
    Confirm,
    Results,
}

impl StateMachine for WizardStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        use WizardStep::*;
        matches!(
            (self, target),
            (Input, Confirm) | (Confirm, Input) | (Confirm, Results) | (Results, Input)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use WizardStep::*;
        match self {
            Input => vec![Confirm],
            Confirm => vec![Input, Results],
            Results => vec![Input],
        }
    }
}

impl WizardStep {
    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            WizardStep::Input => "Input",
            WizardStep::Confirm => "Confirm",
            WizardStep::Results => "Results",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
