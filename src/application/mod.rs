//! Application layer: the wizard controller.

mod wizard;

pub use wizard::WizardController;
