//! Care Compass - Bilingual Symptom Intake Wizard
//!
//! This crate implements the interaction core of a symptom-intake wizard:
//! free-text symptoms are refined into a bilingual checklist by an AI
//! guidance provider, and confirmed symptoms produce over-the-counter
//! medication guidance. Presentation layers consume read-only session
//! snapshots and drive the wizard exclusively through the operations on
//! [`application::WizardController`].

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod localization;
pub mod ports;
