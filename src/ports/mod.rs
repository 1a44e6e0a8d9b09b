//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.

mod guidance_provider;

pub use guidance_provider::{GuidanceProvider, ProviderError};
