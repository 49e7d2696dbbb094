//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SettingsProvider` - Company settings storage (current plan, segment, name)

mod settings_provider;

pub use settings_provider::{CompanySettings, SettingsProvider};
