//! Adapters - Implementations of port interfaces.
//!
//! - `settings` - Company settings stores (in-memory, JSON file)

pub mod settings;

pub use settings::{InMemorySettings, JsonFileSettings};
