//! Settings adapters - implementations of `SettingsProvider`.
//!
//! - `InMemorySettings` - process-local store for tests and demos
//! - `JsonFileSettings` - single JSON file with atomic replace

mod in_memory;
mod json_file;

pub use in_memory::InMemorySettings;
pub use json_file::JsonFileSettings;
