//! Answer types for the interactive setup questions.
//!
//! Every question asked by the collector has a closed set of valid answers,
//! and each of those sets is modelled here as an enum. This keeps the preset
//! derivation and the dependency tables exhaustive at compile time.

pub mod language;
pub mod package_manager;
pub mod tools;

pub use language::Language;
pub use package_manager::PackageManager;
pub use tools::{Tool, ToolPreset};
