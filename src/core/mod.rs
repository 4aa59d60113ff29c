//! Core application functionality
//!
//! Settings, CLI handling and the top-level runner used by the binary.

pub mod cli;
pub mod platform;
pub mod runner;
pub mod settings;

// Re-export commonly used items
pub use cli::CliArgs;
pub use runner::run_app;
pub use settings::{ExportSettings, GenerationSettings, Settings, ValidationSettings};
