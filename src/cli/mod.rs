// Command-line entry adapters
pub mod commands;
pub mod prompt;

pub use commands::*;
pub use prompt::*;
