// Infrastructure layer
pub mod closure_compiler;
pub mod file_system;

pub use closure_compiler::*;
pub use file_system::*;
