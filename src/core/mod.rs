// Core domain layer
pub mod assembler;
pub mod catalog;
pub mod interfaces;
pub mod models;
pub mod profile;
pub mod services;

pub use assembler::*;
pub use catalog::*;
pub use interfaces::*;
pub use models::*;
pub use profile::*;
pub use services::*;
