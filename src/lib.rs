//! Build pipeline for the GlobWeb/AstroWeb library.
//!
//! A build profile picks which source groups participate, the assembler
//! turns that into an ordered compilation unit, the external Closure
//! Compiler minifies it, and the result is written with a license header.

pub mod cli;
pub mod core;
pub mod infrastructure;
pub mod utils;

pub use crate::core::{
    assemble, ArtifactPackager, BuildConfiguration, BuildLayout, BuildProfile, CompilationUnit,
    CompilerFlags, CompilerOrchestrator, CompilerResult, GlobWebBuildService, JsCompiler,
    OptimizationMode, ProfileResolver, SourceCatalog,
};
pub use crate::utils::{BuildError, Result};
