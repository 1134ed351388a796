use crate::core::models::*;
use crate::utils::Result;
use async_trait::async_trait;
use std::path::Path;

/// File system operations interface
#[async_trait]
pub trait FileSystemService: Send + Sync {
    async fn read_file(&self, path: &Path) -> Result<String>;
    async fn write_file(&self, path: &Path, content: &str) -> Result<()>;
    async fn create_directory(&self, path: &Path) -> Result<()>;
    fn file_exists(&self, path: &Path) -> bool;
}

/// External minifying compiler.
///
/// Receives the whole compilation unit and the flag set, and returns the
/// transformed text together with whatever the compiler reported.
#[async_trait]
pub trait JsCompiler: Send + Sync {
    async fn compile(&self, unit: &CompilationUnit, flags: &CompilerFlags) -> Result<CompilerResult>;
}
