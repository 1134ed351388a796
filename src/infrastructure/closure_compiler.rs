use crate::core::{interfaces::JsCompiler, models::*};
use crate::utils::{BuildError, ErrorContext, Logger, Result};
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;

/// Closure Compiler run as `java -jar compiler.jar`.
///
/// Minified code is read from stdout, warnings and errors from stderr.
pub struct ClosureCompiler {
    java: PathBuf,
    jar: PathBuf,
}

impl ClosureCompiler {
    pub fn new(java: impl Into<PathBuf>, jar: impl Into<PathBuf>) -> Self {
        Self {
            java: java.into(),
            jar: jar.into(),
        }
    }

    /// Arguments after the java executable: `-jar <jar> <flags> --js <file>...`
    pub fn command_args(&self, unit: &CompilationUnit, flags: &CompilerFlags) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::with_capacity(2 + flags.as_args().len() + unit.len() * 2);
        args.push("-jar".into());
        args.push(self.jar.clone().into_os_string());
        args.extend(flags.as_args().iter().map(OsString::from));
        for path in unit {
            args.push("--js".into());
            args.push(path.clone().into_os_string());
        }
        args
    }
}

#[async_trait]
impl JsCompiler for ClosureCompiler {
    async fn compile(&self, unit: &CompilationUnit, flags: &CompilerFlags) -> Result<CompilerResult> {
        if !self.jar.is_file() {
            return Err(BuildError::FileNotFound(self.jar.clone()));
        }

        Logger::debug(&format!(
            "Running {} -jar {} with {} inputs",
            self.java.display(),
            self.jar.display(),
            unit.len()
        ));

        // No timeout: the build waits for the compiler to finish.
        let output = Command::new(&self.java)
            .args(self.command_args(unit, flags))
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                BuildError::compiler_with_context(
                    format!("failed to start {}", self.java.display()),
                    ErrorContext::new()
                        .with_file(self.jar.clone())
                        .with_detail(e.to_string()),
                )
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let mut diagnostic = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() && diagnostic.trim().is_empty() {
            diagnostic = format!("compiler exited with {}", output.status);
        }

        Ok(CompilerResult {
            output: stdout,
            diagnostic: if diagnostic.trim().is_empty() {
                None
            } else {
                Some(diagnostic)
            },
        })
    }
}
