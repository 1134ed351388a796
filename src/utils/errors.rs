use std::path::PathBuf;
use thiserror::Error;

/// File context attached to build and compiler errors
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    pub file_path: Option<PathBuf>,
    pub detail: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: PathBuf) -> Self {
        self.file_path = Some(path);
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid profile selector {0}: expected a value from 1 to 4")]
    InvalidProfile(i64),

    #[error("Unknown source group: {0}")]
    UnknownGroup(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Compiler error: {message}")]
    Compiler {
        message: String,
        context: Option<ErrorContext>,
    },
}

impl BuildError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn compiler_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::Compiler {
            message: message.into(),
            context: Some(context),
        }
    }

    /// True for errors raised while resolving the build, before any I/O.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            BuildError::InvalidProfile(_) | BuildError::UnknownGroup(_) | BuildError::Config(_)
        )
    }

    /// Format error with context display
    pub fn format_detailed(&self) -> String {
        match self {
            BuildError::Compiler { message, context } => {
                let mut output = format!("❌ Compiler Error: {}", message);

                if let Some(ctx) = context {
                    if let Some(ref file_path) = ctx.file_path {
                        output.push_str(&format!("\n📁 File: {}", file_path.display()));
                    }
                    if let Some(ref detail) = ctx.detail {
                        output.push_str(&format!("\n📝 {}", detail));
                    }
                }

                output
            }
            BuildError::FileNotFound(path) => {
                format!("❌ File not found\n📁 File: {}", path.display())
            }
            _ => format!("❌ {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, BuildError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_errors_are_classified() {
        assert!(BuildError::InvalidProfile(5).is_configuration_error());
        assert!(BuildError::UnknownGroup("extras".to_string()).is_configuration_error());
        assert!(!BuildError::FileNotFound(PathBuf::from("licence.txt")).is_configuration_error());
    }

    #[test]
    fn test_format_detailed_includes_file() {
        let err = BuildError::compiler_with_context(
            "failed to start",
            ErrorContext::new()
                .with_file(PathBuf::from("/opt/compiler.jar"))
                .with_detail("java: not found"),
        );

        let detailed = err.format_detailed();
        assert!(detailed.contains("failed to start"));
        assert!(detailed.contains("/opt/compiler.jar"));
        assert!(detailed.contains("java: not found"));
    }

    #[test]
    fn test_invalid_profile_message() {
        let err = BuildError::InvalidProfile(5);
        assert_eq!(
            err.to_string(),
            "Invalid profile selector 5: expected a value from 1 to 4"
        );
    }
}
