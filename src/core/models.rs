use std::fmt;
use std::path::{Path, PathBuf};

/// Logical name of one library source module, relative to the source root
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleId(String);

impl ModuleId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn resolve(&self, root: &Path) -> PathBuf {
        root.join(&self.0)
    }
}

impl From<&str> for ModuleId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ModuleId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Named, ordered set of modules included or excluded together.
/// Module order is dependency order.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceGroup {
    pub name: String,
    pub modules: Vec<ModuleId>,
}

impl SourceGroup {
    pub fn new(name: impl Into<String>, modules: Vec<ModuleId>) -> Self {
        Self {
            name: name.into(),
            modules,
        }
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptimizationMode {
    #[default]
    Simple,
    Advanced,
}

impl OptimizationMode {
    pub fn from_advanced(advanced: bool) -> Self {
        if advanced {
            OptimizationMode::Advanced
        } else {
            OptimizationMode::Simple
        }
    }

    /// Value of the compiler's `--compilation_level` flag
    pub fn compilation_level(&self) -> &'static str {
        match self {
            OptimizationMode::Simple => "SIMPLE_OPTIMIZATIONS",
            OptimizationMode::Advanced => "ADVANCED_OPTIMIZATIONS",
        }
    }

    pub fn requires_exports(&self) -> bool {
        matches!(self, OptimizationMode::Advanced)
    }
}

impl fmt::Display for OptimizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptimizationMode::Simple => f.write_str("simple"),
            OptimizationMode::Advanced => f.write_str("advanced"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildProfile {
    GlobOnly,
    AstroOnly,
    GlobAndAstro,
    GlobAstroExperimental,
}

/// Export bootstrap appended in advanced mode so public symbols survive renaming
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportModule {
    GlobExport,
    AstroExport,
    TotalExport,
}

impl ExportModule {
    pub fn name(&self) -> &'static str {
        match self {
            ExportModule::GlobExport => "GlobExport",
            ExportModule::AstroExport => "AstroExport",
            ExportModule::TotalExport => "TotalExport",
        }
    }

    /// Bootstrap file, found in the build root
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportModule::GlobExport => "GlobWeb.export.js",
            ExportModule::AstroExport => "AstroWeb.export.js",
            ExportModule::TotalExport => "Total.export.js",
        }
    }
}

/// Where a build finds its inputs and puts its artifact
#[derive(Debug, Clone, PartialEq)]
pub struct BuildLayout {
    pub build_root: PathBuf,
    pub source_root: PathBuf,
    pub namespace_module: ModuleId,
    pub externs: PathBuf,
    pub license: PathBuf,
    pub output_dir: PathBuf,
}

impl BuildLayout {
    pub const NAMESPACE_MODULE: &'static str = "GlobWeb.ns.js";

    /// Default layout: build scripts in `build_root`, library sources in `../src`
    pub fn from_build_root(build_root: impl Into<PathBuf>) -> Self {
        let build_root = build_root.into();
        Self {
            source_root: build_root.join("../src"),
            namespace_module: ModuleId::new(Self::NAMESPACE_MODULE),
            externs: build_root.join("externs.js"),
            license: build_root.join("licence.txt"),
            output_dir: build_root.join("generated"),
            build_root,
        }
    }
}

/// Everything one build run needs to assemble its compilation unit
#[derive(Debug, Clone, PartialEq)]
pub struct BuildConfiguration {
    pub profile: BuildProfile,
    pub mode: OptimizationMode,
    pub build_root: PathBuf,
    pub source_root: PathBuf,
    pub namespace_module: ModuleId,
    pub export_module: ExportModule,
    pub output_filename: String,
    /// `common`, `vector`, then the profile's groups
    pub groups: Vec<SourceGroup>,
}

/// Ordered list of module paths handed to the compiler
#[derive(Debug, Clone, PartialEq)]
pub struct CompilationUnit {
    paths: Vec<PathBuf>,
}

impl CompilationUnit {
    pub(crate) fn from_paths(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.paths.iter()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn first(&self) -> Option<&PathBuf> {
        self.paths.first()
    }

    pub fn last(&self) -> Option<&PathBuf> {
        self.paths.last()
    }
}

impl<'a> IntoIterator for &'a CompilationUnit {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

/// Compiler behavior not tied to the optimization mode
#[derive(Debug, Clone, PartialEq)]
pub struct CompilerOptions {
    pub language_in: String,
    pub pretty_print: bool,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            language_in: "ECMASCRIPT5".to_string(),
            pretty_print: false,
        }
    }
}

/// Ordered command-line flags for the external compiler
#[derive(Debug, Clone, PartialEq)]
pub struct CompilerFlags {
    args: Vec<String>,
}

impl CompilerFlags {
    pub fn for_mode(externs: &Path, mode: OptimizationMode, options: &CompilerOptions) -> Self {
        let mut args = vec![
            "--externs".to_string(),
            externs.to_string_lossy().into_owned(),
            "--language_in".to_string(),
            options.language_in.clone(),
            "--compilation_level".to_string(),
            mode.compilation_level().to_string(),
        ];

        if options.pretty_print {
            args.push("--formatting".to_string());
            args.push("pretty_print".to_string());
        }

        Self { args }
    }

    pub fn as_args(&self) -> &[String] {
        &self.args
    }

    /// Value following `flag`, if present
    pub fn value_of(&self, flag: &str) -> Option<&str> {
        self.args
            .iter()
            .position(|a| a == flag)
            .and_then(|i| self.args.get(i + 1))
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompilerResult {
    pub output: String,
    pub diagnostic: Option<String>,
}

impl CompilerResult {
    pub fn has_diagnostic(&self) -> bool {
        self.diagnostic
            .as_deref()
            .is_some_and(|d| !d.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PackagedArtifact {
    pub path: PathBuf,
    pub size: usize,
}

/// Outcome of a full pipeline run
#[derive(Debug)]
pub struct BuildResult {
    pub configuration: BuildConfiguration,
    pub unit: CompilationUnit,
    pub artifact: PackagedArtifact,
    pub diagnostic: Option<String>,
    pub build_time: std::time::Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_for_advanced_mode() {
        let flags = CompilerFlags::for_mode(
            Path::new("/b/externs.js"),
            OptimizationMode::Advanced,
            &CompilerOptions::default(),
        );

        assert_eq!(
            flags.as_args(),
            [
                "--externs",
                "/b/externs.js",
                "--language_in",
                "ECMASCRIPT5",
                "--compilation_level",
                "ADVANCED_OPTIMIZATIONS",
            ]
        );
    }

    #[test]
    fn test_flags_for_simple_mode_with_pretty_print() {
        let options = CompilerOptions {
            pretty_print: true,
            ..Default::default()
        };
        let flags = CompilerFlags::for_mode(Path::new("externs.js"), OptimizationMode::Simple, &options);

        assert_eq!(flags.value_of("--compilation_level"), Some("SIMPLE_OPTIMIZATIONS"));
        assert_eq!(flags.value_of("--formatting"), Some("pretty_print"));
        assert_eq!(flags.value_of("--language_in"), Some("ECMASCRIPT5"));
    }

    #[test]
    fn test_blank_diagnostic_is_not_a_diagnostic() {
        let result = CompilerResult {
            output: "x".to_string(),
            diagnostic: Some("\n  \n".to_string()),
        };
        assert!(!result.has_diagnostic());
    }

    #[test]
    fn test_default_layout() {
        let layout = BuildLayout::from_build_root("/repo/build");
        assert_eq!(layout.source_root, PathBuf::from("/repo/build/../src"));
        assert_eq!(layout.license, PathBuf::from("/repo/build/licence.txt"));
        assert_eq!(layout.output_dir, PathBuf::from("/repo/build/generated"));
        assert_eq!(layout.namespace_module.as_str(), "GlobWeb.ns.js");
    }
}
