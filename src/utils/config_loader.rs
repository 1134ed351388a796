use crate::core::catalog::SourceCatalog;
use crate::core::models::{BuildLayout, CompilerOptions, ModuleId, OptimizationMode};
use crate::utils::{BuildError, Logger, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "globweb.config.json";

/// Configuration file format (globweb.config.json)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GlobWebConfig {
    /// Closure Compiler jar (default: "compiler.jar")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compiler: Option<String>,

    /// Java executable (default: "java")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub java: Option<String>,

    /// Externs declaration file (default: "externs.js")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub externs: Option<String>,

    /// License header file (default: "licence.txt")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    /// Artifact directory (default: "generated")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,

    /// Library sources (default: "../src")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_root: Option<String>,

    /// Namespace bootstrap placed first in every build (default: "GlobWeb.ns.js")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace_module: Option<String>,

    /// Compiler input language level (default: "ECMASCRIPT5")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_in: Option<String>,

    /// Use advanced optimizations (default: false)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced: Option<bool>,

    /// Pretty-print compiler output (default: false)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretty_print: Option<bool>,

    /// Replacement module lists for catalog groups
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub groups: HashMap<String, Vec<String>>,
}

/// CLI values that override the config file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub advanced: bool,
    pub pretty_print: bool,
    pub compiler: Option<PathBuf>,
    pub java: Option<PathBuf>,
}

/// Fully merged settings for one run
#[derive(Debug, Clone)]
pub struct BuildSettings {
    pub layout: BuildLayout,
    pub mode: OptimizationMode,
    pub compiler_options: CompilerOptions,
    pub compiler_jar: PathBuf,
    pub java: PathBuf,
    pub catalog: SourceCatalog,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load globweb.config.json from the build root if present
    pub fn load_from_file(build_root: &Path) -> Result<Option<GlobWebConfig>> {
        let config_path = build_root.join(CONFIG_FILE);

        if !config_path.exists() {
            Logger::debug("No globweb.config.json found, using defaults");
            return Ok(None);
        }

        Logger::debug(&format!("Loading config from {}", config_path.display()));

        let content = std::fs::read_to_string(&config_path)?;
        let config: GlobWebConfig = serde_json::from_str(&content).map_err(|e| {
            BuildError::config(format!("Failed to parse {}: {}", CONFIG_FILE, e))
        })?;

        Ok(Some(config))
    }

    /// Merge file config with CLI arguments (CLI > config file > default).
    /// Relative paths resolve against the build root.
    pub fn merge_with_cli(
        file_config: Option<GlobWebConfig>,
        build_root: PathBuf,
        cli: &CliOverrides,
    ) -> Result<BuildSettings> {
        let base = file_config.unwrap_or_default();
        let resolve = |value: Option<&String>, default: &str| -> PathBuf {
            let raw = Path::new(value.map(String::as_str).unwrap_or(default));
            if raw.is_absolute() {
                raw.to_path_buf()
            } else {
                build_root.join(raw)
            }
        };

        let mut layout = BuildLayout::from_build_root(build_root.clone());
        layout.source_root = resolve(base.source_root.as_ref(), "../src");
        layout.externs = resolve(base.externs.as_ref(), "externs.js");
        layout.license = resolve(base.license.as_ref(), "licence.txt");
        layout.output_dir = resolve(base.output_dir.as_ref(), "generated");
        if let Some(namespace) = base.namespace_module.as_ref() {
            layout.namespace_module = ModuleId::new(namespace.clone());
        }

        let compiler_jar = cli
            .compiler
            .clone()
            .unwrap_or_else(|| resolve(base.compiler.as_ref(), "compiler.jar"));

        // A bare executable name is looked up on PATH, not under the build root.
        let java = cli
            .java
            .clone()
            .or_else(|| base.java.as_ref().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("java"));

        let mode = OptimizationMode::from_advanced(cli.advanced || base.advanced.unwrap_or(false));

        let mut compiler_options = CompilerOptions::default();
        if let Some(language_in) = base.language_in {
            compiler_options.language_in = language_in;
        }
        compiler_options.pretty_print = cli.pretty_print || base.pretty_print.unwrap_or(false);

        let catalog = SourceCatalog::builtin().with_overrides(&base.groups)?;

        Ok(BuildSettings {
            layout,
            mode,
            compiler_options,
            compiler_jar,
            java,
            catalog,
        })
    }

    /// Example config file contents with every default spelled out
    pub fn generate_example() -> String {
        let example = GlobWebConfig {
            compiler: Some("compiler.jar".to_string()),
            java: Some("java".to_string()),
            externs: Some("externs.js".to_string()),
            license: Some("licence.txt".to_string()),
            output_dir: Some("generated".to_string()),
            source_root: Some("../src".to_string()),
            namespace_module: Some(BuildLayout::NAMESPACE_MODULE.to_string()),
            language_in: Some("ECMASCRIPT5".to_string()),
            advanced: Some(false),
            pretty_print: Some(false),
            groups: HashMap::new(),
        };
        serde_json::to_string_pretty(&example).unwrap_or_default()
    }
}
