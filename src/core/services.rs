use crate::core::{assembler::assemble, catalog::SourceCatalog, interfaces::*, models::*, profile::ProfileResolver};
use crate::utils::{BuildError, BuildUI, Logger, Result, Timer};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Builds the compiler flags for a mode and runs the external compiler.
///
/// A diagnostic from the compiler is logged and handed back with the
/// output; it never fails the build on its own.
pub struct CompilerOrchestrator {
    fs_service: Arc<dyn FileSystemService>,
    compiler: Arc<dyn JsCompiler>,
    options: CompilerOptions,
}

impl CompilerOrchestrator {
    pub fn new(
        fs_service: Arc<dyn FileSystemService>,
        compiler: Arc<dyn JsCompiler>,
        options: CompilerOptions,
    ) -> Self {
        Self {
            fs_service,
            compiler,
            options,
        }
    }

    pub fn flags(&self, externs: &Path, mode: OptimizationMode) -> CompilerFlags {
        CompilerFlags::for_mode(externs, mode, &self.options)
    }

    pub async fn compile(
        &self,
        unit: &CompilationUnit,
        externs: &Path,
        flags: &CompilerFlags,
    ) -> Result<CompilerResult> {
        self.ensure_inputs_exist(unit, externs)?;

        let _timer = Timer::start("Compilation");
        Logger::compiling();

        let spinner = BuildUI::compile_spinner(unit.len());
        let result = self.compiler.compile(unit, flags).await;
        spinner.finish_and_clear();

        let result = result?;
        if let Some(diagnostic) = result.diagnostic.as_deref().filter(|_| result.has_diagnostic()) {
            Logger::diagnostic(diagnostic);
        }
        if result.output.is_empty() {
            Logger::warn("Compiler produced no output");
        }

        Ok(result)
    }

    fn ensure_inputs_exist(&self, unit: &CompilationUnit, externs: &Path) -> Result<()> {
        for path in unit.iter().map(PathBuf::as_path).chain(std::iter::once(externs)) {
            Logger::module(path);
            if !self.fs_service.file_exists(path) {
                return Err(BuildError::FileNotFound(path.to_path_buf()));
            }
        }
        Ok(())
    }
}

/// Prepends the license text to compiled output and writes the artifact
pub struct ArtifactPackager {
    fs_service: Arc<dyn FileSystemService>,
    license: PathBuf,
    output_dir: PathBuf,
}

impl ArtifactPackager {
    pub fn new(fs_service: Arc<dyn FileSystemService>, license: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            fs_service,
            license,
            output_dir,
        }
    }

    /// Write `license + compiled` to `output_dir/output_filename`,
    /// replacing any earlier artifact of the same name.
    pub async fn package(&self, output_filename: &str, compiled: &str) -> Result<PackagedArtifact> {
        let _timer = Timer::start("Packaging");

        if !self.fs_service.file_exists(&self.license) {
            return Err(BuildError::FileNotFound(self.license.clone()));
        }
        let license = self.fs_service.read_file(&self.license).await?;

        self.fs_service.create_directory(&self.output_dir).await?;

        let path = self.output_dir.join(output_filename);
        Logger::writing(output_filename);

        let mut content = String::with_capacity(license.len() + compiled.len());
        content.push_str(&license);
        content.push_str(compiled);
        self.fs_service.write_file(&path, &content).await?;

        Ok(PackagedArtifact {
            path,
            size: content.len(),
        })
    }
}

/// Everything the pipeline decides before the compiler runs
#[derive(Debug, Clone)]
pub struct BuildPlan {
    pub configuration: BuildConfiguration,
    pub unit: CompilationUnit,
    pub flags: CompilerFlags,
}

/// Resolver → assembler → orchestrator → packager, one step at a time
pub struct GlobWebBuildService {
    catalog: SourceCatalog,
    layout: BuildLayout,
    orchestrator: CompilerOrchestrator,
    packager: ArtifactPackager,
}

impl GlobWebBuildService {
    pub fn new(
        fs_service: Arc<dyn FileSystemService>,
        compiler: Arc<dyn JsCompiler>,
        layout: BuildLayout,
    ) -> Self {
        let orchestrator =
            CompilerOrchestrator::new(fs_service.clone(), compiler, CompilerOptions::default());
        let packager =
            ArtifactPackager::new(fs_service, layout.license.clone(), layout.output_dir.clone());

        Self {
            catalog: SourceCatalog::builtin(),
            layout,
            orchestrator,
            packager,
        }
    }

    pub fn with_catalog(mut self, catalog: SourceCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_compiler_options(mut self, options: CompilerOptions) -> Self {
        self.orchestrator.options = options;
        self
    }

    /// Resolve and assemble without touching the filesystem.
    pub fn plan(&self, profile: BuildProfile, mode: OptimizationMode) -> Result<BuildPlan> {
        let configuration = ProfileResolver::resolve(profile, mode, &self.layout, &self.catalog)?;
        let unit = assemble(&configuration);
        let flags = self.orchestrator.flags(&self.layout.externs, mode);

        Ok(BuildPlan {
            configuration,
            unit,
            flags,
        })
    }

    pub async fn build(&self, profile: BuildProfile, mode: OptimizationMode) -> Result<BuildResult> {
        let timer = Timer::start("Build");
        Logger::build_start(&profile.to_string(), &mode.to_string(), &self.layout.build_root);

        let BuildPlan {
            configuration,
            unit,
            flags,
        } = self.plan(profile, mode)?;
        Logger::unit_assembled(unit.len());

        let compiled = self
            .orchestrator
            .compile(&unit, &self.layout.externs, &flags)
            .await?;

        let artifact = self
            .packager
            .package(&configuration.output_filename, &compiled.output)
            .await?;

        let build_time = timer.elapsed();
        Logger::build_complete(&artifact.path, artifact.size, build_time);

        Ok(BuildResult {
            configuration,
            unit,
            artifact,
            diagnostic: compiled.diagnostic.filter(|d| !d.trim().is_empty()),
            build_time,
        })
    }
}
