use crate::cli::prompt::prompt_for_profile;
use crate::core::{interfaces::*, models::*, services::GlobWebBuildService};
use crate::infrastructure::{ClosureCompiler, TokioFileSystemService};
use crate::utils::{BuildUI, CliOverrides, ConfigLoader, Logger, Result};
use clap::Parser;
use console::Term;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "globweb-build")]
#[command(version)]
#[command(about = "Assemble and minify the GlobWeb/AstroWeb library")]
pub struct Cli {
    /// Compilation mode 1-4; skips the interactive menu
    #[arg(requires = "base_path")]
    pub selector: Option<i64>,

    /// Build directory holding bootstraps, externs, license and compiler
    pub base_path: Option<PathBuf>,

    /// Use ADVANCED_OPTIMIZATIONS and append the export bootstrap
    #[arg(long)]
    pub advanced: bool,

    /// Pretty-print the compiler output for debugging
    #[arg(long)]
    pub pretty_print: bool,

    /// Closure Compiler jar
    #[arg(long)]
    pub compiler: Option<PathBuf>,

    /// Java executable
    #[arg(long)]
    pub java: Option<PathBuf>,

    /// Print the compilation unit and compiler flags without compiling
    #[arg(long)]
    pub dry_run: bool,

    /// Print an example globweb.config.json and exit
    #[arg(long)]
    pub print_config: bool,
}

pub struct CliHandler;

impl CliHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn run(&self) -> Result<()> {
        Logger::init();
        self.execute(Cli::parse()).await
    }

    pub async fn execute(&self, cli: Cli) -> Result<()> {
        if cli.print_config {
            println!("{}", ConfigLoader::generate_example());
            return Ok(());
        }

        let interactive = cli.selector.is_none();

        // Profile first: a bad selector must fail before anything is read.
        let profile = match cli.selector {
            Some(selector) => BuildProfile::from_selector(selector)?,
            None => self.ask_profile()?,
        };

        let base_path = cli.base_path.clone().unwrap_or_else(|| PathBuf::from("."));
        let build_root = std::path::absolute(&base_path)?;

        let file_config = ConfigLoader::load_from_file(&build_root)?;
        let overrides = CliOverrides {
            advanced: cli.advanced,
            pretty_print: cli.pretty_print,
            compiler: cli.compiler.clone(),
            java: cli.java.clone(),
        };
        let settings = ConfigLoader::merge_with_cli(file_config, build_root, &overrides)?;

        let fs_service: Arc<dyn FileSystemService> = Arc::new(TokioFileSystemService);
        let compiler: Arc<dyn JsCompiler> =
            Arc::new(ClosureCompiler::new(settings.java, settings.compiler_jar));

        let service = GlobWebBuildService::new(fs_service, compiler, settings.layout)
            .with_catalog(settings.catalog)
            .with_compiler_options(settings.compiler_options);

        if cli.dry_run {
            let plan = service.plan(profile, settings.mode)?;
            BuildUI::show_plan(&plan);
            return Ok(());
        }

        BuildUI::show_banner();
        let result = service.build(profile, settings.mode).await?;
        BuildUI::show_completion(&result);

        if interactive {
            self.wait_for_key();
        }

        Ok(())
    }

    fn ask_profile(&self) -> Result<BuildProfile> {
        let term = Term::stdout();
        let stdin = std::io::stdin();
        let mut input = stdin.lock();
        let mut output = std::io::stdout();

        prompt_for_profile(&mut input, &mut output, || clear_between_attempts(&term))
    }

    fn wait_for_key(&self) {
        let term = Term::stdout();
        if !term.is_term() {
            return;
        }

        println!("Press a key to finish.");
        if let Err(e) = term.read_key() {
            Logger::debug(&format!("Could not read final keypress: {}", e));
        }
    }
}

fn clear_between_attempts(term: &Term) {
    if !term.is_term() {
        return;
    }

    if let Err(e) = term.clear_screen() {
        Logger::debug(&format!("Could not clear the screen: {}", e));
    }
}

impl Default for CliHandler {
    fn default() -> Self {
        Self::new()
    }
}
