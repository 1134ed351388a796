use crate::core::models::{BuildResult, PackagedArtifact};
use crate::core::services::BuildPlan;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub struct BuildUI;

impl BuildUI {
    pub fn show_banner() {
        println!(
            "\n  {} {}",
            "GLOBWEB BUILD".bright_cyan().bold(),
            concat!("v", env!("CARGO_PKG_VERSION")).bright_white()
        );
        println!();
    }

    /// Spinner shown while the external compiler runs. Hidden when stderr
    /// is not a terminal.
    pub fn compile_spinner(module_count: usize) -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("  {spinner:.cyan} {msg} {elapsed:.dim}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(format!("minifying {} modules", module_count));
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }

    pub fn show_plan(plan: &BuildPlan) {
        println!(
            "  {} {} ({})",
            "profile".bright_black(),
            plan.configuration.profile.to_string().bright_cyan(),
            plan.configuration.mode
        );
        println!(
            "  {} {}",
            "output ".bright_black(),
            plan.configuration.output_filename.bright_white()
        );
        if plan.configuration.mode.requires_exports() {
            println!(
                "  {} {} ({})",
                "export ".bright_black(),
                plan.configuration.export_module.name().bright_white(),
                plan.configuration.export_module.file_name()
            );
        }
        println!();
        for path in &plan.unit {
            println!("    {}", path.display());
        }
        println!();
        println!("  {} {}", "flags".bright_black(), plan.flags.as_args().join(" "));
        println!();
    }

    pub fn show_completion(result: &BuildResult) {
        let PackagedArtifact { path, size } = &result.artifact;
        let size_kb = *size as f64 / 1024.0;
        let size_str = if size_kb < 1.0 {
            format!("{} B", size)
        } else {
            format!("{:.2} kB", size_kb)
        };

        println!();
        println!(
            "  {} {}",
            path.display().to_string().bright_cyan(),
            format!("({})", size_str).bright_black()
        );
        if result.diagnostic.is_some() {
            println!("  {} compiler reported diagnostics", "⚠".yellow());
        }
        println!();
        println!(
            "  {} built in {}",
            "✓".bright_green(),
            format!("{:.2?}", result.build_time).bright_white().bold()
        );
        println!();
    }
}
