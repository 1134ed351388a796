use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

pub struct Logger;

impl Logger {
    pub fn init() {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("globweb_build=info"));

        // A second init (e.g. from tests) keeps the first subscriber.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init();
    }

    pub fn build_start(profile: &str, mode: &str, build_root: &Path) {
        info!("🔨 GlobWeb Build - {}", profile);
        info!("═══════════════════════════════════════");
        info!("📁 Build root: {}", build_root.display());
        info!("🎯 Optimization: {}", mode);
    }

    pub fn unit_assembled(module_count: usize) {
        info!("📦 Compilation unit: {} modules", module_count);
    }

    pub fn module(path: &Path) {
        debug!("  • {}", path.display());
    }

    pub fn compiling() {
        info!("⚡ Building minimized file...");
    }

    pub fn diagnostic(text: &str) {
        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            warn!("⚠️  {}", line);
        }
    }

    pub fn writing(output_filename: &str) {
        info!("📝 Writing to {}", output_filename);
    }

    pub fn build_complete(artifact: &Path, size: usize, build_time: std::time::Duration) {
        info!("");
        info!("📊 Build Statistics:");
        info!("  • Artifact: {}", artifact.display());
        info!("  • Size: {} bytes", size);
        info!("  • Build time: {:.2?}", build_time);
        info!("");
        info!("✅ Build completed successfully!");
    }

    pub fn debug(msg: &str) {
        debug!("{}", msg);
    }

    pub fn warn(msg: &str) {
        warn!("⚠️  {}", msg);
    }
}

pub struct Timer {
    start: Instant,
    name: String,
}

impl Timer {
    pub fn start(name: &str) -> Self {
        debug!("⏱️  Starting: {}", name);
        Self {
            start: Instant::now(),
            name: name.to_string(),
        }
    }

    pub fn elapsed(&self) -> std::time::Duration {
        self.start.elapsed()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        debug!("⏱️  Completed: {} in {:.2?}", self.name, self.elapsed());
    }
}
