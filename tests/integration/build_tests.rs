use async_trait::async_trait;
use globweb_build::core::interfaces::JsCompiler;
use globweb_build::core::models::{CompilerFlags, CompilerResult};
use globweb_build::infrastructure::TokioFileSystemService;
use globweb_build::{
    assemble, BuildLayout, BuildProfile, CompilationUnit, GlobWebBuildService, OptimizationMode,
    ProfileResolver, Result, SourceCatalog,
};
use std::path::Path;
use std::sync::Arc;

/// Echoes the unit size and always reports a warning
struct WarningCompiler;

#[async_trait]
impl JsCompiler for WarningCompiler {
    async fn compile(&self, unit: &CompilationUnit, _flags: &CompilerFlags) -> Result<CompilerResult> {
        Ok(CompilerResult {
            output: format!("/*{} modules*/", unit.len()),
            diagnostic: Some("JSC_UNSAFE_THIS: dangerous use of this".to_string()),
        })
    }
}

fn write_project(root: &Path) -> BuildLayout {
    let build = root.join("build");
    let src = root.join("src");
    std::fs::create_dir_all(&build).unwrap();
    std::fs::create_dir_all(&src).unwrap();

    let catalog = SourceCatalog::builtin();
    for group in catalog.group_names().collect::<Vec<_>>() {
        for module in &catalog.group(group).unwrap().modules {
            std::fs::write(src.join(module.as_str()), "var GlobWeb = GlobWeb || {};").unwrap();
        }
    }
    for bootstrap in [
        "GlobWeb.ns.js",
        "GlobWeb.export.js",
        "AstroWeb.export.js",
        "Total.export.js",
        "externs.js",
    ] {
        std::fs::write(build.join(bootstrap), "").unwrap();
    }
    std::fs::write(build.join("licence.txt"), "/* GlobWeb - LGPL */\n").unwrap();

    BuildLayout::from_build_root(build)
}

#[test]
fn test_two_configurations_in_one_process() {
    let layout = BuildLayout::from_build_root("/repo/build");
    let catalog = SourceCatalog::builtin();

    let glob = ProfileResolver::resolve(BuildProfile::GlobOnly, OptimizationMode::Advanced, &layout, &catalog)
        .unwrap();
    let total = ProfileResolver::resolve(
        BuildProfile::GlobAstroExperimental,
        OptimizationMode::Advanced,
        &layout,
        &catalog,
    )
    .unwrap();

    let glob_first = assemble(&glob);
    let total_unit = assemble(&total);
    let glob_second = assemble(&glob);

    assert_eq!(glob_first.paths(), glob_second.paths());
    assert_eq!(glob_first.len(), 1 + 29 + 9 + 9 + 1);
    assert_eq!(total_unit.len(), 1 + 29 + 9 + 9 + 12 + 2 + 1);
}

#[tokio::test]
async fn test_every_profile_builds() {
    let temp_dir = tempfile::tempdir().unwrap();
    let layout = write_project(temp_dir.path());
    let service = GlobWebBuildService::new(
        Arc::new(TokioFileSystemService),
        Arc::new(WarningCompiler),
        layout.clone(),
    );

    for (profile, file) in [
        (BuildProfile::GlobOnly, "Glob.min.js"),
        (BuildProfile::AstroOnly, "Astro.min.js"),
        (BuildProfile::GlobAndAstro, "GlobAstro.min.js"),
        (BuildProfile::GlobAstroExperimental, "TotalWeb.min.js"),
    ] {
        let result = service.build(profile, OptimizationMode::Advanced).await.unwrap();

        assert_eq!(result.artifact.path, layout.output_dir.join(file));
        assert!(result.diagnostic.is_some());

        let written = std::fs::read_to_string(&result.artifact.path).unwrap();
        assert_eq!(
            written,
            format!("/* GlobWeb - LGPL */\n/*{} modules*/", result.unit.len())
        );
    }
}

#[tokio::test]
async fn test_rebuild_overwrites_artifact() {
    let temp_dir = tempfile::tempdir().unwrap();
    let layout = write_project(temp_dir.path());
    let service = GlobWebBuildService::new(
        Arc::new(TokioFileSystemService),
        Arc::new(WarningCompiler),
        layout.clone(),
    );

    let advanced = service
        .build(BuildProfile::GlobOnly, OptimizationMode::Advanced)
        .await
        .unwrap();
    let simple = service
        .build(BuildProfile::GlobOnly, OptimizationMode::Simple)
        .await
        .unwrap();

    assert_eq!(advanced.unit.len(), simple.unit.len() + 1);
    assert_eq!(advanced.artifact.path, simple.artifact.path);

    let written = std::fs::read_to_string(&simple.artifact.path).unwrap();
    assert_eq!(
        written,
        format!("/* GlobWeb - LGPL */\n/*{} modules*/", simple.unit.len())
    );
}
