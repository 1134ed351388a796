use std::path::Path;
use std::process::Command;

fn globweb_build() -> Command {
    Command::new(env!("CARGO_BIN_EXE_globweb-build"))
}

fn write_project(root: &Path) -> std::path::PathBuf {
    let build = root.join("build");
    let src = root.join("src");
    std::fs::create_dir_all(&build).unwrap();
    std::fs::create_dir_all(&src).unwrap();

    let catalog = globweb_build::SourceCatalog::builtin();
    for group in ["common", "vector", "glob", "astro", "experimental"] {
        for module in &catalog.group(group).unwrap().modules {
            std::fs::write(src.join(module.as_str()), "").unwrap();
        }
    }
    for bootstrap in ["GlobWeb.ns.js", "GlobWeb.export.js", "externs.js", "compiler.jar"] {
        std::fs::write(build.join(bootstrap), "").unwrap();
    }
    std::fs::write(build.join("licence.txt"), "/* license */\n").unwrap();
    build
}

#[test]
fn test_invalid_selector_exits_nonzero() {
    let temp_dir = tempfile::tempdir().unwrap();

    let output = globweb_build()
        .args(["5", temp_dir.path().to_str().unwrap()])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid profile selector 5"), "stderr: {}", stderr);
    assert!(!temp_dir.path().join("generated").exists());
}

#[test]
fn test_dry_run_lists_unit() {
    let temp_dir = tempfile::tempdir().unwrap();

    let output = globweb_build()
        .args(["1", temp_dir.path().to_str().unwrap(), "--advanced", "--dry-run"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("GlobWeb.ns.js"));
    assert!(stdout.contains("OSMLayer.js"));
    assert!(stdout.contains("GlobWeb.export.js"));
    assert!(stdout.contains("GlobExport"));
    assert!(stdout.contains("ADVANCED_OPTIMIZATIONS"));
    assert!(!stdout.contains("HEALPixLayer.js"));
}

#[test]
fn test_missing_source_module_is_fatal() {
    let temp_dir = tempfile::tempdir().unwrap();
    let build = write_project(temp_dir.path());
    std::fs::remove_file(temp_dir.path().join("src").join("Globe.js")).unwrap();

    let output = globweb_build()
        .args(["1", build.to_str().unwrap()])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Globe.js"));
    assert!(!build.join("generated").join("Glob.min.js").exists());
}

#[cfg(unix)]
#[test]
fn test_diagnostic_still_packages_and_exits_zero() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = tempfile::tempdir().unwrap();
    let build = write_project(temp_dir.path());

    // Stand-in for `java -jar compiler.jar ...`
    let fake_java = temp_dir.path().join("fake-java");
    std::fs::write(
        &fake_java,
        "#!/bin/sh\nprintf 'var a=1;'\necho 'WARNING - unreachable code' >&2\n",
    )
    .unwrap();
    std::fs::set_permissions(&fake_java, std::fs::Permissions::from_mode(0o755)).unwrap();

    let output = globweb_build()
        .args(["1", build.to_str().unwrap(), "--java", fake_java.to_str().unwrap()])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let artifact = std::fs::read_to_string(build.join("generated").join("Glob.min.js")).unwrap();
    assert_eq!(artifact, "/* license */\nvar a=1;");
}
