use crate::core::models::{BuildConfiguration, CompilationUnit};

/// Expand a configuration into its compilation unit.
///
/// The namespace bootstrap comes first, then every group's modules in
/// declared order, then the export bootstrap when the mode needs one.
/// Modules listed in more than one group are kept each time they appear.
pub fn assemble(config: &BuildConfiguration) -> CompilationUnit {
    let module_count: usize = config.groups.iter().map(|g| g.len()).sum();
    let mut paths = Vec::with_capacity(module_count + 2);

    paths.push(config.namespace_module.resolve(&config.build_root));

    paths.extend(
        config
            .groups
            .iter()
            .flat_map(|group| group.modules.iter())
            .map(|module| module.resolve(&config.source_root)),
    );

    if config.mode.requires_exports() {
        paths.push(config.build_root.join(config.export_module.file_name()));
    }

    CompilationUnit::from_paths(paths)
}
