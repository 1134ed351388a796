use crate::core::catalog::{SourceCatalog, ASTRO, COMMON, EXPERIMENTAL, GLOB, VECTOR};
use crate::core::models::*;
use crate::utils::{BuildError, Result};
use std::fmt;

/// One row of the profile table
#[derive(Debug, Clone, Copy)]
pub struct ProfileEntry {
    pub selector: i64,
    pub profile: BuildProfile,
    pub label: &'static str,
    pub groups: &'static [&'static str],
    pub export_module: ExportModule,
    pub output_filename: &'static str,
}

/// Groups every profile starts with
pub const BASE_GROUPS: &[&str] = &[COMMON, VECTOR];

pub static PROFILE_TABLE: [ProfileEntry; 4] = [
    ProfileEntry {
        selector: 1,
        profile: BuildProfile::GlobOnly,
        label: "Basic GlobWeb only",
        groups: &[GLOB],
        export_module: ExportModule::GlobExport,
        output_filename: "Glob.min.js",
    },
    ProfileEntry {
        selector: 2,
        profile: BuildProfile::AstroOnly,
        label: "Basic AstroWeb only",
        groups: &[ASTRO],
        export_module: ExportModule::AstroExport,
        output_filename: "Astro.min.js",
    },
    ProfileEntry {
        selector: 3,
        profile: BuildProfile::GlobAndAstro,
        label: "Basic GlobWeb + AstroWeb",
        groups: &[GLOB, ASTRO],
        export_module: ExportModule::TotalExport,
        output_filename: "GlobAstro.min.js",
    },
    ProfileEntry {
        selector: 4,
        profile: BuildProfile::GlobAstroExperimental,
        label: "Basic and experimental GlobWeb + AstroWeb",
        groups: &[GLOB, ASTRO, EXPERIMENTAL],
        export_module: ExportModule::TotalExport,
        output_filename: "TotalWeb.min.js",
    },
];

impl BuildProfile {
    pub fn from_selector(selector: i64) -> Result<Self> {
        PROFILE_TABLE
            .iter()
            .find(|entry| entry.selector == selector)
            .map(|entry| entry.profile)
            .ok_or(BuildError::InvalidProfile(selector))
    }

    pub fn entry(&self) -> &'static ProfileEntry {
        match self {
            BuildProfile::GlobOnly => &PROFILE_TABLE[0],
            BuildProfile::AstroOnly => &PROFILE_TABLE[1],
            BuildProfile::GlobAndAstro => &PROFILE_TABLE[2],
            BuildProfile::GlobAstroExperimental => &PROFILE_TABLE[3],
        }
    }

    pub fn export_module(&self) -> ExportModule {
        self.entry().export_module
    }

    pub fn output_filename(&self) -> &'static str {
        self.entry().output_filename
    }

    pub fn all() -> impl Iterator<Item = BuildProfile> {
        PROFILE_TABLE.iter().map(|entry| entry.profile)
    }
}

impl fmt::Display for BuildProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.entry().label)
    }
}

pub struct ProfileResolver;

impl ProfileResolver {
    /// Programmatic entry: validate a raw selector, then resolve.
    pub fn resolve_selector(
        selector: i64,
        mode: OptimizationMode,
        layout: &BuildLayout,
        catalog: &SourceCatalog,
    ) -> Result<BuildConfiguration> {
        let profile = BuildProfile::from_selector(selector)?;
        Self::resolve(profile, mode, layout, catalog)
    }

    /// Map a profile to its configuration. Touches no files.
    pub fn resolve(
        profile: BuildProfile,
        mode: OptimizationMode,
        layout: &BuildLayout,
        catalog: &SourceCatalog,
    ) -> Result<BuildConfiguration> {
        let entry = profile.entry();

        let groups = BASE_GROUPS
            .iter()
            .chain(entry.groups.iter())
            .map(|name| {
                catalog
                    .group(name)
                    .cloned()
                    .ok_or_else(|| BuildError::UnknownGroup((*name).to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(BuildConfiguration {
            profile,
            mode,
            build_root: layout.build_root.clone(),
            source_root: layout.source_root.clone(),
            namespace_module: layout.namespace_module.clone(),
            export_module: profile.export_module(),
            output_filename: profile.output_filename().to_string(),
            groups,
        })
    }
}
