// Source set catalog: the library's modules grouped by feature, in dependency order

use crate::core::models::{ModuleId, SourceGroup};
use crate::utils::{BuildError, Result};
use std::collections::HashMap;

pub const COMMON: &str = "common";
pub const VECTOR: &str = "vector";
pub const GLOB: &str = "glob";
pub const ASTRO: &str = "astro";
pub const EXPERIMENTAL: &str = "experimental";

const COMMON_FILES: &[&str] = &[
    "glMatrix.js",
    "Stats.js",
    "Utils.js",
    "GeoBound.js",
    "BoundingBox.js",
    "BaseLayer.js",
    "TileWireframeLayer.js",
    "Numeric.js",
    "Animation.js",
    "InterpolatedAnimation.js",
    "SegmentedAnimation.js",
    "CoordinateSystem.js",
    "Frustum.js",
    "RenderContext.js",
    "Program.js",
    "TileIndexBuffer.js",
    "Tile.js",
    "TilePool.js",
    "TileManager.js",
    "RasterLayer.js",
    "TileRequest.js",
    "Globe.js",
    "AttributionHandler.js",
    "PathAnimation.js",
    "MouseNavigationHandler.js",
    "KeyboardNavigationHandler.js",
    "BaseNavigation.js",
    "RasterOverlayRenderer.js",
    "InertiaAnimation.js",
];

const VECTOR_FILES: &[&str] = &[
    "RendererTileData.js",
    "VectorRendererManager.js",
    "PointRenderer.js",
    "FeatureStyle.js",
    "TiledVectorRenderable.js",
    "LineStringRenderable.js",
    "TiledVectorRenderer.js",
    "VectorLayer.js",
    "KMLParser.js",
];

const GLOB_FILES: &[&str] = &[
    "Navigation.js",
    "AtmosphereLayer.js",
    "GeoTiling.js",
    "MercatorTiling.js",
    "WMSLayer.js",
    "WMTSLayer.js",
    "WCSElevationLayer.js",
    "BingLayer.js",
    "OSMLayer.js",
];

const ASTRO_FILES: &[&str] = &[
    "Mesh.js",
    "EquatorialCoordinateSystem.js",
    "HEALPixLayer.js",
    "HEALPixTiling.js",
    "PointSpriteRenderer.js",
    "ConvexPolygonRenderer.js",
    "AstroNavigation.js",
    "HEALPixTables.js",
    "HEALPixBase.js",
    "EquatorialGridLayer.js",
    "Long.js",
    "OpenSearchLayer.js",
];

const EXPERIMENTAL_FILES: &[&str] = &["Triangulator.js", "PolygonRenderable.js"];

/// Named source groups. Lookup never reorders or deduplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceCatalog {
    groups: Vec<SourceGroup>,
}

impl SourceCatalog {
    pub fn builtin() -> Self {
        let group = |name: &str, files: &[&str]| {
            SourceGroup::new(name, files.iter().copied().map(ModuleId::from).collect())
        };

        Self {
            groups: vec![
                group(COMMON, COMMON_FILES),
                group(VECTOR, VECTOR_FILES),
                group(GLOB, GLOB_FILES),
                group(ASTRO, ASTRO_FILES),
                group(EXPERIMENTAL, EXPERIMENTAL_FILES),
            ],
        }
    }

    pub fn from_groups(groups: Vec<SourceGroup>) -> Self {
        Self { groups }
    }

    pub fn group(&self, name: &str) -> Option<&SourceGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.name.as_str())
    }

    /// Replace the module lists of existing groups.
    ///
    /// Only known group names may be overridden; anything else is a
    /// configuration error.
    pub fn with_overrides(mut self, overrides: &HashMap<String, Vec<String>>) -> Result<Self> {
        for (name, modules) in overrides {
            let group = self
                .groups
                .iter_mut()
                .find(|g| &g.name == name)
                .ok_or_else(|| BuildError::UnknownGroup(name.clone()))?;

            group.modules = modules.iter().cloned().map(ModuleId::from).collect();
        }

        Ok(self)
    }
}

impl Default for SourceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
