//! Launcher metadata and package manifest decoding.

mod model;

pub use model::{
    BuildDescriptor, FileEntry, LauncherDescriptor, PackageDescriptor, PackageManifest,
    RootManifest,
};

use anyhow::{Context, Result};

/// Decode the root metadata document.
pub fn parse_root(bytes: &[u8]) -> Result<RootManifest> {
    serde_json::from_slice(bytes).context("invalid root metadata manifest")
}

/// Decode a per-build package or assets manifest.
pub fn parse_package(bytes: &[u8]) -> Result<PackageManifest> {
    serde_json::from_slice(bytes).context("invalid package manifest")
}

impl RootManifest {
    /// All builds in walk order: launcher builds, then each package's builds.
    /// Duplicates are kept.
    pub fn builds(&self) -> impl Iterator<Item = &BuildDescriptor> {
        self.launcher
            .builds
            .iter()
            .chain(self.packages.iter().flat_map(|p| p.builds.iter()))
    }
}
