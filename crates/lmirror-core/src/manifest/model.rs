//! Wire types for the launcher metadata and per-build package manifests.

use serde::Deserialize;

/// Top-level metadata document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RootManifest {
    pub launcher: LauncherDescriptor,
    pub packages: Vec<PackageDescriptor>,
    /// Hardware survey endpoint. Parsed, not used.
    #[serde(rename = "hardwaresurvey")]
    pub hardware_survey: String,
    /// Hints endpoint. Parsed, not used.
    pub hints: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LauncherDescriptor {
    pub name: String,
    pub builds: Vec<BuildDescriptor>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PackageDescriptor {
    pub name: String,
    pub builds: Vec<BuildDescriptor>,
}

/// One platform/architecture variant of the launcher or of a package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuildDescriptor {
    pub os: String,
    pub architecture: String,
    /// Package manifest URL; empty when the build has none.
    pub url: String,
    /// Assets manifest URL; empty when the build has none.
    #[serde(rename = "assetsurl")]
    pub assets_url: String,
}

impl BuildDescriptor {
    /// Local subfolder holding this build's manifests and files.
    pub fn destination_folder(&self) -> String {
        format!("{}-{}-current", self.os, self.architecture)
    }

    /// Non-empty manifest URLs, package manifest first.
    pub fn manifest_urls(&self) -> impl Iterator<Item = &str> {
        [self.url.as_str(), self.assets_url.as_str()]
            .into_iter()
            .filter(|u| !u.is_empty())
    }
}

/// File listing for one build (package or assets manifest).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PackageManifest {
    pub files: Vec<FileEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileEntry {
    /// Path relative to the directory of the owning manifest.
    pub url: String,
    #[serde(rename = "unpackedhash")]
    pub unpacked_hash: String,
    #[serde(rename = "unpackedsize")]
    pub unpacked_size: u64,
    #[serde(rename = "packedhash")]
    pub packed_hash: String,
    #[serde(rename = "packedsize")]
    pub packed_size: u64,
    #[serde(rename = "localfile")]
    pub local_file: String,
    pub executable: bool,
}
