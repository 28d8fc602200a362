//! Manifest walk: root metadata → per-build manifests → files.
//!
//! Strictly sequential. Every fetched document is written to the mirror
//! before it is parsed, and the first error ends the walk.

mod summary;

pub use summary::MirrorSummary;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::MirrorConfig;
use crate::fetch::Fetch;
use crate::manifest::{self, BuildDescriptor, RootManifest};
use crate::storage;
use crate::url_model;

/// Where the walk starts and where it writes.
#[derive(Debug, Clone)]
pub struct MirrorOptions {
    pub metadata_url: String,
    pub path_marker: String,
    /// Mirror root (None = current working directory).
    pub destination: Option<PathBuf>,
}

impl From<&MirrorConfig> for MirrorOptions {
    fn from(cfg: &MirrorConfig) -> Self {
        Self {
            metadata_url: cfg.metadata_url.clone(),
            path_marker: cfg.path_marker.clone(),
            destination: cfg.destination.clone(),
        }
    }
}

/// Fetches and decodes the root metadata without writing anything.
pub fn fetch_root<F: Fetch>(fetcher: &mut F, metadata_url: &str) -> Result<RootManifest> {
    let bytes = fetcher.fetch(metadata_url)?;
    manifest::parse_root(&storage::strip_nul(&bytes))
        .with_context(|| format!("decoding {}", metadata_url))
}

/// Drives one full mirror run over a [`Fetch`] implementation.
pub struct Mirror<F> {
    fetcher: F,
    opts: MirrorOptions,
    summary: MirrorSummary,
}

impl<F: Fetch> Mirror<F> {
    pub fn new(fetcher: F, opts: MirrorOptions) -> Self {
        Self {
            fetcher,
            opts,
            summary: MirrorSummary::default(),
        }
    }

    /// Runs the walk to completion or to the first error.
    pub fn run(&mut self) -> Result<MirrorSummary> {
        self.summary = MirrorSummary::default();

        let metadata_url = self.opts.metadata_url.clone();
        let root_dir = self.opts.destination.clone();
        let bytes = self.download(&metadata_url, root_dir.as_deref())?;
        let root = manifest::parse_root(&bytes)
            .with_context(|| format!("decoding {}", metadata_url))?;
        self.summary.manifests += 1;

        for build in root.builds() {
            self.mirror_build(build)?;
        }

        tracing::info!("mirror complete: {}", self.summary);
        Ok(self.summary)
    }

    /// Consumes the walker, returning the transport (tests inspect it).
    pub fn into_fetcher(self) -> F {
        self.fetcher
    }

    /// Destination directory of a build: `<root>/<os>-<arch>-current`.
    pub fn build_dir(&self, build: &BuildDescriptor) -> PathBuf {
        let folder = build.destination_folder();
        match &self.opts.destination {
            Some(root) => root.join(folder),
            None => PathBuf::from(folder),
        }
    }

    fn mirror_build(&mut self, build: &BuildDescriptor) -> Result<()> {
        self.summary.builds += 1;
        let dir = self.build_dir(build);
        tracing::debug!(
            os = %build.os,
            arch = %build.architecture,
            dir = %dir.display(),
            "mirroring build"
        );

        for manifest_url in build.manifest_urls() {
            self.mirror_manifest(manifest_url, &dir)
                .with_context(|| format!("build {}", build.destination_folder()))?;
        }
        Ok(())
    }

    fn mirror_manifest(&mut self, manifest_url: &str, dir: &Path) -> Result<()> {
        let bytes = self.download(manifest_url, Some(dir))?;
        let package = manifest::parse_package(&bytes)
            .with_context(|| format!("decoding {}", manifest_url))?;
        self.summary.manifests += 1;

        let base = url_model::manifest_base_url(manifest_url);
        for entry in &package.files {
            let url = url_model::normalize_url(&url_model::file_url(base, &entry.url));
            self.download(&url, Some(dir))?;
            self.summary.files += 1;
        }
        Ok(())
    }

    /// Fetch, strip NULs, persist at the mirrored path. Returns the persisted bytes.
    fn download(&mut self, url: &str, dir: Option<&Path>) -> Result<Vec<u8>> {
        let raw = self.fetcher.fetch(url)?;
        let bytes = storage::strip_nul(&raw).into_owned();
        let path = url_model::resolve_local_path(url, &self.opts.path_marker, dir);
        self.summary.bytes_written += storage::write_file(&path, &bytes)?;
        tracing::debug!(path = %path.display(), "wrote");
        Ok(bytes)
    }
}
