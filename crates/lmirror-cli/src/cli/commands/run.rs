//! `lmirror run` – full mirror walk.

use anyhow::Result;
use lmirror_core::config::MirrorConfig;
use lmirror_core::fetch::CurlFetcher;
use lmirror_core::walker::{Mirror, MirrorOptions};

pub fn run_mirror(cfg: &MirrorConfig) -> Result<()> {
    let root = match &cfg.destination {
        Some(dir) => dir.display().to_string(),
        None => ".".to_string(),
    };
    tracing::info!("mirroring {} into {}", cfg.metadata_url, root);

    let fetcher = CurlFetcher::new(cfg)?;
    let summary = Mirror::new(fetcher, MirrorOptions::from(cfg)).run()?;
    println!("Mirrored {} into {}", summary, root);
    Ok(())
}
