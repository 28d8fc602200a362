//! `lmirror plan` – list builds and their manifests without downloading files.

use anyhow::Result;
use lmirror_core::config::MirrorConfig;
use lmirror_core::fetch::CurlFetcher;
use lmirror_core::walker::fetch_root;

pub fn run_plan(cfg: &MirrorConfig) -> Result<()> {
    let mut fetcher = CurlFetcher::new(cfg)?;
    let root = fetch_root(&mut fetcher, &cfg.metadata_url)?;

    println!("{:<28} {:<8} {}", "FOLDER", "KIND", "URL");
    for build in root.builds() {
        let folder = build.destination_folder();
        if build.manifest_urls().next().is_none() {
            println!("{:<28} {:<8} -", folder, "-");
            continue;
        }
        if !build.url.is_empty() {
            println!("{:<28} {:<8} {}", folder, "package", build.url);
        }
        if !build.assets_url.is_empty() {
            println!("{:<28} {:<8} {}", folder, "assets", build.assets_url);
        }
    }
    Ok(())
}
