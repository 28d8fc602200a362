//! `lmirror resolve <url>` – show where a URL lands in the mirror.

use lmirror_core::config::MirrorConfig;
use lmirror_core::url_model;

pub fn run_resolve(cfg: &MirrorConfig, url: &str) {
    let path = url_model::resolve_local_path(url, &cfg.path_marker, cfg.destination.as_deref());
    println!("{}", path.display());
}
