//! URL handling for the mirror walk.
//!
//! Repairs the malformed origin some manifests carry, derives the base URL
//! file entries are relative to, and maps remote URLs onto the local mirror
//! layout.

mod base;
mod normalize;
mod path;

pub use base::{file_url, manifest_base_url, manifest_file_name};
pub use normalize::normalize_url;
pub use path::{relative_path, resolve_local_path};
