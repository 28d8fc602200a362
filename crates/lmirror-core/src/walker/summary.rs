//! Counters reported at the end of a walk.

use std::fmt;

/// What a completed walk fetched and wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MirrorSummary {
    /// Build descriptors visited (including those without manifest URLs).
    pub builds: usize,
    /// JSON manifests fetched, root metadata included.
    pub manifests: usize,
    /// Files listed by package/assets manifests that were fetched.
    pub files: usize,
    /// Bytes written to disk after NUL stripping.
    pub bytes_written: u64,
}

impl fmt::Display for MirrorSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} build(s), {} manifest(s), {} file(s), {:.1} MiB written",
            self.builds,
            self.manifests,
            self.files,
            self.bytes_written as f64 / 1_048_576.0
        )
    }
}
