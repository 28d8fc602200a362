//! Repair of the single known malformed origin.

/// Origin as emitted by the broken producer (one slash after the scheme).
const BROKEN_ORIGIN: &str = "https:/static";
const FIXED_ORIGIN: &str = "https://static";

/// Trims whitespace and rewrites the first `https:/static` into `https://static`.
///
/// This is a targeted fix, not general URL repair: any other single-slash URL
/// is returned as is.
pub fn normalize_url(raw: &str) -> String {
    raw.trim().replacen(BROKEN_ORIGIN, FIXED_ORIGIN, 1)
}
