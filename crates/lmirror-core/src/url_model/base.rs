//! Base URL of a manifest and file URL construction.

/// Last path segment of a manifest URL (e.g. `package.json`), as it appears in the URL.
///
/// Returns `None` if the URL cannot be parsed or ends with `/`.
pub fn manifest_file_name(manifest_url: &str) -> Option<String> {
    let parsed = url::Url::parse(manifest_url).ok()?;
    let segment = parsed.path_segments()?.last()?;
    if segment.is_empty() {
        return None;
    }
    Some(segment.to_string())
}

/// Directory URL that a manifest's file entries are relative to.
///
/// Removes exactly the trailing `/<manifest file name>` (query and fragment
/// dropped first). Only that literal suffix goes; a directory such as
/// `client-json/` in front of `package.json` is kept intact.
pub fn manifest_base_url(manifest_url: &str) -> &str {
    let url = manifest_url.trim();
    let url = url.split(['?', '#']).next().unwrap_or(url);

    if let Some(base) = manifest_file_name(url).and_then(|name| {
        url.strip_suffix(name.as_str())
            .and_then(|rest| rest.strip_suffix('/'))
    }) {
        return base;
    }

    match url.rsplit_once('/') {
        Some((base, name)) if !name.is_empty() && !base.ends_with('/') => base,
        _ => url.trim_end_matches('/'),
    }
}

/// Joins a manifest base URL and a file entry's relative URL with a single `/`.
pub fn file_url(base: &str, relative: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        relative.trim_start_matches('/')
    )
}
