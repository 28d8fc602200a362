//! Mapping of remote URLs onto the local mirror tree.

use std::path::{Path, PathBuf};

/// Part of `url` starting at the first occurrence of `marker` (inclusive).
///
/// Without a marker the whole URL is returned unchanged, so a URL such as
/// `https://cdn.example.com/a.bin` ends up used verbatim as a relative path.
pub fn relative_path<'a>(url: &'a str, marker: &str) -> &'a str {
    match url.find(marker) {
        Some(idx) => &url[idx..],
        None => url,
    }
}

/// Absolute local path for `url` under `root` (or the working directory when `root` is None).
pub fn resolve_local_path(url: &str, marker: &str, root: Option<&Path>) -> PathBuf {
    let relative = Path::new(relative_path(url, marker));
    let joined = match root {
        Some(root) => root.join(relative),
        None => relative.to_path_buf(),
    };
    std::path::absolute(&joined).unwrap_or(joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://example.com/launcher/windows/package.json";

    #[test]
    fn relative_from_marker() {
        assert_eq!(relative_path(URL, "launcher"), "launcher/windows/package.json");
    }

    #[test]
    fn relative_without_marker_is_whole_url() {
        assert_eq!(
            relative_path("https://cdn.example.com/files/a.bin", "launcher"),
            "https://cdn.example.com/files/a.bin"
        );
    }

    #[test]
    fn relative_uses_first_occurrence() {
        assert_eq!(
            relative_path("https://x.com/launcher/a/launcher/b.json", "launcher"),
            "launcher/a/launcher/b.json"
        );
    }

    #[test]
    fn resolve_without_root_is_under_cwd() {
        let expected = std::path::absolute("launcher/windows/package.json").unwrap();
        assert_eq!(resolve_local_path(URL, "launcher", None), expected);
        assert!(expected.starts_with(std::env::current_dir().unwrap()));
    }

    #[test]
    fn resolve_with_root() {
        let root = Path::new("/tmp/mirror");
        assert_eq!(
            resolve_local_path(URL, "launcher", Some(root)),
            std::path::absolute("/tmp/mirror/launcher/windows/package.json").unwrap()
        );
    }

    #[test]
    fn resolve_with_relative_root() {
        let got = resolve_local_path(URL, "launcher", Some(Path::new("linux-x64-current")));
        assert_eq!(
            got,
            std::path::absolute("linux-x64-current/launcher/windows/package.json").unwrap()
        );
    }
}
