//! Writing fetched bytes into the local mirror tree.

use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs;
use std::io::Write;
use std::path::Path;

#[cfg(unix)]
use std::os::unix::fs::{DirBuilderExt, OpenOptionsExt};

const DIR_MODE: u32 = 0o755;
const FILE_MODE: u32 = 0o644;

/// Removes every NUL byte from `bytes`. Borrows when there is nothing to remove.
pub fn strip_nul(bytes: &[u8]) -> Cow<'_, [u8]> {
    if bytes.contains(&0) {
        Cow::Owned(bytes.iter().copied().filter(|&b| b != 0).collect())
    } else {
        Cow::Borrowed(bytes)
    }
}

/// Creates `dir` and all missing parents.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(DIR_MODE);
    builder
        .create(dir)
        .with_context(|| format!("failed to create directory {}", dir.display()))
}

/// Writes `bytes` to `path`, replacing any existing file. Parent directories are created.
/// Returns the number of bytes written.
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<u64> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    let mut opts = fs::OpenOptions::new();
    opts.write(true).create(true).truncate(true);
    #[cfg(unix)]
    opts.mode(FILE_MODE);

    let mut file = opts
        .open(path)
        .with_context(|| format!("failed to open {} for writing", path.display()))?;
    file.write_all(bytes)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(bytes.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_nul_removes_all_nul_bytes() {
        assert_eq!(strip_nul(b"\0a\0b\0\0c\0").as_ref(), b"abc");
        assert!(matches!(strip_nul(b"plain"), Cow::Borrowed(_)));
        assert!(strip_nul(b"\0\0").is_empty());
    }

    #[test]
    fn write_file_creates_parents_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("linux-x64-current/launcher/bin/client");

        assert_eq!(write_file(&path, b"first version").unwrap(), 13);
        assert_eq!(std::fs::read(&path).unwrap(), b"first version");

        write_file(&path, b"v2").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"v2");
    }

    #[cfg(unix)]
    #[test]
    fn write_file_uses_mirror_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("launcher/a.json");
        write_file(&path, b"{}").unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        // umask can only clear bits.
        assert_eq!(mode & !FILE_MODE, 0);
        let dir_mode = std::fs::metadata(path.parent().unwrap())
            .unwrap()
            .permissions()
            .mode()
            & 0o777;
        assert_eq!(dir_mode & !DIR_MODE, 0);
    }

    #[test]
    fn ensure_dir_fails_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("launcher");
        std::fs::write(&blocker, b"x").unwrap();
        assert!(ensure_dir(&blocker.join("sub")).is_err());
        assert!(write_file(&blocker.join("sub/a.bin"), b"x").is_err());
    }
}
