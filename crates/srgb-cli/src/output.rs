//! Output destinations.
//!
//! Files are staged in a temporary file next to the target and renamed into
//! place once fully written, so a failed run never leaves a truncated file
//! behind under the final name.

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

/// Where a generated artifact goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Standard output (`-` on the command line)
    Stdout,
    /// A file, created or replaced
    File(PathBuf),
}

impl From<OsString> for Destination {
    fn from(s: OsString) -> Self {
        if s == "-" {
            Self::Stdout
        } else {
            Self::File(PathBuf::from(s))
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stdout => write!(f, "<stdout>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Writes `contents` to the destination.
pub fn write(dest: &Destination, contents: &[u8]) -> Result<()> {
    match dest {
        Destination::Stdout => {
            let mut out = std::io::stdout().lock();
            out.write_all(contents).context("Failed to write to stdout")?;
            out.flush().context("Failed to flush stdout")?;
            Ok(())
        }
        Destination::File(path) => write_atomic(path, contents),
    }
}

/// Writes a file via a sibling temporary file and an atomic rename.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in: {}", dir.display()))?;
    trace!("Staging {} bytes in {}", contents.len(), tmp.path().display());

    tmp.write_all(contents)
        .with_context(|| format!("Failed to write: {}", path.display()))?;
    tmp.as_file()
        .sync_all()
        .with_context(|| format!("Failed to sync: {}", path.display()))?;

    // Temporary files are created owner-only; generated sources should not be.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .with_context(|| format!("Failed to set permissions: {}", path.display()))?;
    }

    tmp.persist(path)
        .with_context(|| format!("Failed to save: {}", path.display()))?;
    debug!("Wrote {}", path.display());
    Ok(())
}
