//! Publishing rendered codes under the storage root.
//!
//! Files are written to a unique temporary file in the target directory and
//! renamed into place, so a concurrent reader sees either the previous
//! complete image or the new one, never a truncated file.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::{ArtifactError, ArtifactId, QR_CODE_DIR, Result};

/// Temporary files are named `.qr-XXXXXX.tmp` regardless of the identifier.
const TMP_PREFIX: &str = ".qr-";

/// Location of a fully written artifact.
///
/// Only produced after the final rename succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedArtifact {
    pub identifier: ArtifactId,
    /// Absolute filesystem path of the published file.
    pub path: PathBuf,
    /// Path relative to the storage root, always `/`-separated.
    pub relative_path: String,
}

#[derive(Debug, Clone)]
pub struct ArtifactStore {
    storage_root: PathBuf,
}

impl ArtifactStore {
    pub fn new(storage_root: impl Into<PathBuf>) -> Self {
        Self {
            storage_root: storage_root.into(),
        }
    }

    pub fn storage_root(&self) -> &Path {
        &self.storage_root
    }

    fn output_dir(&self) -> PathBuf {
        self.storage_root.join(QR_CODE_DIR)
    }

    /// Target path for `identifier`, without touching the filesystem.
    pub fn path_for(&self, identifier: &ArtifactId) -> PathBuf {
        self.output_dir().join(identifier.file_name())
    }

    /// Write `png` as the artifact for `identifier`, replacing any previous one.
    pub fn persist(&self, png: &[u8], identifier: &ArtifactId) -> Result<PersistedArtifact> {
        let dir = self.output_dir();
        std::fs::create_dir_all(&dir).map_err(|source| ArtifactError::StorageUnavailable {
            path: dir.clone(),
            source,
        })?;

        let target = self.path_for(identifier);
        let write_err = |source| ArtifactError::Write {
            path: target.clone(),
            source,
        };

        let mut tmp = tempfile::Builder::new()
            .prefix(TMP_PREFIX)
            .suffix(".tmp")
            .tempfile_in(&dir)
            .map_err(write_err)?;
        debug!(tmp = %tmp.path().display(), "Writing artifact to temporary file");

        tmp.write_all(png).map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;
        make_public(tmp.as_file()).map_err(write_err)?;

        // On failure the temporary file is removed when `PersistError` drops.
        tmp.persist(&target).map_err(|e| write_err(e.error))?;

        let path = std::path::absolute(&target).map_err(write_err)?;
        info!(
            identifier = %identifier,
            path = %path.display(),
            bytes = png.len(),
            "QR artifact persisted"
        );

        Ok(PersistedArtifact {
            identifier: identifier.clone(),
            path,
            relative_path: format!("{QR_CODE_DIR}/{}", identifier.file_name()),
        })
    }
}

/// Temporary files are created owner-only; published images must be
/// readable by the web server.
#[cfg(unix)]
fn make_public(file: &std::fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(std::fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn make_public(_file: &std::fs::File) -> std::io::Result<()> {
    Ok(())
}
