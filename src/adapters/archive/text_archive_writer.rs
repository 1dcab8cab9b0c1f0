use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::core::errors::{AuditLensError, Result};
use crate::core::services::archive_service::ArchivePlan;

/// Compute the SHA256 hex digest of the given bytes.
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

/// Where an archive landed and its checksum.
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenArchive {
    pub path: PathBuf,
    pub sha256: String,
}

/// Writes archive plans as UTF-8 text files into a directory.
pub struct TextArchiveWriter {
    out_dir: PathBuf,
}

impl TextArchiveWriter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// Write the plan's content. Refuses to replace an existing archive.
    pub fn write(&self, plan: &ArchivePlan) -> Result<WrittenArchive> {
        if !self.out_dir.exists() {
            fs::create_dir_all(&self.out_dir)?;
        }

        let path = self.out_dir.join(&plan.file_name);
        if path.exists() {
            return Err(AuditLensError::ArchiveError {
                reason: format!("{} already exists", path.display()),
            });
        }

        fs::write(&path, plan.content.as_bytes()).map_err(|e| AuditLensError::ArchiveError {
            reason: format!("cannot write {}: {e}", path.display()),
        })?;

        Ok(WrittenArchive {
            sha256: sha256_hex(plan.content.as_bytes()),
            path,
        })
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }
}
