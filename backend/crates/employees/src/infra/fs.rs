//! Filesystem Attachment Store
//!
//! Persists attachments in one flat content directory. Writes go to a
//! temporary name first and are renamed into place, so a stored name
//! never points at a half-written file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::fs;

use crate::domain::repository::AttachmentStore;
use crate::domain::value_object::stored_name::StoredName;
use crate::error::{EmployeeError, EmployeeResult};

/// Filesystem-backed attachment store
#[derive(Clone)]
pub struct FsAttachmentStore {
    content_dir: Arc<PathBuf>,
}

impl FsAttachmentStore {
    /// Create a store over the given content directory
    ///
    /// The directory location is deployment configuration; it is always
    /// injected, never hard-coded.
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: Arc::new(content_dir.into()),
        }
    }

    /// Create the content directory if it does not exist yet
    pub async fn ensure_content_dir(&self) -> EmployeeResult<()> {
        fs::create_dir_all(self.content_dir.as_ref())
            .await
            .map_err(EmployeeError::StorageWrite)
    }

    pub fn content_dir(&self) -> &Path {
        self.content_dir.as_ref()
    }

    fn path_of(&self, stored_name: &StoredName) -> PathBuf {
        self.content_dir.join(stored_name.as_str())
    }
}

impl AttachmentStore for FsAttachmentStore {
    async fn store(&self, bytes: &[u8], original_filename: &str) -> EmployeeResult<StoredName> {
        let stored_name = StoredName::generate(original_filename);
        let final_path = self.path_of(&stored_name);

        // Write-then-rename within the same directory: the final name
        // only ever appears once the content is fully on disk.
        let tmp_path = self.content_dir.join(format!(".tmp-{}", stored_name.as_str()));

        fs::write(&tmp_path, bytes)
            .await
            .map_err(EmployeeError::StorageWrite)?;

        if let Err(e) = fs::rename(&tmp_path, &final_path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(EmployeeError::StorageWrite(e));
        }

        tracing::debug!(
            stored_name = %stored_name,
            size = bytes.len(),
            "Stored attachment"
        );

        Ok(stored_name)
    }

    async fn replace(
        &self,
        old: Option<&StoredName>,
        bytes: &[u8],
        original_filename: &str,
    ) -> EmployeeResult<StoredName> {
        let stored_name = self.store(bytes, original_filename).await?;

        // Only after the new content is durably in place
        if let Some(old) = old {
            if let Err(e) = self.delete(old).await {
                tracing::warn!(
                    stored_name = %old,
                    error = %e,
                    "Failed to delete superseded attachment"
                );
            }
        }

        Ok(stored_name)
    }

    async fn delete(&self, stored_name: &StoredName) -> EmployeeResult<()> {
        match fs::remove_file(self.path_of(stored_name)).await {
            Ok(()) => {
                tracing::debug!(stored_name = %stored_name, "Deleted attachment");
                Ok(())
            }
            // Idempotent: deleting an absent file is a no-op
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(EmployeeError::StorageDelete(e)),
        }
    }

    async fn read(&self, stored_name: &StoredName) -> EmployeeResult<Option<Vec<u8>>> {
        match fs::read(self.path_of(stored_name)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(EmployeeError::StorageRead(e)),
        }
    }
}
