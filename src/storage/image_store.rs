use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::{AppError, Result};

/// Directory-backed blob store for uploaded product images.
///
/// Filenames are generated as `{uuid_v4}.{extension}`, so two stores never
/// hand out the same name and writes never need an existence check.
#[derive(Clone)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    /// Open a store rooted at `root`, creating the directory if absent.
    pub fn open(root: &Path) -> Result<Self> {
        std::fs::create_dir_all(root)?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// Write `bytes` under a freshly generated filename and return it.
    pub async fn store(&self, bytes: &[u8], extension: &str) -> Result<String> {
        let filename = format!("{}.{}", Uuid::new_v4(), extension);
        let path = self.resolve(&filename)?;
        tokio::fs::write(path, bytes).await?;
        Ok(filename)
    }

    pub async fn read(&self, filename: &str) -> Result<Option<Vec<u8>>> {
        let path = self.resolve(filename)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Remove the file if it exists; absent files are not an error.
    pub async fn delete(&self, filename: &str) -> Result<()> {
        let path = self.resolve(filename)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn exists(&self, filename: &str) -> Result<bool> {
        let path = self.resolve(filename)?;
        Ok(tokio::fs::try_exists(&path).await?)
    }

    /// Map a filename to a path under the root. Rejects names that could
    /// escape the store directory.
    fn resolve(&self, filename: &str) -> Result<PathBuf> {
        if filename.is_empty()
            || filename.contains('/')
            || filename.contains('\\')
            || filename.contains("..")
        {
            return Err(AppError::BadRequest(format!(
                "Invalid image filename: {:?}",
                filename
            )));
        }

        Ok(self.root.join(filename))
    }
}
