use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::error::{Result, SignaiError};

/// A video the user picked, whatever the platform hands us for it.
#[async_trait]
pub trait PickedMediaSource: Send + Sync {
    /// Load the full video into memory
    async fn read_bytes(&self) -> Result<Vec<u8>>;

    /// Short label for logs
    fn describe(&self) -> String;
}

/// A video already on the local filesystem.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PickedMediaSource for FileSource {
    async fn read_bytes(&self) -> Result<Vec<u8>> {
        let bytes = fs::read(&self.path).await.map_err(|e| {
            SignaiError::LocalIoFailed(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        debug!("Read {} bytes from {}", bytes.len(), self.path.display());
        Ok(bytes)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// A video handed over as a buffer.
pub struct MemorySource {
    bytes: Vec<u8>,
}

impl MemorySource {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

#[async_trait]
impl PickedMediaSource for MemorySource {
    async fn read_bytes(&self) -> Result<Vec<u8>> {
        if self.bytes.is_empty() {
            return Err(SignaiError::LocalIoFailed("Picked item is empty".to_string()));
        }
        Ok(self.bytes.clone())
    }

    fn describe(&self) -> String {
        format!("<{} bytes in memory>", self.bytes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[tokio::test]
    async fn test_file_source_reads_bytes() {
        let temp = assert_fs::TempDir::new().unwrap();
        let video = temp.child("clip.mov");
        video.write_binary(b"\x00\x00\x00\x14ftypqt  ").unwrap();

        let source = FileSource::new(video.path());
        let bytes = source.read_bytes().await.unwrap();
        assert_eq!(bytes.len(), 12);
        assert!(source.describe().ends_with("clip.mov"));
    }

    #[tokio::test]
    async fn test_missing_file_is_local_io_failure() {
        let source = FileSource::new("/nonexistent/clip.mov");
        let err = source.read_bytes().await.unwrap_err();
        assert!(matches!(err, SignaiError::LocalIoFailed(_)));
    }

    #[test]
    fn test_empty_memory_source_fails() {
        let err = tokio_test::block_on(MemorySource::new(Vec::new()).read_bytes()).unwrap_err();
        assert!(matches!(err, SignaiError::LocalIoFailed(_)));

        let bytes = tokio_test::block_on(MemorySource::new(vec![1, 2, 3]).read_bytes());
        assert_eq!(tokio_test::assert_ok!(bytes), vec![1, 2, 3]);
    }
}
