// Media host integration
//
// - Transfer: multipart upload of the picked video, returns the hosted URL
// - Thumbnail: still-frame URL derived from the hosted URL by naming convention

pub mod thumbnail;
pub mod transfer;

use async_trait::async_trait;

pub use thumbnail::derive_thumbnail_url;
pub use transfer::MediaTransferClient;

use crate::config::Config;
use crate::error::Result;

/// Uploads video bytes to a media host
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaUploader: Send + Sync {
    /// Upload the video and return its public (hosted) URL
    async fn upload(&self, bytes: Vec<u8>) -> Result<String>;
}

/// Factory for creating uploader instances
pub struct MediaUploaderFactory;

impl MediaUploaderFactory {
    /// Create the default uploader, talking to the configured media host
    pub fn create_uploader(config: &Config) -> Result<Box<dyn MediaUploader>> {
        let client = config.http.build_client()?;
        Ok(Box::new(MediaTransferClient::new(client, config.upload.clone())))
    }
}
