use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use tracing::{debug, info};

use super::MediaUploader;
use crate::config::UploadConfig;
use crate::error::{Result, SignaiError, StageFailure};

/// Media Transfer Client: one multipart POST per upload, no retries.
pub struct MediaTransferClient {
    client: Client,
    config: UploadConfig,
}

impl MediaTransferClient {
    pub fn new(client: Client, config: UploadConfig) -> Self {
        Self { client, config }
    }

    fn build_form(&self, bytes: Vec<u8>) -> Result<Form> {
        let part = Part::bytes(bytes)
            .file_name(self.config.file_name.clone())
            .mime_str(&self.config.content_type)
            .map_err(|e| SignaiError::Config(format!("Invalid upload content type: {}", e)))?;

        Ok(Form::new()
            .part("file", part)
            .text("upload_preset", self.config.upload_preset.clone()))
    }
}

#[async_trait]
impl MediaUploader for MediaTransferClient {
    async fn upload(&self, bytes: Vec<u8>) -> Result<String> {
        debug!("Uploading {} bytes to {}", bytes.len(), self.config.endpoint);
        let form = self.build_form(bytes)?;

        let response = self.client
            .post(&self.config.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| SignaiError::UploadFailed(StageFailure::Transport(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SignaiError::UploadFailed(StageFailure::Status(status.as_u16())));
        }

        let body = response.text().await
            .map_err(|e| SignaiError::UploadFailed(StageFailure::Transport(e.to_string())))?;

        let secure_url = parse_upload_response(&body).map_err(SignaiError::UploadFailed)?;
        info!("Video hosted at {}", secure_url);
        Ok(secure_url)
    }
}

/// Pull `secure_url` out of the media host's JSON reply.
pub fn parse_upload_response(body: &str) -> std::result::Result<String, StageFailure> {
    let json: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| StageFailure::Malformed(format!("upload response is not JSON: {}", e)))?;

    match json.get("secure_url").and_then(|v| v.as_str()) {
        Some(url) if !url.is_empty() => Ok(url.to_string()),
        _ => Err(StageFailure::Malformed("missing secure_url".to_string())),
    }
}
