use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, info};

use super::{Translation, TranslationService};
use crate::config::TranslateConfig;
use crate::error::{Result, SignaiError, StageFailure};

/// Translation Request Client: a single GET per hosted video, no retries.
pub struct TranslationClient {
    client: Client,
    config: TranslateConfig,
}

impl TranslationClient {
    pub fn new(client: Client, config: TranslateConfig) -> Self {
        Self { client, config }
    }

    /// Endpoint URL with the hosted video URL percent-encoded into the query
    pub fn request_url(&self, hosted_url: &str) -> Result<Url> {
        Url::parse_with_params(&self.config.endpoint, &[(self.config.query_param.as_str(), hosted_url)])
            .map_err(|e| SignaiError::Config(format!("Invalid translation endpoint: {}", e)))
    }
}

#[async_trait]
impl TranslationService for TranslationClient {
    async fn translate(&self, hosted_url: &str) -> Result<Translation> {
        let url = self.request_url(hosted_url)?;
        debug!("Sending translation request to: {}", url);

        let response = self.client
            .get(url)
            .send()
            .await
            .map_err(|e| SignaiError::TranslationFailed(StageFailure::Transport(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SignaiError::TranslationFailed(StageFailure::Status(status.as_u16())));
        }

        let body = response.text().await
            .map_err(|e| SignaiError::TranslationFailed(StageFailure::Transport(e.to_string())))?;

        let translation = parse_translation_response(&body, &self.config.default_title)
            .map_err(SignaiError::TranslationFailed)?;
        info!("Received translation \"{}\" ({} chars)", translation.title, translation.text.len());
        Ok(translation)
    }
}

/// Parse the inference endpoint's reply.
///
/// `translation` must be a non-blank string. `summary` becomes the title when
/// it is a string; otherwise `default_title` is used.
pub fn parse_translation_response(
    body: &str,
    default_title: &str,
) -> std::result::Result<Translation, StageFailure> {
    let json: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| StageFailure::Malformed(format!("translation response is not JSON: {}", e)))?;

    let text = json.get("translation")
        .and_then(|v| v.as_str())
        .ok_or_else(|| StageFailure::Malformed("missing translation field".to_string()))?;

    if text.trim().is_empty() {
        return Err(StageFailure::Malformed("empty translation".to_string()));
    }

    let title = json.get("summary")
        .and_then(|v| v.as_str())
        .unwrap_or(default_title);

    Ok(Translation {
        text: text.to_string(),
        title: title.to_string(),
    })
}
