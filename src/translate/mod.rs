// Inference endpoint integration
//
// The endpoint receives the hosted video URL as a query parameter and answers
// with JSON carrying the translated text and an optional summary used as title.

pub mod client;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use client::{TranslationClient, parse_translation_response};
use crate::config::Config;
use crate::error::Result;

/// Translated text plus the display title chosen for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub text: String,
    pub title: String,
}

/// Main trait for translation requests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranslationService: Send + Sync {
    /// Translate the video hosted at `hosted_url`
    async fn translate(&self, hosted_url: &str) -> Result<Translation>;
}

/// Factory for creating translation service instances
pub struct TranslationServiceFactory;

impl TranslationServiceFactory {
    /// Create the default service, talking to the configured inference endpoint
    pub fn create_service(config: &Config) -> Result<Box<dyn TranslationService>> {
        let client = config.http.build_client()?;
        Ok(Box::new(TranslationClient::new(client, config.translate.clone())))
    }
}
