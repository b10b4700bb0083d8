use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use crate::error::{Result, SignaiError};

fn default_file_name() -> String {
    "video.mov".to_string()
}

fn default_content_type() -> String {
    "video/quicktime".to_string()
}

fn default_query_param() -> String {
    "video_url".to_string()
}

fn default_title() -> String {
    "Conversation".to_string()
}

fn default_user_agent() -> String {
    format!("signai/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub upload: UploadConfig,
    pub translate: TranslateConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub scratch: ScratchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Media host upload endpoint (multipart POST)
    pub endpoint: String,
    /// Upload preset naming the target bucket/policy on the media host
    pub upload_preset: String,
    /// Filename reported in the `file` form part
    #[serde(default = "default_file_name")]
    pub file_name: String,
    /// Content type of the `file` form part
    #[serde(default = "default_content_type")]
    pub content_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateConfig {
    /// Inference endpoint, without query string
    pub endpoint: String,
    /// Query parameter carrying the hosted video URL
    #[serde(default = "default_query_param")]
    pub query_param: String,
    /// Title used when the response has no usable `summary`
    #[serde(default = "default_title")]
    pub default_title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Request timeout in seconds; unset keeps the HTTP client's default
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScratchConfig {
    /// Directory for scratch video copies; the system temp dir when unset
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.cloudinary.com/v1_1/dzonya1wx/video/upload".to_string(),
            upload_preset: "signai".to_string(),
            file_name: default_file_name(),
            content_type: default_content_type(),
        }
    }
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://aiapi.signai.ar/predict_gemini".to_string(),
            query_param: default_query_param(),
            default_title: default_title(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: None,
        }
    }
}

impl HttpConfig {
    /// Build the shared HTTP client used by both remote stages.
    pub fn build_client(&self) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder().user_agent(&self.user_agent);
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build().map_err(SignaiError::Http)
    }
}

impl ScratchConfig {
    pub fn resolve_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SignaiError::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| SignaiError::Config(format!("Failed to parse config file: {}", e)))
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SignaiError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| SignaiError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }
}
