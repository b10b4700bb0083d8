//! Pipeline progress as a single tagged state.
//!
//! The orchestrator publishes every transition on a `tokio::sync::watch`
//! channel; the presentation side only reads.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStatus {
    /// No run in progress
    #[default]
    Idle,
    /// Reading the picked item and writing the scratch file
    Preparing,
    /// Sending the video to the media host
    Uploading,
    /// Waiting on the inference endpoint
    AwaitingTranslation,
    /// Handing the result to the completion
    Rendering,
    /// A step failed; immediately followed by `Idle`
    Failed,
}

impl PipelineStatus {
    /// Transient human-readable text for display. Not meant to be parsed.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Idle | Self::Failed => None,
            Self::Preparing => Some("Video received. Preparing upload..."),
            Self::Uploading => Some("Uploading video..."),
            Self::AwaitingTranslation => Some("Awaiting translation response..."),
            Self::Rendering => Some("Rendering translation..."),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// True while a run holds the pipeline
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle | Self::Failed)
    }
}

impl std::fmt::Display for PipelineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Preparing => write!(f, "preparing"),
            Self::Uploading => write!(f, "uploading"),
            Self::AwaitingTranslation => write!(f, "awaiting_translation"),
            Self::Rendering => write!(f, "rendering"),
            Self::Failed => write!(f, "failed"),
        }
    }
}
