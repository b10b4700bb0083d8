use thiserror::Error;

/// Why a remote stage (upload or translation) did not produce a usable result.
#[derive(Error, Debug)]
pub enum StageFailure {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(String),
}

#[derive(Error, Debug)]
pub enum SignaiError {
    #[error("Upload failed: {0}")]
    UploadFailed(StageFailure),

    #[error("Translation failed: {0}")]
    TranslationFailed(StageFailure),

    #[error("Local IO failed: {0}")]
    LocalIoFailed(String),

    #[error("A pipeline run is already in progress")]
    Busy,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Coarse classification callers can branch on without inspecting messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Upload,
    Translation,
    LocalIo,
    Busy,
    Other,
}

impl SignaiError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::UploadFailed(_) => FailureKind::Upload,
            Self::TranslationFailed(_) => FailureKind::Translation,
            Self::LocalIoFailed(_) => FailureKind::LocalIo,
            Self::Busy => FailureKind::Busy,
            _ => FailureKind::Other,
        }
    }

    /// The stage failure cause, when the error came from a remote stage.
    pub fn stage_failure(&self) -> Option<&StageFailure> {
        match self {
            Self::UploadFailed(cause) | Self::TranslationFailed(cause) => Some(cause),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SignaiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        let upload = SignaiError::UploadFailed(StageFailure::Status(500));
        assert_eq!(upload.kind(), FailureKind::Upload);
        assert!(matches!(upload.stage_failure(), Some(StageFailure::Status(500))));

        let translation = SignaiError::TranslationFailed(StageFailure::Malformed("x".into()));
        assert_eq!(translation.kind(), FailureKind::Translation);

        assert_eq!(SignaiError::LocalIoFailed("gone".into()).kind(), FailureKind::LocalIo);
        assert_eq!(SignaiError::Busy.kind(), FailureKind::Busy);
        assert_eq!(SignaiError::Config("bad".into()).kind(), FailureKind::Other);
        assert!(SignaiError::Busy.stage_failure().is_none());
    }

    #[test]
    fn test_display_includes_cause() {
        let err = SignaiError::TranslationFailed(StageFailure::Transport("connection refused".into()));
        assert_eq!(
            err.to_string(),
            "Translation failed: transport error: connection refused"
        );
    }
}
