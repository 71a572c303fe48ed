use thiserror::Error;

/// Local, non-fatal failures. None of these interrupt a drag in progress.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CaseError {
    /// No audio subsystem; sound stays disabled for the session.
    #[error("audio unsupported: {0}")]
    AudioUnsupported(String),

    /// Fetching or decoding the tap sound failed.
    #[error("failed to load sound {url}: {reason}")]
    AssetLoadFailed { url: String, reason: String },

    /// Uploaded or fetched resource is not a usable image.
    #[error("invalid image source: {0}")]
    InvalidImageSource(String),
}

impl CaseError {
    pub fn asset(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::AssetLoadFailed {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Whether the user can retry (pick another image, etc.).
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::InvalidImageSource(_))
    }
}

pub type CaseResult<T> = Result<T, CaseError>;
