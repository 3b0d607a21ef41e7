use crate::errors::TabstackError;

/// Failure reported by the host's property lookup mechanism itself.
///
/// The resolver never escalates this: a failed lookup is handled exactly
/// like an absent property and only surfaces in logs.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Host lookup failed for key '{key}': {reason}")]
    LookupFailed { key: String, reason: String },

    #[error("Host object is no longer valid: {reason}")]
    StaleObject { reason: String },
}

impl TabstackError for ProbeError {
    fn error_code(&self) -> &'static str {
        match self {
            ProbeError::LookupFailed { .. } => "HOST_LOOKUP_FAILED",
            ProbeError::StaleObject { .. } => "HOST_STALE_OBJECT",
        }
    }
}

/// Failure while loading a scripted scene from disk.
///
/// Scene files are a fixture-layer concern: unlike resolution misses these
/// are real errors the caller (the CLI) reports and exits on.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("Scene file not found at '{path}'")]
    SceneNotFound { path: String },

    #[error("Failed to parse scene file: {message}")]
    SceneParseError { message: String },

    #[error("IO error reading scene: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl TabstackError for SceneError {
    fn error_code(&self) -> &'static str {
        match self {
            SceneError::SceneNotFound { .. } => "SCENE_NOT_FOUND",
            SceneError::SceneParseError { .. } => "SCENE_PARSE_ERROR",
            SceneError::IoError { .. } => "SCENE_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            SceneError::SceneNotFound { .. } | SceneError::SceneParseError { .. }
        )
    }
}
