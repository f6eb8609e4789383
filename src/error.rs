use std::path::PathBuf;
use thiserror::Error;

/// Main error type for resection
#[derive(Error, Debug)]
pub enum ResectionError {
    #[error("IO error: {source}")]
    Io {
        source: std::io::Error,
        path: Option<PathBuf>,
    },

    #[error("Invalid job: {message}")]
    InvalidJob { message: String },

    #[error("Could not find section to replace: start={}, end={}", sentinel(.start), sentinel(.end))]
    SectionNotFound {
        start: Option<usize>,
        end: Option<usize>,
    },
}

impl ResectionError {
    /// Create a new IO error with path context
    pub fn io_error(err: std::io::Error, path: Option<impl Into<PathBuf>>) -> Self {
        Self::Io {
            source: err,
            path: path.map(|p| p.into()),
        }
    }

    /// Create a new invalid job error
    pub fn invalid_job(message: impl Into<String>) -> Self {
        Self::InvalidJob {
            message: message.into(),
        }
    }

    /// Path the error relates to, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => path.as_ref(),
            _ => None,
        }
    }
}

/// Render an optional offset the way `str::find` callers traditionally do
pub(crate) fn sentinel(offset: &Option<usize>) -> String {
    match offset {
        Some(offset) => offset.to_string(),
        None => "-1".to_string(),
    }
}

impl From<std::io::Error> for ResectionError {
    fn from(error: std::io::Error) -> Self {
        ResectionError::io_error(error, None::<PathBuf>)
    }
}

impl From<toml::de::Error> for ResectionError {
    fn from(error: toml::de::Error) -> Self {
        ResectionError::invalid_job(error.to_string())
    }
}

/// Result type alias using ResectionError
pub type ResectionResult<T> = Result<T, ResectionError>;

/// Contextual error mapping function
pub fn map_io_err<P: Into<PathBuf>>(path: P) -> impl FnOnce(std::io::Error) -> ResectionError {
    let path = path.into();
    move |err| ResectionError::io_error(err, Some(path))
}
