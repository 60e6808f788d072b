use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AcrylisError {
    #[error("failed to perform local ingredient analysis: {0}")]
    Classification(String),

    #[error("failed to load term list from {path}: {reason}")]
    TermListLoad { path: PathBuf, reason: String },

    #[error("invalid term list: {0}")]
    TermListInvalid(String),

    #[error("unknown term list '{0}'. Available: acrylates, fungal-acne")]
    UnknownPreset(String),

    #[error("no ingredient list given. Pass --text, an input file, or pipe the list on stdin")]
    EmptyInput,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
