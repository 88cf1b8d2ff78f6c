use thiserror::Error;

/// Errors that terminate a run. Per-page and per-company failures are
/// recovered inside the engine and never surface here.
#[derive(Error, Debug)]
pub enum FinderError {
    #[error("failed to read input file {path}: {source}")]
    Input {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output file {path}: {source}")]
    Output {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Config(String),

    #[error("failed to install signal handler: {0}")]
    Signal(#[from] ctrlc::Error),
}

pub type Result<T> = std::result::Result<T, FinderError>;
