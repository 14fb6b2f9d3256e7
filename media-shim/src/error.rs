use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to execute extractor: {0}")]
    ExecutionFailed(#[from] std::io::Error),

    #[error("{program} exited with code {code}: {stderr}")]
    CommandFailed {
        program: &'static str,
        code: i32,
        stderr: String
    },

    #[error("failed to parse JSON output: {source}")]
    JsonParseFailed {
        source: serde_json::Error,
        raw: String
    },

    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("no import path given (expected as the first argument)")]
    MissingImportPath,

    #[error("invalid extractor options: {0}")]
    InvalidOptions(String),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error
    }
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Error::Io { path, source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
