use thiserror::Error;

#[derive(Error, Debug)]
pub enum LintError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not a file or directory: {0}")]
    InvalidPath(String),

    #[error("{failed} of {total} files failed validation")]
    ChecksFailed { failed: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, LintError>;
