use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("file {} is not valid UTF-8 text", file.display())]
    NonText { file: PathBuf },
}
