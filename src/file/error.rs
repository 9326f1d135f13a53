use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while backing up or importing bindings
#[derive(Error, Debug)]
pub enum BindPadError {
    /// A required input (installation path or account name) was empty
    #[error("Please fill in {0}")]
    MissingInput(&'static str),

    /// Expected source or target file does not exist
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Source and target of an import are the same file
    #[error("Source and target are the same file: {}", .0.display())]
    SameFile(PathBuf),

    /// Copy or metadata update failed for any other reason
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for backup and import operations
pub type BindPadResult<T> = Result<T, BindPadError>;

impl BindPadError {
    /// Wrap an I/O error, promoting `NotFound` to `FileNotFound`
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound(path)
        } else {
            Self::Io { path, source }
        }
    }

    /// Short label used for notifications and exit-code mapping
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingInput(_) => "missing_input",
            Self::FileNotFound(_) => "file_not_found",
            Self::SameFile(_) => "same_file",
            Self::Io { .. } => "io_failure",
        }
    }
}
