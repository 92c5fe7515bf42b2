use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File {path} is not valid UTF-8")]
    NotUtf8 { path: PathBuf },

    #[error("File {path} is empty")]
    Empty { path: PathBuf },

    #[error("File {path} contains no Chinese words")]
    NoChineseWords { path: PathBuf },

    #[error("Failed to write output for {path}: {source:#}")]
    Write {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

impl ProcessError {
    /// Content problems are expected in a batch; I/O and encoding are not
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Empty { .. } | Self::NoChineseWords { .. })
    }
}
