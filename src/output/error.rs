// Thu Oct 15 2026 - Alex

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output directory {0} does not exist")]
    MissingDirectory(PathBuf),
}
