use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading seed data.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Reading a seed file failed.
    #[error("failed to read seed file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Seed text did not deserialize into the requested type.
    #[error("failed to parse seed data")]
    Parse(#[from] serde_json::Error),
}
