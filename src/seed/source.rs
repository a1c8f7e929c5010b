use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::seed::error::SeedError;

/// A data source that yields a seed value exactly once.
///
/// Sources are consumed on load; a store built from a source takes
/// ownership of whatever the source produces.
pub trait SeedSource<T> {
    /// Produce the seed value.
    fn load(self) -> Result<T, SeedError>;
}

/// A seed source wrapping an already-constructed value.
///
/// Loading an inline seed never fails.
pub struct InlineSeed<T>(T);

impl<T> InlineSeed<T> {
    /// Wrap a value as a seed source.
    pub fn new(value: T) -> Self {
        Self(value)
    }
}

impl<T> SeedSource<T> for InlineSeed<T> {
    fn load(self) -> Result<T, SeedError> {
        Ok(self.0)
    }
}

/// A seed source holding JSON text.
///
/// The text is deserialized into the target payload type when the source
/// is loaded.
pub struct JsonSeed {
    text: String,
}

impl JsonSeed {
    /// Use the given JSON text as seed data.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Read seed data from a JSON file.
    ///
    /// The file is read eagerly so I/O failures surface here rather than
    /// at load time.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = text.len(), "seed file read");
        Ok(Self { text })
    }
}

impl<T: DeserializeOwned> SeedSource<T> for JsonSeed {
    fn load(self) -> Result<T, SeedError> {
        let value = serde_json::from_str(&self.text)?;
        Ok(value)
    }
}
