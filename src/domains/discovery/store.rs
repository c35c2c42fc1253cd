//! Read-only access to the bundled artifact directory.
//!
//! The store deliberately collapses "file missing" and "file unparseable"
//! into a single absent state: the caller's only valid reaction is the same
//! structured not-found envelope in both cases.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::debug;

use super::keys::SCHEMA_DIR;
use super::model::Capability;

/// Filename of the capability collection artifact.
pub const CAPABILITIES_FILE: &str = "capabilities.json";

/// Filename of the schema index artifact.
pub const SCHEMA_INDEX_FILE: &str = "schema-paths.json";

/// Read-only view over the data directory of bundled artifacts.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    data_dir: PathBuf,
}

impl ArtifactStore {
    /// Create a store rooted at the given data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The root directory this store reads from.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load and deserialize a JSON artifact. Absent on any failure.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let text = self.load_text(key)?;
        match serde_json::from_str(&text) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!("Malformed artifact {key}: {e}");
                None
            }
        }
    }

    /// Load a JSON artifact as a raw value. Absent on any failure.
    pub fn load_json(&self, key: &str) -> Option<serde_json::Value> {
        self.load(key)
    }

    /// Load an artifact as text. Absent on any failure.
    pub fn load_text(&self, key: &str) -> Option<String> {
        let path = self.data_dir.join(key);
        match std::fs::read_to_string(&path) {
            Ok(text) => Some(text),
            Err(e) => {
                debug!("Artifact {} not readable: {e}", path.display());
                None
            }
        }
    }

    /// Load a schema artifact by its canonical key.
    pub fn load_schema(&self, key: &str) -> Option<serde_json::Value> {
        self.load_json(&format!("{SCHEMA_DIR}/{key}"))
    }

    /// The capability collection, in stored order.
    pub fn capabilities(&self) -> Option<Vec<Capability>> {
        self.load(CAPABILITIES_FILE)
    }

    /// The schema index: the enumerable universe of valid schema paths.
    /// An unreadable index reads as empty.
    pub fn schema_index(&self) -> Vec<String> {
        self.load(SCHEMA_INDEX_FILE).unwrap_or_default()
    }
}
