//! Local tracking of managed plugins.
//!
//! A JSON file listing every plugin this tool has created or adopted,
//! with the state last read back from the server. Only tracked objects
//! (adopted or managed) are kept; deleted and forgotten ones are dropped.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use dirplug_core::ManagedObject;

use crate::error::CliError;

const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct Document {
    version: u32,
    #[serde(default)]
    plugins: Vec<ManagedObject>,
}

/// The tracking file, loaded into memory and keyed by plugin id.
#[derive(Debug)]
pub struct StateFile {
    path: PathBuf,
    objects: BTreeMap<String, ManagedObject>,
}

impl StateFile {
    /// Load the file at `path`. A missing file is an empty state.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let objects = match std::fs::read_to_string(path) {
            Ok(contents) => {
                let doc: Document =
                    serde_json::from_str(&contents).map_err(|e| CliError::State {
                        path: path.display().to_string(),
                        reason: e.to_string(),
                    })?;
                if doc.version != FORMAT_VERSION {
                    return Err(CliError::State {
                        path: path.display().to_string(),
                        reason: format!("unsupported format version {}", doc.version),
                    });
                }
                doc.plugins
                    .into_iter()
                    .map(|obj| (obj.id.clone(), obj))
                    .collect()
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no state file yet");
                BTreeMap::new()
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path: path.to_path_buf(),
            objects,
        })
    }

    /// Write the file back, creating parent directories as needed.
    pub fn save(&self) -> Result<(), CliError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let doc = Document {
            version: FORMAT_VERSION,
            plugins: self.objects.values().cloned().collect(),
        };
        let json = serde_json::to_string_pretty(&doc)?;

        // Write-then-rename so an interrupted save never truncates the file.
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), objects = self.objects.len(), "state saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, id: &str) -> Option<&ManagedObject> {
        self.objects.get(id)
    }

    /// Record `object`, or drop it if it is no longer tracked.
    pub fn record(&mut self, object: ManagedObject) {
        if object.state.is_tracked() {
            self.objects.insert(object.id.clone(), object);
        } else {
            self.objects.remove(&object.id);
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<ManagedObject> {
        self.objects.remove(id)
    }

    /// Tracked objects in id order.
    pub fn iter(&self) -> impl Iterator<Item = &ManagedObject> {
        self.objects.values()
    }
}
