//! JSON-file parameter store.
//!
//! The whole parameter set is one JSON object:
//!
//! ```json
//! { "DeviceShutdown": 9, "NoLogging": false, "LowVoltageShutdown": 11.8 }
//! ```
//!
//! Reads are served from memory. Every `put` rewrites the file through a
//! sibling temp file and a rename, so a crash mid-write leaves either the
//! old or the new file, never a truncated one.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use tunepanel_core::{ParamError, ParamStore, ParamValue};

/// Failure to open a parameter file.
#[derive(Debug, thiserror::Error)]
pub enum OpenError {
    #[error("failed to read parameter file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("parameter file {path} is not a JSON object of scalars: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Parameter store persisted to a single JSON file.
///
/// Clones share the cache and the file path.
#[derive(Debug, Clone)]
pub struct JsonParams {
    path: PathBuf,
    values: Arc<RwLock<BTreeMap<String, ParamValue>>>,
}

impl JsonParams {
    /// Open the store at `path`. A missing file is an empty store; the file
    /// is created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, OpenError> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => serde_json::from_str(&text).map_err(|source| OpenError::Parse {
                path: path.clone(),
                source,
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No parameter file at {}, starting empty", path.display());
                BTreeMap::new()
            }
            Err(source) => {
                return Err(OpenError::Read {
                    path: path.clone(),
                    source,
                });
            }
        };
        tracing::info!("Loaded {} parameters from {}", values.len(), path.display());
        Ok(Self {
            path,
            values: Arc::new(RwLock::new(values)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }

    fn persist(&self, values: &BTreeMap<String, ParamValue>) -> Result<(), ParamError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let tmp = temp_path(&self.path);
        let json = serde_json::to_vec_pretty(values)?;
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(&json)?;
            file.write_all(b"\n")?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl ParamStore for JsonParams {
    fn get(&self, key: &str) -> Option<ParamValue> {
        self.values.read().get(key).copied()
    }

    fn put(&mut self, key: &str, value: ParamValue) -> Result<(), ParamError> {
        let mut values = self.values.write();
        let previous = values.insert(key.to_string(), value);
        if let Err(e) = self.persist(&values) {
            // Keep the cache in step with what is on disk.
            match previous {
                Some(old) => values.insert(key.to_string(), old),
                None => values.remove(key),
            };
            tracing::warn!("Failed to persist {key}: {e}");
            return Err(e);
        }
        tracing::trace!("Persisted {key} = {value} to {}", self.path.display());
        Ok(())
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_path_is_a_sibling() {
        assert_eq!(
            temp_path(Path::new("/data/params.json")),
            PathBuf::from("/data/params.json.tmp")
        );
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let params = JsonParams::open(dir.path().join("absent.json")).unwrap();
        assert!(params.is_empty());
        assert_eq!(params.get("NoLogging"), None);
    }

    #[test]
    fn test_rejects_non_object_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        fs::write(&path, "[1, 2, 3]").unwrap();
        let err = JsonParams::open(&path).unwrap_err();
        assert!(matches!(err, OpenError::Parse { .. }));
    }
}
