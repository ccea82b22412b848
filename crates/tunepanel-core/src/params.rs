//! Persistent parameter values and the store seam.
//!
//! Controls read their initial value from a [`ParamStore`] under their own
//! key and write back through it when an edit commits. The panel never
//! caches a value the store refused to take.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::ParamError;

/// A typed parameter value.
///
/// Serialized untagged so a parameter file reads as plain JSON scalars
/// (`true`, `50`, `12.1`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i32),
    Float(f32),
}

impl ParamValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Integers widen to floats; a file written by hand may store `12`
    /// where `12.0` was meant.
    pub fn as_float(&self) -> Option<f32> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f32),
            Self::Bool(_) => None,
        }
    }

    /// Short type name for diagnostics.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

/// Key/value access to persistent parameters.
pub trait ParamStore {
    /// Read the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<ParamValue>;

    /// Store `value` under `key`.
    fn put(&mut self, key: &str, value: ParamValue) -> Result<(), ParamError>;

    fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(|v| v.as_bool())
    }
}

/// In-memory parameter store.
///
/// Clones share the same underlying map, so a host can hand one clone to
/// the panel and keep another to observe what was written.
#[derive(Debug, Clone, Default)]
pub struct MemoryParams {
    values: Arc<RwLock<HashMap<String, ParamValue>>>,
}

impl MemoryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `values`.
    pub fn with_values<K: Into<String>>(values: impl IntoIterator<Item = (K, ParamValue)>) -> Self {
        let map = values.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Self {
            values: Arc::new(RwLock::new(map)),
        }
    }

    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }
}

impl ParamStore for MemoryParams {
    fn get(&self, key: &str) -> Option<ParamValue> {
        self.values.read().get(key).copied()
    }

    fn put(&mut self, key: &str, value: ParamValue) -> Result<(), ParamError> {
        self.values.write().insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_json_scalars() {
        let values: Vec<ParamValue> = serde_json::from_str("[true, 50, 12.1]").unwrap();
        assert_eq!(values[0], ParamValue::Bool(true));
        assert_eq!(values[1], ParamValue::Int(50));
        assert_eq!(values[2], ParamValue::Float(12.1));
    }

    #[test]
    fn test_int_widens_to_float() {
        assert_eq!(ParamValue::Int(12).as_float(), Some(12.0));
        assert_eq!(ParamValue::Bool(true).as_float(), None);
        assert_eq!(ParamValue::Float(1.0).as_int(), None);
    }

    #[test]
    fn test_memory_params_clones_share_state() {
        let observer = MemoryParams::new();
        let mut writer = observer.clone();
        writer.put("OfflineMode", ParamValue::Bool(true)).unwrap();
        assert_eq!(observer.get_bool("OfflineMode"), Some(true));
        assert_eq!(observer.len(), 1);
    }
}
