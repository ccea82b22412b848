//! Ordered, key-addressable collection of controls.

use std::collections::HashMap;

use crate::error::PanelError;
use crate::params::ParamStore;
use crate::registry::ToggleDescriptor;

use super::Control;

/// Controls in declaration order, addressable by key.
#[derive(Debug, Clone, Default)]
pub struct ControlSet {
    controls: Vec<Control>,
    index: HashMap<&'static str, usize>,
}

impl ControlSet {
    /// Instantiate one control per descriptor.
    ///
    /// Fails on the first repeated key; no partially built set is returned.
    pub fn build(
        descriptors: Vec<ToggleDescriptor>,
        store: &dyn ParamStore,
    ) -> Result<Self, PanelError> {
        let mut set = Self {
            controls: Vec::with_capacity(descriptors.len()),
            index: HashMap::with_capacity(descriptors.len()),
        };
        for descriptor in descriptors {
            let key = descriptor.key;
            if set.index.contains_key(key) {
                return Err(PanelError::DuplicateKey(key.to_string()));
            }
            set.index.insert(key, set.controls.len());
            set.controls.push(Control::instantiate(descriptor, store));
        }
        Ok(set)
    }

    pub fn get(&self, key: &str) -> Option<&Control> {
        self.index.get(key).map(|&i| &self.controls[i])
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut Control> {
        self.index.get(key).map(|&i| &mut self.controls[i])
    }

    /// Like [`get`](Self::get), but an unknown key is an error.
    pub fn require(&self, key: &str) -> Result<&Control, PanelError> {
        self.get(key)
            .ok_or_else(|| PanelError::UnknownKey(key.to_string()))
    }

    pub(crate) fn require_mut(&mut self, key: &str) -> Result<&mut Control, PanelError> {
        self.get_mut(key)
            .ok_or_else(|| PanelError::UnknownKey(key.to_string()))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Control> {
        self.controls.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Control> {
        self.controls.iter_mut()
    }

    /// Keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.iter().map(Control::key)
    }

    /// Keys of the currently visible controls, in declaration order.
    pub fn visible_keys(&self) -> Vec<&'static str> {
        self.iter().filter(|c| c.is_visible()).map(Control::key).collect()
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}

impl<'a> IntoIterator for &'a ControlSet {
    type Item = &'a Control;
    type IntoIter = std::slice::Iter<'a, Control>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
