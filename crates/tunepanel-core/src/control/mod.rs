//! Live controls instantiated from toggle descriptors.
//!
//! A [`Control`] owns its descriptor, the current value read from the
//! parameter store, its derived visibility and whether enabling it needs a
//! confirmation. Kind-specific state lives in [`ControlState`], matched
//! exhaustively wherever behavior differs per kind.

mod set;

pub use set::ControlSet;

use crate::error::PanelError;
use crate::labels::continuous_label;
use crate::params::{ParamStore, ParamValue};
use crate::registry::{self, Scope, SubToggle, ToggleDescriptor, ToggleKind};

/// Current value of a control, shaped by its kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlState {
    Toggle { on: bool },
    Discrete { value: i32 },
    Continuous { value: f32 },
    /// Primary toggle plus one flag per sub-toggle, in declaration order.
    Group { on: bool, subs: Vec<bool> },
    Launcher,
}

/// A live control bound to one descriptor.
#[derive(Debug, Clone)]
pub struct Control {
    descriptor: ToggleDescriptor,
    state: ControlState,
    visible: bool,
    requires_confirmation: bool,
}

impl Control {
    /// Instantiate the control for `descriptor`, reading its value from
    /// `store` under the descriptor key.
    pub fn instantiate(descriptor: ToggleDescriptor, store: &dyn ParamStore) -> Self {
        let key = descriptor.key;
        let state = match &descriptor.kind {
            ToggleKind::Boolean { default } => ControlState::Toggle {
                on: read_bool(store, key, *default),
            },
            ToggleKind::DiscreteLabeledRange {
                min, max, default, ..
            } => ControlState::Discrete {
                value: read_int(store, key, *min, *max, *default),
            },
            ToggleKind::ContinuousRange {
                min,
                max,
                step,
                default,
                ..
            } => ControlState::Continuous {
                value: read_float(store, key, *min, *max, *step, *default),
            },
            ToggleKind::MultiSubToggleGroup { default, subs } => ControlState::Group {
                on: read_bool(store, key, *default),
                subs: subs
                    .iter()
                    .map(|sub| read_bool(store, sub.key, false))
                    .collect(),
            },
            ToggleKind::PanelLauncher { .. } => ControlState::Launcher,
        };

        Self {
            requires_confirmation: registry::requires_confirmation(key),
            descriptor,
            state,
            visible: false,
        }
    }

    pub fn key(&self) -> &'static str {
        self.descriptor.key
    }

    pub fn descriptor(&self) -> &ToggleDescriptor {
        &self.descriptor
    }

    pub fn state(&self) -> &ControlState {
        &self.state
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Whether switching this control on must be confirmed first.
    pub fn requires_confirmation(&self) -> bool {
        self.requires_confirmation
    }

    /// The persisted value. Launchers hold none.
    pub fn value(&self) -> Option<ParamValue> {
        match &self.state {
            ControlState::Toggle { on } | ControlState::Group { on, .. } => {
                Some(ParamValue::Bool(*on))
            }
            ControlState::Discrete { value } => Some(ParamValue::Int(*value)),
            ControlState::Continuous { value } => Some(ParamValue::Float(*value)),
            ControlState::Launcher => None,
        }
    }

    /// Label for the current value of a range control.
    pub fn display_label(&self) -> Option<String> {
        match (&self.descriptor.kind, &self.state) {
            (ToggleKind::DiscreteLabeledRange { labels, .. }, ControlState::Discrete { value }) => {
                Some(labels.label(*value))
            }
            (
                ToggleKind::ContinuousRange { step, suffix, .. },
                ControlState::Continuous { value },
            ) => Some(continuous_label(*value, *step, suffix)),
            _ => None,
        }
    }

    /// The sub-panel a launcher opens.
    pub fn launch_target(&self) -> Option<Scope> {
        match self.descriptor.kind {
            ToggleKind::PanelLauncher { target } => Some(target),
            _ => None,
        }
    }

    /// Sub-toggles with their current flags.
    pub fn sub_toggles(&self) -> Vec<(&SubToggle, bool)> {
        match (&self.descriptor.kind, &self.state) {
            (ToggleKind::MultiSubToggleGroup { subs, .. }, ControlState::Group { subs: on, .. }) => {
                subs.iter().zip(on.iter().copied()).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Index of `sub_key` among this group's sub-toggles.
    pub(crate) fn sub_index(&self, sub_key: &str) -> Result<usize, PanelError> {
        let ToggleKind::MultiSubToggleGroup { subs, .. } = &self.descriptor.kind else {
            return Err(PanelError::NotAGroup(self.key().to_string()));
        };
        subs.iter()
            .position(|sub| sub.key == sub_key)
            .ok_or_else(|| PanelError::UnknownSubKey {
                key: self.key().to_string(),
                sub_key: sub_key.to_string(),
            })
    }

    pub(crate) fn sub_flag(&self, index: usize) -> Option<bool> {
        match &self.state {
            ControlState::Group { subs, .. } => subs.get(index).copied(),
            _ => None,
        }
    }

    pub(crate) fn set_sub_flag(&mut self, index: usize, enabled: bool) {
        if let ControlState::Group { subs, .. } = &mut self.state {
            if let Some(flag) = subs.get_mut(index) {
                *flag = enabled;
            }
        }
    }

    /// Validate an edit and normalize it into the value to persist.
    ///
    /// Numeric edits are clamped into the domain; continuous edits are also
    /// snapped to the step grid. A value of the wrong type is rejected.
    pub fn resolve_edit(&self, edit: ParamValue) -> Result<ParamValue, PanelError> {
        let mismatch = |expected| PanelError::ValueMismatch {
            key: self.key().to_string(),
            expected,
        };
        match &self.descriptor.kind {
            ToggleKind::Boolean { .. } | ToggleKind::MultiSubToggleGroup { .. } => edit
                .as_bool()
                .map(ParamValue::Bool)
                .ok_or_else(|| mismatch("bool")),
            ToggleKind::DiscreteLabeledRange { min, max, .. } => edit
                .as_int()
                .map(|v| ParamValue::Int(v.clamp(*min, *max)))
                .ok_or_else(|| mismatch("int")),
            ToggleKind::ContinuousRange { min, max, step, .. } => edit
                .as_float()
                .map(|v| ParamValue::Float(snap(v, *min, *max, *step)))
                .ok_or_else(|| mismatch("float")),
            ToggleKind::PanelLauncher { .. } => Err(mismatch("no value")),
        }
    }

    /// Adopt a committed value. The value must come from
    /// [`resolve_edit`](Self::resolve_edit).
    pub(crate) fn apply(&mut self, value: ParamValue) {
        match (&mut self.state, value) {
            (ControlState::Toggle { on }, ParamValue::Bool(b))
            | (ControlState::Group { on, .. }, ParamValue::Bool(b)) => *on = b,
            (ControlState::Discrete { value }, ParamValue::Int(v)) => *value = v,
            (ControlState::Continuous { value }, ParamValue::Float(v)) => *value = v,
            (state, value) => {
                tracing::warn!(
                    "{}: ignoring {} value for {:?}",
                    self.descriptor.key,
                    value.type_name(),
                    state
                );
            }
        }
    }
}

// ── Store reads ──────────────────────────────────────────────────

fn read_bool(store: &dyn ParamStore, key: &str, default: bool) -> bool {
    match store.get(key) {
        Some(ParamValue::Bool(b)) => b,
        None => default,
        Some(other) => {
            tracing::warn!("{key}: stored {} value, expected bool", other.type_name());
            default
        }
    }
}

fn read_int(store: &dyn ParamStore, key: &str, min: i32, max: i32, default: i32) -> i32 {
    match store.get(key) {
        Some(ParamValue::Int(v)) => {
            let clamped = v.clamp(min, max);
            if clamped != v {
                tracing::warn!("{key}: stored value {v} outside {min}..={max}, using {clamped}");
            }
            clamped
        }
        None => default,
        Some(other) => {
            tracing::warn!("{key}: stored {} value, expected int", other.type_name());
            default
        }
    }
}

fn read_float(
    store: &dyn ParamStore,
    key: &str,
    min: f32,
    max: f32,
    step: f32,
    default: f32,
) -> f32 {
    match store.get(key).map(|v| (v, v.as_float())) {
        Some((_, Some(v))) => {
            let snapped = snap(v, min, max, step);
            if (snapped - v).abs() > f32::EPSILON {
                tracing::warn!("{key}: stored value {v} adjusted to {snapped}");
            }
            snapped
        }
        None => default,
        Some((other, None)) => {
            tracing::warn!("{key}: stored {} value, expected float", other.type_name());
            default
        }
    }
}

/// Clamp `v` into `[min, max]` and round it to the nearest step.
fn snap(v: f32, min: f32, max: f32, step: f32) -> f32 {
    let clamped = v.clamp(min, max);
    if step <= 0.0 {
        return clamped;
    }
    let steps = ((clamped - min) / step).round();
    let scale = 10f32.powi(crate::labels::step_precision(step) as i32);
    ((min + steps * step) * scale).round() / scale
}
