//! Toggle descriptors and the scopes that group them.
//!
//! A [`ToggleDescriptor`] is immutable data: key, display strings, icon and
//! a [`ToggleKind`] carrying the kind-specific parameters. Scope membership
//! is fixed here as constants and looked up, never mutated.

pub mod device;

use serde::{Deserialize, Serialize};

use crate::labels::ValueLabels;

pub use device::{
    BRIGHTNESS_OFFROAD_KEY, BRIGHTNESS_ONROAD_KEY, CONFIRMATION_KEYS, DEVICE_MANAGEMENT_KEYS,
    SCREEN_MANAGEMENT_KEYS, device_toggles, requires_confirmation,
};

// ── Scope ────────────────────────────────────────────────────────

/// The active sub-panel context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Scope {
    /// Top-level view. Shows every toggle that no sub-panel owns.
    #[default]
    Root,
    /// Device behavior settings.
    DeviceManagement,
    /// Screen behavior settings.
    ScreenManagement,
}

impl Scope {
    /// Human-readable label for logs and status text.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Root => "Root",
            Self::DeviceManagement => "Device Management",
            Self::ScreenManagement => "Screen Management",
        }
    }

    /// Scopes that own a member set.
    pub fn sub_panels() -> &'static [Self] {
        const SUB: [Scope; 2] = [Scope::DeviceManagement, Scope::ScreenManagement];
        &SUB
    }

    /// Keys owned by this scope. `Root` owns none.
    pub fn members(&self) -> &'static [&'static str] {
        match self {
            Self::Root => &[],
            Self::DeviceManagement => DEVICE_MANAGEMENT_KEYS,
            Self::ScreenManagement => SCREEN_MANAGEMENT_KEYS,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.members().contains(&key)
    }

    /// The sub-panel that owns `key`, if any.
    pub fn owner_of(key: &str) -> Option<Self> {
        Self::sub_panels()
            .iter()
            .copied()
            .find(|scope| scope.contains(key))
    }
}

// ── Descriptors ──────────────────────────────────────────────────

/// Toggle description, optionally led by a severity-flagged warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    /// Warning shown above the description and in confirmation prompts.
    pub warning: Option<String>,
    pub text: String,
}

impl Description {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            warning: None,
            text: text.into(),
        }
    }

    pub fn warning(warning: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            warning: Some(warning.into()),
            text: text.into(),
        }
    }

    pub fn is_warning(&self) -> bool {
        self.warning.is_some()
    }

    /// Warning and text joined for a dialog body.
    pub fn prompt(&self) -> String {
        match &self.warning {
            Some(warning) => format!("{warning}\n\n{}", self.text),
            None => self.text.clone(),
        }
    }
}

/// A dependent checkbox rendered under a group's primary toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubToggle {
    /// Persistence key of the sub-toggle.
    pub key: &'static str,
    pub label: String,
}

/// Control kind with its kind-specific parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum ToggleKind {
    /// Plain on/off.
    Boolean { default: bool },
    /// Integer domain `[min, max]` with per-value labels.
    DiscreteLabeledRange {
        min: i32,
        max: i32,
        default: i32,
        labels: ValueLabels,
    },
    /// Float domain `[min, max]` stepped by `step`.
    ContinuousRange {
        min: f32,
        max: f32,
        step: f32,
        default: f32,
        suffix: String,
    },
    /// Primary on/off plus ordered dependent sub-toggles.
    MultiSubToggleGroup { default: bool, subs: Vec<SubToggle> },
    /// Opens a sub-panel; holds no value.
    PanelLauncher { target: Scope },
}

impl ToggleKind {
    /// Short kind name for diagnostics.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Boolean { .. } => "boolean",
            Self::DiscreteLabeledRange { .. } => "discrete range",
            Self::ContinuousRange { .. } => "continuous range",
            Self::MultiSubToggleGroup { .. } => "sub-toggle group",
            Self::PanelLauncher { .. } => "panel launcher",
        }
    }
}

/// Immutable declaration of one toggle.
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleDescriptor {
    /// Unique identifier, also the persistence key.
    pub key: &'static str,
    pub title: String,
    pub description: Description,
    /// Icon asset path. `None` renders without an icon.
    pub icon: Option<&'static str>,
    pub kind: ToggleKind,
}
