//! Visibility resolution by scope and tuning level.
//!
//! A toggle is visible iff the tuning level reaches its required level and
//! it belongs to the active scope:
//!
//! ```text
//! scope == Root  → key is owned by no sub-panel
//! scope == S     → key ∈ S.members()
//! ```
//!
//! The pass is always applied to every control, with rendering updates
//! suspended for its duration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::control::ControlSet;
use crate::error::PanelError;
use crate::registry::Scope;

// ── Tuning context ───────────────────────────────────────────────

/// Tuning level and per-toggle requirements supplied by the parent on show.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TuningContext {
    /// The user's configured tier.
    pub tuning_level: f64,
    /// Minimum tier per toggle key.
    #[serde(default)]
    pub required_levels: HashMap<String, f64>,
}

impl TuningContext {
    pub fn new<K: Into<String>>(
        tuning_level: f64,
        required_levels: impl IntoIterator<Item = (K, f64)>,
    ) -> Self {
        Self {
            tuning_level,
            required_levels: required_levels
                .into_iter()
                .map(|(k, v)| (k.into(), v))
                .collect(),
        }
    }

    /// Parse the parent's JSON context.
    pub fn from_json(json: &str) -> Result<Self, PanelError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn required_level(&self, key: &str) -> Option<f64> {
        self.required_levels.get(key).copied()
    }

    /// Check that every key has a required level.
    pub fn validate<'a>(&self, keys: impl IntoIterator<Item = &'a str>) -> Result<(), PanelError> {
        for key in keys {
            if !self.required_levels.contains_key(key) {
                return Err(PanelError::MissingRequiredLevel(key.to_string()));
            }
        }
        Ok(())
    }

    /// Whether the tuning level reaches `key`'s requirement. Keys without a
    /// requirement never pass; [`validate`](Self::validate) rules them out
    /// before a pass runs.
    pub fn allows(&self, key: &str) -> bool {
        self.required_level(key)
            .is_some_and(|required| self.tuning_level >= required)
    }
}

/// Whether `key` is shown in `scope` under `tuning`.
pub fn visible(key: &str, scope: Scope, tuning: &TuningContext) -> bool {
    let in_scope = match scope {
        Scope::Root => Scope::owner_of(key).is_none(),
        sub => sub.contains(key),
    };
    in_scope && tuning.allows(key)
}

// ── Rendering seam ───────────────────────────────────────────────

/// The host toolkit's view of the panel.
pub trait RenderSurface {
    /// Suspend (`false`) or resume (`true`) repainting.
    fn set_updates_enabled(&mut self, enabled: bool);

    /// Show or hide the widget for `key`.
    fn set_control_visible(&mut self, key: &str, visible: bool);

    /// Schedule one repaint.
    fn request_repaint(&mut self);
}

/// Surface for hosts with nothing to draw.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessSurface;

impl RenderSurface for HeadlessSurface {
    fn set_updates_enabled(&mut self, _enabled: bool) {}
    fn set_control_visible(&mut self, _key: &str, _visible: bool) {}
    fn request_repaint(&mut self) {}
}

/// Keeps rendering suspended while alive. Dropping it resumes updates and
/// requests a single repaint.
pub struct UpdatesSuspended<'a> {
    surface: &'a mut dyn RenderSurface,
}

impl<'a> UpdatesSuspended<'a> {
    pub fn new(surface: &'a mut dyn RenderSurface) -> Self {
        surface.set_updates_enabled(false);
        Self { surface }
    }

    pub fn surface(&mut self) -> &mut dyn RenderSurface {
        &mut *self.surface
    }
}

impl Drop for UpdatesSuspended<'_> {
    fn drop(&mut self) {
        self.surface.set_updates_enabled(true);
        self.surface.request_repaint();
    }
}

/// Recompute visibility for every control and push it to `surface`.
///
/// Returns the number of visible controls.
pub fn apply_visibility(
    controls: &mut ControlSet,
    scope: Scope,
    tuning: &TuningContext,
    surface: &mut dyn RenderSurface,
) -> usize {
    let mut guard = UpdatesSuspended::new(surface);
    let mut shown = 0;
    for control in controls.iter_mut() {
        let is_visible = visible(control.key(), scope, tuning);
        control.set_visible(is_visible);
        guard.surface().set_control_visible(control.key(), is_visible);
        shown += usize::from(is_visible);
    }
    tracing::debug!(
        "Visibility pass for {}: {shown}/{} shown at tuning level {}",
        scope.label(),
        controls.len(),
        tuning.tuning_level
    );
    shown
}
