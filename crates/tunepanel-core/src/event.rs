//! Messages into and out of the panel.
//!
//! Every external notification (parent show/hide, navigation, driving
//! state, user edits) reaches the panel as one [`PanelEvent`] handled by
//! [`DevicePanel::dispatch`](crate::panel::DevicePanel::dispatch). Events
//! use the `#[serde(tag = "type", content = "data")]` layout so hosts can
//! script or forward them as JSON.

use serde::{Deserialize, Serialize};

use crate::params::ParamValue;
use crate::registry::Scope;
use crate::visibility::TuningContext;

/// Notifications consumed by the panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PanelEvent {
    /// The panel became visible. Carries the parent's current tuning
    /// context, which replaces the previous one.
    Shown { tuning: TuningContext },

    /// The panel was hidden.
    Hidden,

    /// The user activated a panel launcher.
    LauncherActivated { key: String },

    /// The parent container closed the open sub-panel.
    CloseSubPanel,

    /// Periodic driving-state update.
    DeviceState { started: bool },

    /// The user changed a control's value.
    ValueEdited { key: String, value: ParamValue },

    /// The user flipped a sub-toggle of a group.
    SubToggleEdited {
        key: String,
        sub_key: String,
        enabled: bool,
    },
}

/// Notifications produced by the panel for its parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PanelOutput {
    /// A sub-panel opened; the parent should offer a way back.
    SubPanelOpened { scope: Scope },

    /// A value was written to the parameter store.
    ValueCommitted { key: String, value: ParamValue },

    /// The user declined a confirmation; the stored value is unchanged.
    EditCancelled { key: String },

    /// A brightness value was pushed to the hardware.
    BrightnessApplied { value: i32 },
}
