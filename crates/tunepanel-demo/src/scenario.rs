//! Scripted event sequences replayed against the panel.
//!
//! A scenario file is JSON:
//!
//! ```json
//! { "steps": [
//!     { "event": { "type": "Shown", "data": { "tuning": { ... } } } },
//!     { "delay_ms": 250, "event": { "type": "DeviceState", "data": { "started": true } } }
//! ] }
//! ```

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tunepanel_core::registry::device_toggles;
use tunepanel_core::{PanelEvent, ParamValue, TuningContext, Untranslated};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Pause before delivering the event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<u64>,
    pub event: PanelEvent,
}

impl Step {
    fn now(event: PanelEvent) -> Self {
        Self {
            delay_ms: None,
            event,
        }
    }

    fn after(delay_ms: u64, event: PanelEvent) -> Self {
        Self {
            delay_ms: Some(delay_ms),
            event,
        }
    }
}

impl Scenario {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing scenario {}", path.display()))
    }

    /// A short drive: browse both sub-panels, adjust brightness parked and
    /// driving, then try to turn logging off.
    pub fn builtin(tuning_level: f64) -> Self {
        let edit = |key: &str, value: ParamValue| PanelEvent::ValueEdited {
            key: key.to_string(),
            value,
        };
        let launch = |key: &str| PanelEvent::LauncherActivated {
            key: key.to_string(),
        };

        Self {
            steps: vec![
                Step::now(PanelEvent::Shown {
                    tuning: default_tuning(tuning_level),
                }),
                Step::now(launch("ScreenManagement")),
                Step::after(100, edit("ScreenBrightness", ParamValue::Int(50))),
                Step::now(edit("ScreenTimeout", ParamValue::Int(45))),
                Step::after(200, PanelEvent::DeviceState { started: true }),
                Step::now(edit("ScreenBrightness", ParamValue::Int(20))),
                Step::now(edit("ScreenBrightnessOnroad", ParamValue::Int(0))),
                Step::after(100, PanelEvent::CloseSubPanel),
                Step::now(launch("DeviceManagement")),
                Step::now(edit("DeviceShutdown", ParamValue::Int(6))),
                Step::now(edit("LowVoltageShutdown", ParamValue::Float(12.04))),
                Step::after(100, edit("NoLogging", ParamValue::Bool(true))),
                Step::now(PanelEvent::SubToggleEdited {
                    key: "NoUploads".to_string(),
                    sub_key: "DisableOnroadUploads".to_string(),
                    enabled: true,
                }),
                Step::after(200, PanelEvent::DeviceState { started: false }),
                Step::now(PanelEvent::CloseSubPanel),
                Step::now(PanelEvent::Hidden),
            ],
        }
    }
}

/// Tier each device toggle unlocks at.
fn required_level(key: &str) -> f64 {
    match key {
        "DeviceManagement" | "ScreenManagement" => 0.0,
        "NoLogging" | "NoUploads" | "IncreaseThermalLimits" | "LowVoltageShutdown" => 3.0,
        "ScreenRecorder" | "ScreenTimeoutOnroad" | "OfflineMode" => 2.0,
        _ => 1.0,
    }
}

/// Tuning context covering every device toggle.
pub fn default_tuning(tuning_level: f64) -> TuningContext {
    TuningContext::new(
        tuning_level,
        device_toggles(&Untranslated)
            .into_iter()
            .map(|d| (d.key, required_level(d.key))),
    )
}
