//! Live driving-state reactor for the brightness controls.
//!
//! Each brightness control is tied to a mode. A committed value reaches the
//! hardware only when that mode matches the mirrored driving state:
//!
//! ```text
//! ScreenBrightness        → applied iff !started
//! ScreenBrightnessOnroad  → applied iff  started
//! ```
//!
//! Mismatches are dropped, not queued.

use crate::params::ParamValue;
use crate::registry::{BRIGHTNESS_OFFROAD_KEY, BRIGHTNESS_ONROAD_KEY};

/// Hardware brightness interface. Fire-and-forget.
pub trait BrightnessControl {
    fn set_brightness(&mut self, value: i32);
}

/// Which driving state a brightness control targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrightnessMode {
    Offroad,
    Onroad,
}

impl BrightnessMode {
    /// The mode of a brightness control key.
    pub fn for_key(key: &str) -> Option<Self> {
        match key {
            BRIGHTNESS_OFFROAD_KEY => Some(Self::Offroad),
            BRIGHTNESS_ONROAD_KEY => Some(Self::Onroad),
            _ => None,
        }
    }

    pub const fn matches(self, started: bool) -> bool {
        match self {
            Self::Offroad => !started,
            Self::Onroad => started,
        }
    }
}

/// Mirrors the device's `started` flag and gates brightness application.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveStateReactor {
    started: bool,
}

impl LiveStateReactor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn started(&self) -> bool {
        self.started
    }

    /// Mirror a driving-state update. Updates arriving while the panel is
    /// hidden are ignored. Returns whether the mirrored flag changed.
    pub fn on_device_state(&mut self, started: bool, panel_visible: bool) -> bool {
        if !panel_visible {
            return false;
        }
        let changed = self.started != started;
        if changed {
            tracing::debug!("Driving state changed: started={started}");
        }
        self.started = started;
        changed
    }

    /// React to a committed value. Returns whether the hardware was called.
    pub fn on_value_changed(
        &self,
        key: &str,
        value: ParamValue,
        hardware: &mut dyn BrightnessControl,
    ) -> bool {
        let Some(mode) = BrightnessMode::for_key(key) else {
            return false;
        };
        let Some(level) = value.as_int() else {
            return false;
        };
        if !mode.matches(self.started) {
            tracing::trace!(
                "{key}: not applying brightness {level} (started={})",
                self.started
            );
            return false;
        }
        hardware.set_brightness(level);
        true
    }
}
