//! Console stand-ins for the panel's collaborators.

use tunepanel_core::{
    BrightnessControl, ConfirmRequest, Confirmation, ConfirmationDialog, RenderSurface,
};

/// Logs brightness changes instead of touching a backlight.
#[derive(Debug, Default)]
pub struct LoggingBrightness;

impl BrightnessControl for LoggingBrightness {
    fn set_brightness(&mut self, value: i32) {
        tracing::info!("[hardware] brightness -> {value}");
    }
}

/// Answers every confirmation with a fixed response.
#[derive(Debug)]
pub struct ScriptedDialog {
    accept: bool,
}

impl ScriptedDialog {
    pub fn new(accept: bool) -> Self {
        Self { accept }
    }
}

impl ConfirmationDialog for ScriptedDialog {
    fn confirm(&mut self, request: &ConfirmRequest) -> Confirmation {
        let severity = if request.warning { "warning" } else { "info" };
        tracing::info!("[dialog:{severity}] {}: {}", request.key, request.prompt);
        if self.accept {
            Confirmation::Accepted
        } else {
            Confirmation::Cancelled
        }
    }
}

/// Counts widget updates and reports each repaint.
#[derive(Debug, Default)]
pub struct LoggingSurface {
    visible: Vec<String>,
    suspended: bool,
}

impl RenderSurface for LoggingSurface {
    fn set_updates_enabled(&mut self, enabled: bool) {
        self.suspended = !enabled;
        if self.suspended {
            self.visible.clear();
        }
    }

    fn set_control_visible(&mut self, key: &str, visible: bool) {
        if !self.suspended {
            tracing::warn!("{key} changed visibility outside a visibility pass");
        }
        if visible {
            self.visible.push(key.to_string());
        }
    }

    fn request_repaint(&mut self) {
        tracing::info!("[screen] {}", self.visible.join(", "));
    }
}
