//! The device panel: owner of the control set and single event handler.
//!
//! All state changes happen inside [`DevicePanel::dispatch`], one event at a
//! time. Collaborators are reached through the traits in this crate and are
//! owned by the panel for its lifetime.

use crate::confirm::{ConfirmRequest, Confirmation, ConfirmationDialog};
use crate::control::{Control, ControlSet};
use crate::error::PanelError;
use crate::event::{PanelEvent, PanelOutput};
use crate::i18n::Localizer;
use crate::navigation::{NavigationEvent, Navigator};
use crate::params::{ParamStore, ParamValue};
use crate::reactor::{BrightnessControl, LiveStateReactor};
use crate::registry::{self, Scope, ToggleDescriptor};
use crate::visibility::{RenderSurface, TuningContext, apply_visibility};

/// External collaborators the panel drives.
pub struct Collaborators {
    pub params: Box<dyn ParamStore>,
    pub dialog: Box<dyn ConfirmationDialog>,
    pub brightness: Box<dyn BrightnessControl>,
    pub surface: Box<dyn RenderSurface>,
}

/// Tiered device settings panel.
pub struct DevicePanel {
    controls: ControlSet,
    navigator: Navigator,
    reactor: LiveStateReactor,
    tuning: TuningContext,
    shown: bool,
    host: Collaborators,
}

impl DevicePanel {
    /// Build the panel from the device toggle table.
    pub fn new(tr: &dyn Localizer, host: Collaborators) -> Result<Self, PanelError> {
        Self::with_descriptors(registry::device_toggles(tr), host)
    }

    /// Build the panel from an explicit descriptor list.
    pub fn with_descriptors(
        descriptors: Vec<ToggleDescriptor>,
        host: Collaborators,
    ) -> Result<Self, PanelError> {
        let controls = ControlSet::build(descriptors, host.params.as_ref())?;
        tracing::debug!("Device panel built with {} controls", controls.len());
        Ok(Self {
            controls,
            navigator: Navigator::new(),
            reactor: LiveStateReactor::new(),
            tuning: TuningContext::default(),
            shown: false,
            host,
        })
    }

    // ── Accessors ────────────────────────────────────────────────

    pub fn scope(&self) -> Scope {
        self.navigator.scope()
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Mirrored driving state.
    pub fn started(&self) -> bool {
        self.reactor.started()
    }

    pub fn tuning(&self) -> &TuningContext {
        &self.tuning
    }

    pub fn controls(&self) -> &ControlSet {
        &self.controls
    }

    pub fn control(&self, key: &str) -> Option<&Control> {
        self.controls.get(key)
    }

    pub fn visible_keys(&self) -> Vec<&'static str> {
        self.controls.visible_keys()
    }

    // ── Dispatch ─────────────────────────────────────────────────

    /// Handle one event and return the notifications it produced.
    pub fn dispatch(&mut self, event: PanelEvent) -> Result<Vec<PanelOutput>, PanelError> {
        let mut out = Vec::new();
        match event {
            PanelEvent::Shown { tuning } => self.show(tuning)?,
            PanelEvent::Hidden => {
                self.shown = false;
            }
            PanelEvent::LauncherActivated { key } => self.activate_launcher(&key, &mut out)?,
            PanelEvent::CloseSubPanel => self.navigate(NavigationEvent::Close),
            PanelEvent::DeviceState { started } => {
                self.reactor.on_device_state(started, self.shown);
            }
            PanelEvent::ValueEdited { key, value } => self.edit_value(&key, value, &mut out)?,
            PanelEvent::SubToggleEdited {
                key,
                sub_key,
                enabled,
            } => self.edit_sub_toggle(&key, &sub_key, enabled, &mut out)?,
        }
        Ok(out)
    }

    /// Adopt the parent's tuning context and return to the root view.
    fn show(&mut self, tuning: TuningContext) -> Result<(), PanelError> {
        tuning.validate(self.controls.keys())?;
        self.tuning = tuning;
        self.shown = true;
        self.navigate(NavigationEvent::Reset);
        Ok(())
    }

    fn navigate(&mut self, event: NavigationEvent) {
        if let Some(scope) = self.navigator.handle(event) {
            apply_visibility(
                &mut self.controls,
                scope,
                &self.tuning,
                self.host.surface.as_mut(),
            );
        }
    }

    fn activate_launcher(&mut self, key: &str, out: &mut Vec<PanelOutput>) -> Result<(), PanelError> {
        let target = self
            .controls
            .require(key)?
            .launch_target()
            .ok_or_else(|| PanelError::NotALauncher(key.to_string()))?;
        let before = self.navigator.scope();
        self.navigate(NavigationEvent::Open(target));
        if self.navigator.scope() != before {
            out.push(PanelOutput::SubPanelOpened { scope: target });
        }
        Ok(())
    }

    fn edit_value(
        &mut self,
        key: &str,
        edit: ParamValue,
        out: &mut Vec<PanelOutput>,
    ) -> Result<(), PanelError> {
        let control = self.controls.require(key)?;
        let value = control.resolve_edit(edit)?;
        if control.value() == Some(value) {
            // Nothing to store, but a brightness pick suppressed earlier by
            // the driving state must still reach the hardware now.
            self.apply_brightness(key, value, out);
            return Ok(());
        }

        if control.requires_confirmation() && value == ParamValue::Bool(true) {
            let request = ConfirmRequest {
                key: key.to_string(),
                prompt: control.descriptor().description.prompt(),
                warning: control.descriptor().description.is_warning(),
                secondary: false,
            };
            if self.host.dialog.confirm(&request) == Confirmation::Cancelled {
                tracing::info!("{key}: change cancelled at confirmation");
                out.push(PanelOutput::EditCancelled {
                    key: key.to_string(),
                });
                return Ok(());
            }
        }

        self.host.params.put(key, value)?;
        self.controls.require_mut(key)?.apply(value);
        tracing::info!("{key} = {value}");
        out.push(PanelOutput::ValueCommitted {
            key: key.to_string(),
            value,
        });

        self.apply_brightness(key, value, out);
        Ok(())
    }

    fn apply_brightness(&mut self, key: &str, value: ParamValue, out: &mut Vec<PanelOutput>) {
        if self
            .reactor
            .on_value_changed(key, value, self.host.brightness.as_mut())
        {
            if let ParamValue::Int(level) = value {
                out.push(PanelOutput::BrightnessApplied { value: level });
            }
        }
    }

    fn edit_sub_toggle(
        &mut self,
        key: &str,
        sub_key: &str,
        enabled: bool,
        out: &mut Vec<PanelOutput>,
    ) -> Result<(), PanelError> {
        let control = self.controls.require(key)?;
        let index = control.sub_index(sub_key)?;
        if control.sub_flag(index) == Some(enabled) {
            return Ok(());
        }

        self.host.params.put(sub_key, ParamValue::Bool(enabled))?;
        self.controls.require_mut(key)?.set_sub_flag(index, enabled);
        tracing::info!("{key}/{sub_key} = {enabled}");
        out.push(PanelOutput::ValueCommitted {
            key: sub_key.to_string(),
            value: ParamValue::Bool(enabled),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Untranslated;
    use crate::params::MemoryParams;
    use crate::visibility::HeadlessSurface;

    struct Decline;

    impl ConfirmationDialog for Decline {
        fn confirm(&mut self, _request: &ConfirmRequest) -> Confirmation {
            Confirmation::Cancelled
        }
    }

    struct NoHardware;

    impl BrightnessControl for NoHardware {
        fn set_brightness(&mut self, _value: i32) {}
    }

    fn panel(params: MemoryParams) -> DevicePanel {
        DevicePanel::new(
            &Untranslated,
            Collaborators {
                params: Box::new(params),
                dialog: Box::new(Decline),
                brightness: Box::new(NoHardware),
                surface: Box::new(HeadlessSurface),
            },
        )
        .unwrap()
    }

    fn shown_event(level: f64) -> PanelEvent {
        let tuning = TuningContext::new(
            level,
            registry::device_toggles(&Untranslated)
                .into_iter()
                .map(|d| (d.key, 1.0)),
        );
        PanelEvent::Shown { tuning }
    }

    #[test]
    fn test_nothing_visible_before_first_show() {
        let panel = panel(MemoryParams::new());
        assert!(!panel.is_shown());
        assert!(panel.visible_keys().is_empty());
    }

    #[test]
    fn test_show_resets_to_root() {
        let mut panel = panel(MemoryParams::new());
        panel.dispatch(shown_event(1.0)).unwrap();
        let out = panel
            .dispatch(PanelEvent::LauncherActivated {
                key: "ScreenManagement".to_string(),
            })
            .unwrap();
        assert_eq!(
            out,
            vec![PanelOutput::SubPanelOpened {
                scope: Scope::ScreenManagement
            }]
        );
        panel.dispatch(PanelEvent::Hidden).unwrap();
        panel.dispatch(shown_event(1.0)).unwrap();
        assert_eq!(panel.scope(), Scope::Root);
        assert_eq!(panel.visible_keys(), vec!["DeviceManagement", "ScreenManagement"]);
    }

    #[test]
    fn test_launcher_event_on_plain_toggle_is_rejected() {
        let mut panel = panel(MemoryParams::new());
        let err = panel
            .dispatch(PanelEvent::LauncherActivated {
                key: "OfflineMode".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, PanelError::NotALauncher(_)));
    }

    #[test]
    fn test_turning_confirmed_toggle_off_needs_no_dialog() {
        let params = MemoryParams::with_values([("NoLogging", ParamValue::Bool(true))]);
        let mut panel = panel(params.clone());
        let out = panel
            .dispatch(PanelEvent::ValueEdited {
                key: "NoLogging".to_string(),
                value: ParamValue::Bool(false),
            })
            .unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(params.get_bool("NoLogging"), Some(false));
    }

    #[test]
    fn test_unchanged_edit_is_a_no_op() {
        let params = MemoryParams::new();
        let mut panel = panel(params.clone());
        let out = panel
            .dispatch(PanelEvent::ValueEdited {
                key: "OfflineMode".to_string(),
                value: ParamValue::Bool(false),
            })
            .unwrap();
        assert!(out.is_empty());
        assert!(params.is_empty());
    }

    #[test]
    fn test_sub_toggle_persists_under_sub_key() {
        let params = MemoryParams::new();
        let mut panel = panel(params.clone());
        let out = panel
            .dispatch(PanelEvent::SubToggleEdited {
                key: "NoUploads".to_string(),
                sub_key: "DisableOnroadUploads".to_string(),
                enabled: true,
            })
            .unwrap();
        assert_eq!(
            out,
            vec![PanelOutput::ValueCommitted {
                key: "DisableOnroadUploads".to_string(),
                value: ParamValue::Bool(true),
            }]
        );
        assert_eq!(params.get_bool("DisableOnroadUploads"), Some(true));
        assert_eq!(params.get_bool("NoUploads"), None);

        let err = panel
            .dispatch(PanelEvent::SubToggleEdited {
                key: "NoUploads".to_string(),
                sub_key: "Nope".to_string(),
                enabled: true,
            })
            .unwrap_err();
        assert!(matches!(err, PanelError::UnknownSubKey { .. }));

        let err = panel
            .dispatch(PanelEvent::SubToggleEdited {
                key: "NoLogging".to_string(),
                sub_key: "DisableOnroadUploads".to_string(),
                enabled: true,
            })
            .unwrap_err();
        assert!(matches!(err, PanelError::NotAGroup(_)));
    }
}
