//! The device panel's toggle table.
//!
//! Declaration order is display order. The two launchers come first in
//! their group, followed by the keys their sub-panel owns.

use crate::i18n::Localizer;
use crate::labels::{ValueLabels, brightness_label, shutdown_timer_label};

use super::{Description, Scope, SubToggle, ToggleDescriptor, ToggleKind};

/// Offroad screen brightness, applied live only while not driving.
pub const BRIGHTNESS_OFFROAD_KEY: &str = "ScreenBrightness";
/// Onroad screen brightness, applied live only while driving.
pub const BRIGHTNESS_ONROAD_KEY: &str = "ScreenBrightnessOnroad";

/// Keys shown only inside the device management sub-panel.
pub const DEVICE_MANAGEMENT_KEYS: &[&str] = &[
    "DeviceShutdown",
    "OfflineMode",
    "IncreaseThermalLimits",
    "LowVoltageShutdown",
    "NoLogging",
    "NoUploads",
];

/// Keys shown only inside the screen management sub-panel.
pub const SCREEN_MANAGEMENT_KEYS: &[&str] = &[
    BRIGHTNESS_OFFROAD_KEY,
    BRIGHTNESS_ONROAD_KEY,
    "ScreenRecorder",
    "ScreenTimeout",
    "ScreenTimeoutOnroad",
];

/// Toggles whose enabling must be confirmed by the user first.
pub const CONFIRMATION_KEYS: &[&str] = &["IncreaseThermalLimits", "NoLogging", "NoUploads"];

const ICON_DEVICE: &str = "../frogpilot/assets/toggle_icons/icon_device.png";
const ICON_LIGHT: &str = "../frogpilot/assets/toggle_icons/icon_light.png";

struct Row {
    key: &'static str,
    title: &'static str,
    warning: Option<&'static str>,
    text: &'static str,
    icon: Option<&'static str>,
}

const ROWS: &[Row] = &[
    Row {
        key: "DeviceManagement",
        title: "Device Settings",
        warning: None,
        text: "Device behavior settings.",
        icon: Some(ICON_DEVICE),
    },
    Row {
        key: "DeviceShutdown",
        title: "Device Shutdown Timer",
        warning: None,
        text: "Controls how long the device stays on after you stop driving.",
        icon: None,
    },
    Row {
        key: "OfflineMode",
        title: "Disable Internet Requirement",
        warning: None,
        text: "Allows the device to work without an internet connection.",
        icon: None,
    },
    Row {
        key: "IncreaseThermalLimits",
        title: "Increase Thermal Safety Limit",
        warning: Some(
            "WARNING: This can cause premature wear or damage by running the device over comma's recommended temperature limits!",
        ),
        text: "Allows the device to run at higher temperatures than recommended.",
        icon: None,
    },
    Row {
        key: "LowVoltageShutdown",
        title: "Low Battery Shutdown Threshold",
        warning: None,
        text: "Manages the threshold for shutting down the device to protect the car's battery from excessive drain and potential damage.",
        icon: None,
    },
    Row {
        key: "NoLogging",
        title: "Turn Off Data Tracking",
        warning: Some(
            "WARNING: This will prevent your drives from being recorded and the data will be unobtainable!",
        ),
        text: "Disables all data tracking to improve privacy.",
        icon: None,
    },
    Row {
        key: "NoUploads",
        title: "Turn Off Data Uploads",
        warning: Some(
            "WARNING: This will prevent your drives from appearing on comma connect which may impact debugging and support!",
        ),
        text: "Stops the device from sending any data to the servers.",
        icon: None,
    },
    Row {
        key: "ScreenManagement",
        title: "Screen Settings",
        warning: None,
        text: "Screen behavior settings.",
        icon: Some(ICON_LIGHT),
    },
    Row {
        key: BRIGHTNESS_OFFROAD_KEY,
        title: "Screen Brightness (Offroad)",
        warning: None,
        text: "Controls the screen brightness when you're not driving.",
        icon: None,
    },
    Row {
        key: BRIGHTNESS_ONROAD_KEY,
        title: "Screen Brightness (Onroad)",
        warning: None,
        text: "Controls the screen brightness while you're driving.",
        icon: None,
    },
    Row {
        key: "ScreenRecorder",
        title: "Screen Recorder",
        warning: None,
        text: "Enables a button in the onroad UI to record the screen.",
        icon: None,
    },
    Row {
        key: "ScreenTimeout",
        title: "Screen Timeout (Offroad)",
        warning: None,
        text: "Controls how long it takes for the screen to turn off when you're not driving.",
        icon: None,
    },
    Row {
        key: "ScreenTimeoutOnroad",
        title: "Screen Timeout (Onroad)",
        warning: None,
        text: "Controls how long it takes for the screen to turn off while you're driving.",
        icon: None,
    },
];

/// Whether enabling `key` needs an explicit confirmation.
pub fn requires_confirmation(key: &str) -> bool {
    CONFIRMATION_KEYS.contains(&key)
}

/// Kind-specific parameters for `key`. Keys without a special case are
/// plain booleans.
fn kind_for(key: &'static str, tr: &dyn Localizer) -> ToggleKind {
    match key {
        "DeviceManagement" => ToggleKind::PanelLauncher {
            target: Scope::DeviceManagement,
        },
        "ScreenManagement" => ToggleKind::PanelLauncher {
            target: Scope::ScreenManagement,
        },
        "DeviceShutdown" => ToggleKind::DiscreteLabeledRange {
            min: 0,
            max: 33,
            default: 9,
            labels: ValueLabels::table(0, 33, |v| shutdown_timer_label(v, tr)),
        },
        "LowVoltageShutdown" => ToggleKind::ContinuousRange {
            min: 11.8,
            max: 12.5,
            step: 0.1,
            default: 11.8,
            suffix: tr.tr(" volts").into_owned(),
        },
        "NoUploads" => ToggleKind::MultiSubToggleGroup {
            default: false,
            subs: vec![SubToggle {
                key: "DisableOnroadUploads",
                label: tr.tr("Only Onroad").into_owned(),
            }],
        },
        BRIGHTNESS_OFFROAD_KEY | BRIGHTNESS_ONROAD_KEY => {
            let min = if key == BRIGHTNESS_ONROAD_KEY { 0 } else { 1 };
            ToggleKind::DiscreteLabeledRange {
                min,
                max: 101,
                default: 101,
                labels: ValueLabels::table(0, 101, |v| brightness_label(v, tr)),
            }
        }
        "ScreenTimeout" | "ScreenTimeoutOnroad" => ToggleKind::DiscreteLabeledRange {
            min: 5,
            max: 60,
            default: if key == "ScreenTimeout" { 30 } else { 10 },
            labels: ValueLabels::Suffix(tr.tr(" seconds").into_owned()),
        },
        _ => ToggleKind::Boolean { default: false },
    }
}

/// Build the device panel's descriptors in declaration order.
pub fn device_toggles(tr: &dyn Localizer) -> Vec<ToggleDescriptor> {
    ROWS.iter()
        .map(|row| {
            let text = tr.tr(row.text).into_owned();
            let description = match row.warning {
                Some(warning) => Description::warning(tr.tr(warning).into_owned(), text),
                None => Description::plain(text),
            };
            ToggleDescriptor {
                key: row.key,
                title: tr.tr(row.title).into_owned(),
                description,
                icon: row.icon,
                kind: kind_for(row.key, tr),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Untranslated;

    #[test]
    fn test_thirteen_toggles_in_declaration_order() {
        let toggles = device_toggles(&Untranslated);
        let keys: Vec<_> = toggles.iter().map(|t| t.key).collect();
        assert_eq!(keys.len(), 13);
        assert_eq!(keys[0], "DeviceManagement");
        assert_eq!(keys[7], "ScreenManagement");
        assert_eq!(keys[12], "ScreenTimeoutOnroad");
    }

    #[test]
    fn test_every_scope_member_is_declared() {
        let toggles = device_toggles(&Untranslated);
        for scope in Scope::sub_panels() {
            for member in scope.members() {
                assert!(
                    toggles.iter().any(|t| t.key == *member),
                    "{member} owned by {:?} but not declared",
                    scope
                );
            }
        }
    }

    #[test]
    fn test_launchers_target_their_scope() {
        let toggles = device_toggles(&Untranslated);
        let launcher_targets: Vec<_> = toggles
            .iter()
            .filter_map(|t| match t.kind {
                ToggleKind::PanelLauncher { target } => Some((t.key, target)),
                _ => None,
            })
            .collect();
        assert_eq!(
            launcher_targets,
            vec![
                ("DeviceManagement", Scope::DeviceManagement),
                ("ScreenManagement", Scope::ScreenManagement),
            ]
        );
    }

    #[test]
    fn test_brightness_domains_differ_per_variant() {
        let toggles = device_toggles(&Untranslated);
        let min_of = |key: &str| {
            toggles
                .iter()
                .find(|t| t.key == key)
                .and_then(|t| match t.kind {
                    ToggleKind::DiscreteLabeledRange { min, .. } => Some(min),
                    _ => None,
                })
        };
        assert_eq!(min_of(BRIGHTNESS_OFFROAD_KEY), Some(1));
        assert_eq!(min_of(BRIGHTNESS_ONROAD_KEY), Some(0));
    }

    #[test]
    fn test_warnings_only_on_confirmation_toggles() {
        for toggle in device_toggles(&Untranslated) {
            assert_eq!(
                toggle.description.is_warning(),
                requires_confirmation(toggle.key),
                "{}",
                toggle.key
            );
        }
    }

    #[test]
    fn test_unlisted_keys_are_boolean() {
        let toggles = device_toggles(&Untranslated);
        for key in ["OfflineMode", "IncreaseThermalLimits", "NoLogging", "ScreenRecorder"] {
            let toggle = toggles.iter().find(|t| t.key == key).unwrap();
            assert_eq!(toggle.kind, ToggleKind::Boolean { default: false });
        }
    }
}
