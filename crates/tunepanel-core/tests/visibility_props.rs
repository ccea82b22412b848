//! Property tests for scope and tier visibility.

use proptest::prelude::*;

use tunepanel_core::registry::device_toggles;
use tunepanel_core::{
    BrightnessControl, Collaborators, ConfirmRequest, Confirmation, ConfirmationDialog,
    DevicePanel, HeadlessSurface, MemoryParams, PanelEvent, Scope, TuningContext, Untranslated,
    visible,
};

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

fn keys() -> Vec<&'static str> {
    device_toggles(&Untranslated).into_iter().map(|d| d.key).collect()
}

fn scope_strategy() -> impl Strategy<Value = Scope> {
    prop_oneof![
        Just(Scope::Root),
        Just(Scope::DeviceManagement),
        Just(Scope::ScreenManagement),
    ]
}

fn tuning_strategy() -> impl Strategy<Value = TuningContext> {
    let n = keys().len();
    (0u8..=3, prop::collection::vec(0u8..=3, n)).prop_map(|(level, required)| {
        TuningContext::new(
            f64::from(level),
            keys().into_iter().zip(required.into_iter().map(f64::from)),
        )
    })
}

proptest! {
    #[test]
    fn visible_iff_in_scope_and_tier_reached(scope in scope_strategy(), tuning in tuning_strategy()) {
        for key in keys() {
            let in_scope = match scope {
                Scope::Root => Scope::owner_of(key).is_none(),
                sub => sub.members().contains(&key),
            };
            let tier = tuning.tuning_level >= tuning.required_levels[key];
            prop_assert_eq!(visible(key, scope, &tuning), in_scope && tier, "key {}", key);
        }
    }

    #[test]
    fn sub_panel_never_shows_foreign_keys(scope in scope_strategy(), tuning in tuning_strategy()) {
        for key in keys() {
            if visible(key, scope, &tuning) {
                prop_assert_eq!(Scope::owner_of(key).unwrap_or(Scope::Root), scope);
            }
        }
    }

    #[test]
    fn panel_visible_set_matches_predicate(
        tuning in tuning_strategy(),
        launcher in prop_oneof![Just("DeviceManagement"), Just("ScreenManagement")],
    ) {
        let mut panel = DevicePanel::new(
            &Untranslated,
            Collaborators {
                params: Box::new(MemoryParams::new()),
                dialog: Box::new(Decline),
                brightness: Box::new(NoHardware),
                surface: Box::new(HeadlessSurface),
            },
        )
        .unwrap();
        panel.dispatch(PanelEvent::Shown { tuning: tuning.clone() }).unwrap();
        let root = panel.visible_keys();

        panel
            .dispatch(PanelEvent::LauncherActivated { key: launcher.to_string() })
            .unwrap();
        let scope = panel.scope();
        let expected: Vec<_> = keys()
            .into_iter()
            .filter(|key| visible(key, scope, &tuning))
            .collect();
        prop_assert_eq!(panel.visible_keys(), expected);

        panel.dispatch(PanelEvent::CloseSubPanel).unwrap();
        prop_assert_eq!(panel.visible_keys(), root);
    }
}
