//! Tunepanel Core — domain layer for the tiered device settings panel.
//!
//! This crate declares the device toggles, instantiates live controls from
//! them, resolves which controls are visible for the active sub-panel and
//! tuning level, and reacts to driving-state changes. Rendering, storage,
//! dialogs and hardware are reached only through the traits defined here.

pub mod confirm;
pub mod control;
pub mod error;
pub mod event;
pub mod i18n;
pub mod labels;
pub mod navigation;
pub mod panel;
pub mod params;
pub mod reactor;
pub mod registry;
pub mod visibility;

// Re-exports for convenience.
pub use confirm::{ConfirmRequest, Confirmation, ConfirmationDialog};
pub use control::{Control, ControlSet, ControlState};
pub use error::{PanelError, ParamError};
pub use event::{PanelEvent, PanelOutput};
pub use i18n::{Localizer, Untranslated};
pub use navigation::{NavigationEvent, Navigator};
pub use panel::{Collaborators, DevicePanel};
pub use params::{MemoryParams, ParamStore, ParamValue};
pub use reactor::{BrightnessControl, BrightnessMode, LiveStateReactor};
pub use registry::{Description, Scope, SubToggle, ToggleDescriptor, ToggleKind};
pub use visibility::{HeadlessSurface, RenderSurface, TuningContext, visible};
