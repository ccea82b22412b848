//! Sub-panel navigation state machine.
//!
//! ```text
//!            Open(DeviceManagement)
//!   ┌──────┐ ─────────────────────→ ┌──────────────────┐
//!   │ Root │                        │ DeviceManagement │
//!   └──────┘ ←───────────────────── └──────────────────┘
//!      ↑ │        Close / Reset
//!      │ │ Open(ScreenManagement)   ┌──────────────────┐
//!      │ └────────────────────────→ │ ScreenManagement │
//!      └─────────────────────────── └──────────────────┘
//!                 Close / Reset
//! ```
//!
//! There is no terminal state. Every accepted event asks for a fresh
//! visibility pass, including `Close` while already at `Root`.

use crate::registry::Scope;

/// Input to the navigation machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationEvent {
    /// A panel launcher was activated.
    Open(Scope),
    /// The parent container closed the sub-panel.
    Close,
    /// The panel was shown again; any sub-panel selection is discarded.
    Reset,
}

/// Tracks the active scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigator {
    scope: Scope,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Apply `event`. Returns the scope to re-run visibility for, or `None`
    /// when the event was ignored.
    pub fn handle(&mut self, event: NavigationEvent) -> Option<Scope> {
        match event {
            NavigationEvent::Open(Scope::Root) => {
                tracing::debug!("Ignoring request to open the root scope as a sub-panel");
                None
            }
            NavigationEvent::Open(target) if self.scope == Scope::Root => {
                tracing::debug!("Navigation: Root -> {}", target.label());
                self.scope = target;
                Some(target)
            }
            NavigationEvent::Open(target) => {
                tracing::debug!(
                    "Ignoring open of {} while {} is active",
                    target.label(),
                    self.scope.label()
                );
                None
            }
            NavigationEvent::Close | NavigationEvent::Reset => {
                if self.scope != Scope::Root {
                    tracing::debug!("Navigation: {} -> Root ({event:?})", self.scope.label());
                }
                self.scope = Scope::Root;
                Some(Scope::Root)
            }
        }
    }
}
