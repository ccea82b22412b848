//! Error types for the panel model and its parameter stores.

/// Errors raised while building the panel or handling an event.
///
/// Every variant except [`PanelError::Store`] describes a programming or
/// configuration mistake on the host side: a malformed toggle table, a
/// parent context that forgot a toggle, or an event aimed at the wrong kind
/// of control.
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    #[error("duplicate toggle key: {0}")]
    DuplicateKey(String),

    #[error("unknown toggle key: {0}")]
    UnknownKey(String),

    #[error("no required tuning level for toggle {0}")]
    MissingRequiredLevel(String),

    #[error("value for {key} does not match its control (expected {expected})")]
    ValueMismatch { key: String, expected: &'static str },

    #[error("toggle {0} is not a panel launcher")]
    NotALauncher(String),

    #[error("toggle {0} has no sub-toggles")]
    NotAGroup(String),

    #[error("toggle {key} has no sub-toggle {sub_key}")]
    UnknownSubKey { key: String, sub_key: String },

    #[error("invalid tuning context: {0}")]
    InvalidContext(#[from] serde_json::Error),

    #[error("parameter store error: {0}")]
    Store(#[from] ParamError),
}

/// Errors reported by a [`ParamStore`](crate::params::ParamStore) backend.
#[derive(Debug, thiserror::Error)]
pub enum ParamError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("parameter backend error: {0}")]
    Backend(String),
}
