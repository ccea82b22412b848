//! Confirmation seam for safety-relevant toggles.

use serde::{Deserialize, Serialize};

/// What the dialog is asked to confirm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmRequest {
    /// Toggle being enabled.
    pub key: String,
    /// Dialog body: warning and description.
    pub prompt: String,
    /// Render with warning severity.
    pub warning: bool,
    /// Ask a second time before accepting.
    pub secondary: bool,
}

/// The user's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confirmation {
    Accepted,
    Cancelled,
}

/// Modal confirmation dialog.
pub trait ConfirmationDialog {
    fn confirm(&mut self, request: &ConfirmRequest) -> Confirmation;
}
