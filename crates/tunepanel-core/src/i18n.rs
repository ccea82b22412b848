//! Localization seam for display strings.

use std::borrow::Cow;

/// Translates a source-language display string.
///
/// Every title, description, sub-label and label fragment the registry
/// produces passes through this trait once, at construction time.
pub trait Localizer {
    fn tr(&self, text: &'static str) -> Cow<'_, str>;
}

/// Returns every string unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Untranslated;

impl Localizer for Untranslated {
    fn tr(&self, text: &'static str) -> Cow<'_, str> {
        Cow::Borrowed(text)
    }
}
