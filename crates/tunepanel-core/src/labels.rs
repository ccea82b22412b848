//! Display labels for range controls.
//!
//! Discrete ranges either carry a dense value → label table built once at
//! construction, or a plain unit suffix. Continuous ranges always format
//! with a suffix, at the precision implied by their step.

use std::collections::BTreeMap;

use crate::i18n::Localizer;

/// Label source for a discrete range control.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueLabels {
    /// Explicit per-value labels. Values missing from the table render as
    /// the bare number.
    Table(BTreeMap<i32, String>),
    /// `"{value}{suffix}"`.
    Suffix(String),
}

impl ValueLabels {
    /// Build a dense table over `min..=max` from a formatting function.
    pub fn table(min: i32, max: i32, format: impl Fn(i32) -> String) -> Self {
        Self::Table((min..=max).map(|v| (v, format(v))).collect())
    }

    pub fn label(&self, value: i32) -> String {
        match self {
            Self::Table(table) => table
                .get(&value)
                .cloned()
                .unwrap_or_else(|| value.to_string()),
            Self::Suffix(suffix) => format!("{value}{suffix}"),
        }
    }
}

/// Shutdown timer steps: 5 minutes, then 15-minute steps up to 45, then
/// whole hours.
///
/// ```text
/// 0      → "5 mins"
/// 1..=3  → "15 mins", "30 mins", "45 mins"
/// 4      → "1 hour"
/// n ≥ 5  → "(n - 3) hours"
/// ```
pub fn shutdown_timer_label(value: i32, tr: &dyn Localizer) -> String {
    match value {
        0 => tr.tr("5 mins").into_owned(),
        1..=3 => format!("{}{}", value * 15, tr.tr(" mins")),
        4 => format!("{}{}", value - 3, tr.tr(" hour")),
        _ => format!("{}{}", value - 3, tr.tr(" hours")),
    }
}

/// Screen brightness steps: `0` turns the screen off, `101` defers to
/// automatic brightness, anything else is a percentage.
pub fn brightness_label(value: i32, tr: &dyn Localizer) -> String {
    match value {
        0 => tr.tr("Screen Off").into_owned(),
        101 => tr.tr("Auto").into_owned(),
        _ => format!("{value}%"),
    }
}

/// Number of decimals needed to show every multiple of `step`.
pub fn step_precision(step: f32) -> usize {
    if step <= 0.0 || step >= 1.0 {
        return 0;
    }
    // Tolerates float error in steps like 0.1.
    (-step.log10() - 1e-4).ceil().max(0.0) as usize
}

/// Format a continuous value at the precision of its step.
pub fn continuous_label(value: f32, step: f32, suffix: &str) -> String {
    let precision = step_precision(step);
    format!("{value:.precision$}{suffix}")
}
