//! Run-once conversion of legacy parameters.
//!
//! Older firmware kept an upload kill switch as a standalone
//! `DisableOnroadUploads` flag in a separate store. A set legacy flag turns
//! on `NoUploads` in the main store, along with the `DeviceManagement`
//! section that holds it. The legacy store records the conversion version
//! once done.

use tunepanel_core::{ParamError, ParamStore, ParamValue};

/// Legacy-store key holding the last applied conversion.
pub const VERSION_KEY: &str = "ParamConversionVersion";

/// Current conversion version.
pub const CURRENT_VERSION: i32 = 2;

const LEGACY_ONROAD_UPLOADS_KEY: &str = "DisableOnroadUploads";
const NO_UPLOADS_KEY: &str = "NoUploads";
const DEVICE_MANAGEMENT_KEY: &str = "DeviceManagement";

/// Apply pending conversions from `legacy` into `params`.
///
/// Returns `true` when the conversion ran, `false` when it was already
/// recorded.
pub fn convert_params(
    params: &mut dyn ParamStore,
    legacy: &mut dyn ParamStore,
) -> Result<bool, ParamError> {
    let recorded = legacy.get(VERSION_KEY).and_then(|v| v.as_int());
    if recorded == Some(CURRENT_VERSION) {
        tracing::debug!("Parameters already at conversion version {CURRENT_VERSION}");
        return Ok(false);
    }

    if legacy.get_bool(LEGACY_ONROAD_UPLOADS_KEY) == Some(true) {
        tracing::info!("Converting legacy {LEGACY_ONROAD_UPLOADS_KEY} into {NO_UPLOADS_KEY}");
        params.put(DEVICE_MANAGEMENT_KEY, ParamValue::Bool(true))?;
        params.put(NO_UPLOADS_KEY, ParamValue::Bool(true))?;
    }

    legacy.put(VERSION_KEY, ParamValue::Int(CURRENT_VERSION))?;
    tracing::info!(
        "Parameter conversion complete ({} -> {CURRENT_VERSION})",
        recorded.map_or_else(|| "none".to_string(), |v| v.to_string())
    );
    Ok(true)
}
