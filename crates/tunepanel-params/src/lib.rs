//! Tunepanel Params — persistent parameter storage.
//!
//! [`JsonParams`] backs the panel with a JSON file on disk, and
//! [`migrate::convert_params`] upgrades parameters left behind by older
//! firmware before the panel reads them.

pub mod json;
pub mod migrate;

pub use json::{JsonParams, OpenError};
pub use migrate::convert_params;
