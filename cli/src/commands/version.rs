//! `hotswap version`

use anyhow::Result;
use serde::Serialize;

use crate::output::json;

#[derive(Serialize)]
struct VersionInfo {
    version: &'static str,
}

/// Print the crate version, as `{"version":"…"}` in JSON mode.
///
/// # Errors
///
/// Returns an error only if JSON rendering fails.
pub fn run(json: bool) -> Result<()> {
    let info = VersionInfo {
        version: env!("CARGO_PKG_VERSION"),
    };
    if json {
        println!("{}", json::format_value(&info)?);
    } else {
        println!("hotswap {}", info.version);
    }
    Ok(())
}
