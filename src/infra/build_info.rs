//! Facts about the running binary, captured at build time by `vergen`.

use crate::alias::JsonValue;
use crate::ext::to_json_value;

pub const BUILD_TIMESTAMP: &str = env!("VERGEN_BUILD_TIMESTAMP");
pub const CARGO_DEBUG: &str = env!("VERGEN_CARGO_DEBUG");
pub const CARGO_FEATURES: &str = env!("VERGEN_CARGO_FEATURES");
pub const CARGO_PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const RUST_VERSION: &str = env!("VERGEN_RUSTC_SEMVER");
pub const RUST_CHANNEL: &str = env!("VERGEN_RUSTC_CHANNEL");
pub const RUST_TARGET: &str = env!("VERGEN_RUSTC_HOST_TRIPLE");

/// Binary name used when the current executable cannot be resolved.
const DEFAULT_BINARY_NAME: &str = "slot-probe";

/// Returns the current binary basename.
///
/// Test harness binaries (`test_*`) all resolve to `tests`.
pub fn binary_name() -> String {
    let name = std::env::current_exe()
        .ok()
        .and_then(|path| path.file_name().and_then(|name| name.to_str()).map(str::to_lowercase))
        .unwrap_or_else(|| DEFAULT_BINARY_NAME.to_owned());

    if name.starts_with("test_") { "tests".to_owned() } else { name }
}

#[derive(serde::Serialize)]
struct BuildInfo {
    binary_name: String,
    version: &'static str,
    build_timestamp: &'static str,
    cargo_debug: &'static str,
    cargo_features: &'static str,
    rust_version: &'static str,
    rust_channel: &'static str,
    rust_target: &'static str,
}

/// Returns build info as JSON.
pub fn as_json() -> JsonValue {
    to_json_value(BuildInfo {
        binary_name: binary_name(),
        version: CARGO_PKG_VERSION,
        build_timestamp: BUILD_TIMESTAMP,
        cargo_debug: CARGO_DEBUG,
        cargo_features: CARGO_FEATURES,
        rust_version: RUST_VERSION,
        rust_channel: RUST_CHANNEL,
        rust_target: RUST_TARGET,
    })
}
