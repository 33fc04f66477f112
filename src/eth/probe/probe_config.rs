use std::time::Duration;

use display_json::DebugAsJson;

use crate::ext::DisplayExt;

/// Everything the probe needs to reach a chain.
///
/// Built by the command line layer; the probe never reads the process environment.
#[derive(DebugAsJson, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ProbeConfig {
    /// JSON-RPC HTTP endpoint.
    pub rpc_url: String,

    /// Timeout applied to each RPC request.
    #[serde(serialize_with = "serialize_duration")]
    pub timeout: Duration,
}

fn serialize_duration<S: serde::Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&duration.to_string_ext())
}
