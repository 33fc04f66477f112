//! Tracing services.

use chrono::Local;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

// -----------------------------------------------------------------------------
// Tracing service: Minimal Timer
// -----------------------------------------------------------------------------

/// Prints only the local wall clock time, e.g. `12:30:07.125`.
pub struct TracingMinimalTimer;

impl FormatTime for TracingMinimalTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", Local::now().time().format("%H:%M:%S%.3f"))
    }
}

// -----------------------------------------------------------------------------
// Tracing macros
// -----------------------------------------------------------------------------

/// Logs an error and wraps it with the provided message.
///
/// The payload, when present, is logged as a separate field so the message stays constant.
#[macro_export]
macro_rules! log_and_err {
    (reason = $error:ident, payload = $payload:expr, $msg:expr) => {{
        use anyhow::Context;
        tracing::error!(reason = ?$error, payload = ?$payload, message = %$msg);
        Err($error).context($msg)
    }};
    (reason = $error:ident, $msg:expr) => {{
        use anyhow::Context;
        tracing::error!(reason = ?$error, message = %$msg);
        Err($error).context($msg)
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_timer_has_no_date() {
        let mut out = String::new();
        TracingMinimalTimer.format_time(&mut Writer::new(&mut out)).unwrap();
        assert_eq!(out.len(), "12:30:00.000".len());
        assert_eq!(out.matches(':').count(), 2);
    }

    #[test]
    fn test_log_and_err_wraps_reason() {
        let reason = std::io::Error::other("connection refused");
        let result: anyhow::Result<()> = crate::log_and_err!(reason = reason, "failed to fetch block number");
        let e = result.unwrap_err();
        assert_eq!(e.to_string(), "failed to fetch block number");
        assert_eq!(format!("{e:#}"), "failed to fetch block number: connection refused");
    }

    #[test]
    fn test_log_and_err_keeps_message_with_payload() {
        let reason = std::io::Error::other("missing trie node");
        let result: anyhow::Result<()> = crate::log_and_err!(reason = reason, payload = vec!["0x0", "0x64"], "failed to fetch storage slot");
        assert_eq!(format!("{:#}", result.unwrap_err()), "failed to fetch storage slot: missing trie node");
    }
}
