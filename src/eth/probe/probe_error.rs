use slot_probe_macros::ExitCode;

/// Maps an error to the process exit status reported by the command line.
pub trait ExitStatus {
    /// Process exit status for this error. Never `0`.
    fn exit_code(&self) -> u8;

    /// Name of the error kind associated with an exit status.
    fn kind_from_exit_code(code: u8) -> &'static str;
}

/// Errors that terminate a probe invocation.
#[derive(Debug, thiserror::Error, strum::IntoStaticStr, ExitCode)]
pub enum ProbeError {
    #[error("Failed to connect to RPC endpoint {url}: {reason:#}")]
    #[exit_code = 1]
    Connection { url: String, reason: anyhow::Error },

    #[error(transparent)]
    #[exit_code = 2]
    Validation(#[from] ValidationError),

    #[error("Chain height too low: tip is {tip}, but at least 3 blocks are required.")]
    #[exit_code = 3]
    Precondition { tip: u64 },

    #[error("Failed to {operation}: {reason:#}")]
    #[exit_code = 4]
    Retrieval { operation: &'static str, reason: anyhow::Error },

    #[error(transparent)]
    #[exit_code = 5]
    Encoding(#[from] EncodingError),
}

impl ProbeError {
    /// Wraps a chain read failure.
    pub fn retrieval(operation: &'static str, reason: anyhow::Error) -> Self {
        Self::Retrieval { operation, reason }
    }

    /// Name of the error kind, e.g. `Precondition`.
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}

/// Invalid user supplied input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid address: {input:?} is not a 20-byte hex address.")]
    AddressInvalid { input: String },

    #[error("Invalid address: {input:?} does not match its EIP-55 checksum.")]
    AddressChecksum { input: String },

    #[error("Invalid slot: {input:?} is not an unsigned integer.")]
    SlotInvalid { input: String },

    #[error("Invalid slot: {input:?} does not fit in 256 bits.")]
    SlotOverflow { input: String },
}

/// Violation of the leaf byte layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    #[error("Slot value has {len} bytes, but at most 32 bytes are allowed.")]
    ValueTooLong { len: usize },
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let errors = [
            ProbeError::Connection {
                url: "http://localhost:8545".into(),
                reason: anyhow!("connection refused"),
            },
            ValidationError::SlotInvalid { input: "x".into() }.into(),
            ProbeError::Precondition { tip: 2 },
            ProbeError::retrieval("fetch block number", anyhow!("timeout")),
            EncodingError::ValueTooLong { len: 33 }.into(),
        ];

        let codes: Vec<u8> = errors.iter().map(|e| e.exit_code()).collect();
        assert_eq!(codes, vec![1, 2, 3, 4, 5]);
        for error in &errors {
            assert_eq!(ProbeError::kind_from_exit_code(error.exit_code()), error.kind());
        }
    }

    #[test]
    fn test_messages() {
        let e = ProbeError::Precondition { tip: 2 };
        assert_eq!(e.to_string(), "Chain height too low: tip is 2, but at least 3 blocks are required.");

        let e = ProbeError::retrieval("read slot at block 100", anyhow!("timeout").context("eth_getStorageAt failed"));
        assert_eq!(e.to_string(), "Failed to read slot at block 100: eth_getStorageAt failed: timeout");

        let e: ProbeError = ValidationError::AddressInvalid { input: "0x12".into() }.into();
        assert_eq!(e.to_string(), "Invalid address: \"0x12\" is not a 20-byte hex address.");
    }
}
