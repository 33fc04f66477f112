//! Slot soundness probe: samples a storage slot at two recent blocks and fingerprints both observations.

pub mod digest;
pub mod encoder;
mod probe;
mod probe_config;
mod probe_error;
mod probe_result;
mod slot_reader;

pub use probe::SlotProbe;
pub use probe_config::ProbeConfig;
pub use probe_error::EncodingError;
pub use probe_error::ExitStatus;
pub use probe_error::ProbeError;
pub use probe_error::ValidationError;
pub use probe_result::ProbeResult;
pub use slot_reader::SlotReader;
