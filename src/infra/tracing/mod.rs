mod tracing_config;
mod tracing_services;

pub use tracing_config::TracingConfig;
pub use tracing_config::TracingLogFormat;
pub use tracing_services::TracingMinimalTimer;
