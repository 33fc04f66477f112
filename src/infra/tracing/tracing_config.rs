use std::io::IsTerminal;
use std::io::stderr;
use std::str::FromStr;

use anyhow::anyhow;
use clap::Parser;
use display_json::DebugAsJson;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::Registry;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::infra::tracing::TracingMinimalTimer;

// -----------------------------------------------------------------------------
// Config
// -----------------------------------------------------------------------------

#[derive(DebugAsJson, Clone, Parser, serde::Serialize)]
pub struct TracingConfig {
    /// How tracing events are formatted in stderr.
    #[arg(long = "log-format", alias = "tracing-log-format", env = "LOG_FORMAT", default_value = "normal")]
    pub tracing_log_format: TracingLogFormat,
}

impl TracingConfig {
    /// Inits application global tracing registry.
    ///
    /// Events go to stderr and are filtered by `RUST_LOG`.
    pub fn init(&self) -> anyhow::Result<()> {
        if let Err(e) = self.create_subscriber().try_init() {
            eprintln!("failed to create tracing registry | reason={:?}", e);
            return Err(e.into());
        }
        Ok(())
    }

    pub fn create_subscriber(&self) -> impl SubscriberInitExt {
        let stderr_layer = self.stderr_layer().with_filter(EnvFilter::from_default_env());
        tracing_subscriber::registry().with(stderr_layer)
    }

    fn stderr_layer(&self) -> Box<dyn Layer<Registry> + Send + Sync> {
        let ansi = stderr().is_terminal();
        let layer = fmt::layer().with_writer(stderr);

        match self.tracing_log_format {
            TracingLogFormat::Minimal => layer
                .with_ansi(ansi)
                .with_target(false)
                .with_timer(TracingMinimalTimer)
                .boxed(),
            TracingLogFormat::Normal => layer.with_ansi(ansi).boxed(),
            TracingLogFormat::Verbose => layer.with_ansi(ansi).with_thread_ids(true).with_thread_names(true).with_file(true).with_line_number(true).boxed(),
            TracingLogFormat::Json => layer.json().with_current_span(true).with_span_list(true).with_thread_names(true).boxed(),
        }
    }
}

// -----------------------------------------------------------------------------
// LogFormat
// -----------------------------------------------------------------------------

/// Tracing event log format.
#[derive(DebugAsJson, strum::Display, Clone, Copy, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TracingLogFormat {
    /// Time (no date), level and message.
    Minimal,

    /// Default `tracing-subscriber` format.
    Normal,

    /// Normal format plus thread and source location.
    Verbose,

    /// One JSON object per event, including the current span fields.
    Json,
}

impl FromStr for TracingLogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self, Self::Err> {
        match s.to_lowercase().trim() {
            "minimal" => Ok(Self::Minimal),
            "normal" => Ok(Self::Normal),
            "verbose" | "full" => Ok(Self::Verbose),
            "json" => Ok(Self::Json),
            s => Err(anyhow!("unknown log format: {}", s)),
        }
    }
}
