//! Application configuration.

use std::str::FromStr;
use std::time::Duration;

use anyhow::anyhow;
use clap::Parser;
use display_json::DebugAsJson;
use strum::VariantNames;

use crate::eth::probe::ProbeConfig;
use crate::ext::parse_duration;
use crate::infra::build_info;
use crate::infra::tracing::TracingConfig;

/// RPC endpoint used when neither `--rpc` nor `RPC_URL` is set.
pub const DEFAULT_RPC_URL: &str = "https://mainnet.infura.io/v3/your_api_key";

/// Loads .env files according to the binary and environment.
///
/// Uses eprintln! because it runs before tracing is initialized and stdout is reserved for the probe report.
pub fn load_dotenv() {
    // parse env manually because this is executed before clap
    let env = match std::env::var("ENV") {
        Ok(env) => Environment::from_str(env.as_str()),
        Err(_) => Ok(Environment::Local),
    };
    let env = match env {
        Ok(env) => env,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    // load .env file
    let env_filename = format!("config/{}.env.{}", build_info::binary_name(), env);
    if let Err(e) = dotenvy::from_filename(&env_filename) {
        // a missing env file is the common case for a command line tool
        if e.not_found() {
            return;
        }
        eprintln!("env file error | filename={} reason={}", env_filename, e);
    }
}

// -----------------------------------------------------------------------------
// Config: Common
// -----------------------------------------------------------------------------

pub trait WithCommonConfig {
    fn common(&self) -> &CommonConfig;
}

/// Configuration that can be used by any binary.
#[derive(DebugAsJson, Clone, Parser, serde::Serialize)]
pub struct CommonConfig {
    /// Environment where the application is running.
    #[arg(long = "env", env = "ENV", default_value = "local")]
    pub env: Environment,

    #[clap(flatten)]
    pub tracing: TracingConfig,
}

impl WithCommonConfig for CommonConfig {
    fn common(&self) -> &CommonConfig {
        self
    }
}

// -----------------------------------------------------------------------------
// Config: SlotProbe
// -----------------------------------------------------------------------------

/// Configuration for `slot-probe` binary.
#[derive(DebugAsJson, Clone, Parser, derive_more::Deref, serde::Serialize)]
#[command(name = "slot-probe", version, about = "Minimal slot-delta soundness probe.", long_about = None)]
pub struct SlotProbeConfig {
    /// Contract address.
    #[arg(value_name = "ADDRESS")]
    pub address: String,

    /// Storage slot to check (decimal or hex).
    #[arg(long = "slot", env = "DEFAULT_SLOT", default_value = "0x0")]
    pub slot: String,

    /// RPC URL.
    #[arg(long = "rpc", env = "RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc: String,

    /// Timeout for each RPC request (seconds or humantime, e.g. `15`, `500ms`).
    #[arg(long = "timeout", value_parser = parse_duration, env = "TIMEOUT", default_value = "15s")]
    pub timeout: Duration,

    /// Output JSON only.
    #[arg(long = "json")]
    pub json: bool,

    #[deref]
    #[clap(flatten)]
    pub common: CommonConfig,
}

impl WithCommonConfig for SlotProbeConfig {
    fn common(&self) -> &CommonConfig {
        &self.common
    }
}

impl SlotProbeConfig {
    /// Narrows the command line configuration into the configuration the probe core needs.
    pub fn probe_config(&self) -> ProbeConfig {
        ProbeConfig {
            rpc_url: self.rpc.clone(),
            timeout: self.timeout,
        }
    }
}

// -----------------------------------------------------------------------------
// Enum: Env
// -----------------------------------------------------------------------------
#[derive(DebugAsJson, strum::Display, strum::VariantNames, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Environment {
    #[serde(rename = "local")]
    #[strum(to_string = "local")]
    Local,

    #[serde(rename = "staging")]
    #[strum(to_string = "staging")]
    Staging,

    #[serde(rename = "production")]
    #[strum(to_string = "production")]
    Production,
}

impl FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        match s.as_ref() {
            "local" => Ok(Self::Local),
            "staging" | "test" => Ok(Self::Staging),
            "production" | "prod" => Ok(Self::Production),
            s => Err(anyhow!("unknown environment: \"{}\" - valid values are {:?}", s, Environment::VARIANTS)),
        }
    }
}
