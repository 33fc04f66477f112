use std::fmt::Debug;

use crate::config::WithCommonConfig;
use crate::config::load_dotenv;
use crate::infra::build_info;

pub mod alias;
pub mod config;
pub mod eth;
pub mod ext;
pub mod infra;

/// Executes global services initialization.
///
/// Parses the configuration (command line, environment and optional env file) and initializes tracing.
pub fn init_global_services<T>() -> anyhow::Result<T>
where
    T: clap::Parser + WithCommonConfig + Debug,
{
    // parse configuration
    load_dotenv();
    let config = T::parse();

    // init tracing
    config.common().tracing.init()?;
    tracing::debug!(?config, build = %build_info::as_json(), "parsed configuration");

    Ok(config)
}
