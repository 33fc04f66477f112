use std::process::ExitCode;
use std::str::FromStr;

use slot_probe::config::SlotProbeConfig;
use slot_probe::eth::primitives::Address;
use slot_probe::eth::primitives::SlotIndex;
use slot_probe::eth::probe::ExitStatus;
use slot_probe::eth::probe::ProbeError;
use slot_probe::eth::probe::ProbeResult;
use slot_probe::eth::probe::SlotProbe;
use slot_probe::ext::to_json_string_pretty;
use slot_probe::init_global_services;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // init services
    let config = match init_global_services::<SlotProbeConfig>() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e:#}");
            return ExitCode::FAILURE;
        }
    };

    match run(&config).await {
        Ok(result) => {
            if config.json {
                println!("{}", to_json_string_pretty(&result));
            } else {
                print!("{}", result.to_text());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(kind = e.kind(), reason = %e, "probe failed");
            eprintln!("❌ {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(config: &SlotProbeConfig) -> Result<ProbeResult, ProbeError> {
    // validate input before touching the network
    let address = Address::from_str(&config.address)?;
    let index = SlotIndex::from_str(&config.slot)?;

    let probe = SlotProbe::connect(config.probe_config()).await?;
    probe.run(address, index).await
}
