use std::path::PathBuf;
use std::process::exit;
use std::str::FromStr;

use cbcmac_selftest::{create_accelerator, log_summary, HarnessConfig, SelfTestDriver};
use clap::{arg, value_parser};
use log::{error, LevelFilter};
use simple_logger::SimpleLogger;

fn main() {
    let args = clap::Command::new("cbc-mac-test")
        .about("Runs the AES-CBC-MAC known-answer tests against the crypto engine")
        .arg(
            arg!(--config <FILE> "Harness configuration (TOML)")
                .required(false)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            arg!(--log-level <LEVEL> "One of error, warn, info, debug, trace")
                .required(false)
                .default_value("info"),
        )
        .get_matches();

    let level = args
        .get_one::<String>("log-level")
        .and_then(|val| LevelFilter::from_str(val).ok())
        .unwrap_or(LevelFilter::Info);
    let _ = SimpleLogger::new().with_level(level).init();

    let config = match args.get_one::<PathBuf>("config") {
        Some(path) => match HarnessConfig::from_file(path) {
            Ok(val) => val,
            Err(err) => {
                error!("Invalid configuration: {}", err);
                exit(2);
            }
        },
        None => HarnessConfig::default(),
    };

    let accelerator = match create_accelerator(&config.accelerator) {
        Ok(val) => val,
        Err(err) => {
            error!("{}", err);
            exit(2);
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(val) => val,
        Err(err) => {
            error!("Cannot start the scheduler: {}", err);
            exit(2);
        }
    };

    let mut driver = SelfTestDriver::new(accelerator.as_ref(), config.harness.clone());
    let result = runtime.block_on(driver.run_known_answer_tests());

    match result {
        Ok(summary) => {
            log_summary(&summary);
            if !summary.all_passed() {
                exit(1);
            }
        }
        Err(status) => {
            error!("Crypto subsystem unavailable: {}", status);
            exit(2);
        }
    }
}
