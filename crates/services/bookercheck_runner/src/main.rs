// File: services/bookercheck_runner/src/main.rs
use bookercheck_booker::checks::run_all;
use bookercheck_common::{config_error, logging, BookercheckError};
use bookercheck_config::load_config;
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            error!("{}", config_error(err));
            return ExitCode::from(2);
        }
    };

    info!("Checking booking service at {}", config.booker.base_url);
    let report = run_all(&config.booker).await;

    let total = report.outcomes.len();
    let mut failed = 0usize;
    for outcome in report.outcomes {
        match outcome.result {
            Ok(()) => info!("PASS {}", outcome.name),
            Err(err) => {
                failed += 1;
                let err: BookercheckError = err.into();
                error!("FAIL {}: {}", outcome.name, err);
            }
        }
    }
    info!("{} scenarios, {} passed, {} failed", total, total - failed, failed);

    if failed > 0 {
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}
