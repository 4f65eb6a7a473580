use anyhow::Context;
use clap::Parser;
use flight_checkin::utils::logger::{init_logger, LogFormat};
use flight_checkin::utils::validation::Validate;
use flight_checkin::{CheckInConfig, CliArgs, ErrorKind, ScenarioRunner};

fn exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::Config => 1,
        ErrorKind::NotFound => 4,
        ErrorKind::Conflict => 5,
        ErrorKind::Validation => 6,
        ErrorKind::Range => 7,
        ErrorKind::Internal => 3,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    init_logger(LogFormat::from_json_flag(args.json_logs), args.verbose)
        .context("failed to install logger")?;

    tracing::info!("Loading scenario from: {}", args.config);

    let mut config = match CheckInConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load config: {}", e);
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            std::process::exit(1);
        }
    };

    if args.stop_on_error {
        config.run.stop_on_error = true;
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if args.dry_run {
        println!("Flights:");
        for flight in &config.flights {
            println!("  {} (capacity {})", flight.id, flight.capacity);
        }
        println!("Steps:");
        for (index, step) in config.steps.iter().enumerate() {
            println!("  #{} {} on {}", index, step.action(), step.flight());
        }
        return Ok(());
    }

    let runner = ScenarioRunner::from_config(&config)
        .await
        .context("failed to wire scenario")?;
    let flight_ids: Vec<_> = config.flights.iter().map(|f| f.id).collect();
    let report = runner
        .run(&config.steps, &flight_ids)
        .await
        .context("scenario run failed")?;

    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("failed to render report")?
    );

    if let Some(failure) = report.first_failure() {
        if let Some(kind) = failure.error_kind() {
            tracing::warn!(
                "{} of {} step(s) failed, first at #{}",
                report.failed,
                report.steps.len(),
                failure.index
            );
            std::process::exit(exit_code(kind));
        }
    }

    Ok(())
}
