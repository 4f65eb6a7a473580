use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "flight-checkin")]
#[command(about = "Replay flight check-in scenarios against the in-memory domain model")]
pub struct CliArgs {
    /// Path to TOML scenario file
    #[arg(short, long, default_value = "checkin.toml")]
    pub config: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    /// Stop at the first failing step (overrides [run] stop_on_error)
    #[arg(long)]
    pub stop_on_error: bool,

    /// Validate the scenario and list its steps without executing them
    #[arg(long)]
    pub dry_run: bool,
}
