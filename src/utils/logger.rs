use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter, Layer,
};

/// Output shape of the stderr log stream. The report itself goes to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    /// One JSON object per event, for log shippers.
    Json,
}

impl LogFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            LogFormat::Json
        } else {
            LogFormat::Compact
        }
    }
}

/// Filter used when `RUST_LOG` is unset.
fn fallback_directive(verbose: bool) -> &'static str {
    if verbose {
        "flight_checkin=debug,warn"
    } else {
        "flight_checkin=info,warn"
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_directive(verbose)))
}

/// Installs the global subscriber. Fails if one is already set.
pub fn init_logger(format: LogFormat, verbose: bool) -> Result<(), TryInitError> {
    let base = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose);
    let layer = match format {
        LogFormat::Compact => base.compact().boxed(),
        LogFormat::Json => base.json().with_current_span(false).boxed(),
    };

    tracing_subscriber::registry()
        .with(layer)
        .with(env_filter(verbose))
        .try_init()
}
