use crate::adapters::{FixedClock, InMemoryFlightRepository, SystemClock};
use crate::app::service::CheckInService;
use crate::config::toml_config::{bag_weight, CheckInConfig, StepConfig};
use crate::domain::{BaggageTag, Clock, Flight, FlightId, FlightRepository, StandardBaggagePolicy};
use crate::utils::error::{ErrorKind, Result};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepStatus {
    Ok { detail: String },
    Error { kind: ErrorKind, message: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct StepOutcome {
    pub index: usize,
    pub action: &'static str,
    pub flight: FlightId,
    #[serde(flatten)]
    pub status: StepStatus,
}

impl StepOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self.status, StepStatus::Ok { .. })
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self.status {
            StepStatus::Error { kind, .. } => Some(kind),
            StepStatus::Ok { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub succeeded: usize,
    pub failed: usize,
    /// Steps were left unexecuted because `stop_on_error` was set.
    pub halted: bool,
    pub steps: Vec<StepOutcome>,
    pub flights: Vec<Flight>,
}

impl ScenarioReport {
    pub fn first_failure(&self) -> Option<&StepOutcome> {
        self.steps.iter().find(|s| !s.is_ok())
    }
}

/// Replays a list of check-in steps against a `CheckInService`, one
/// load-mutate-save cycle per step.
pub struct ScenarioRunner<R: FlightRepository> {
    service: CheckInService<R>,
    stop_on_error: bool,
}

impl ScenarioRunner<InMemoryFlightRepository> {
    /// Seeds an in-memory repository with the configured flights and wires
    /// the configured clock and policy limit.
    pub async fn from_config(config: &CheckInConfig) -> Result<Self> {
        let repository = InMemoryFlightRepository::new();
        for flight in &config.flights {
            repository
                .insert(Flight::new(flight.id, flight.capacity))
                .await?;
        }

        let clock: Arc<dyn Clock> = match config.clock.fixed_time {
            Some(instant) => Arc::new(FixedClock::new(instant)),
            None => Arc::new(SystemClock),
        };
        let policy = Arc::new(StandardBaggagePolicy::with_limit(config.max_total()?));

        tracing::debug!(
            flights = config.flights.len(),
            max_total = %policy.max_total(),
            fixed_clock = config.clock.fixed_time.is_some(),
            "Scenario wired"
        );

        Ok(Self::new(
            CheckInService::new(repository, clock, policy),
            config.run.stop_on_error,
        ))
    }
}

impl<R: FlightRepository> ScenarioRunner<R> {
    /// With `stop_on_error` the run ends at the first failing step.
    pub fn new(service: CheckInService<R>, stop_on_error: bool) -> Self {
        Self {
            service,
            stop_on_error,
        }
    }

    /// Service the steps are dispatched to.
    pub fn service(&self) -> &CheckInService<R> {
        &self.service
    }

    /// Runs `steps` in order and snapshots `flights` afterwards. Step
    /// failures are recorded in the report, not returned.
    pub async fn run(&self, steps: &[StepConfig], flights: &[FlightId]) -> Result<ScenarioReport> {
        tracing::info!(steps = steps.len(), "Starting check-in scenario");

        let mut outcomes = Vec::with_capacity(steps.len());
        let mut halted = false;

        for (index, step) in steps.iter().enumerate() {
            let status = match self.execute(step).await {
                Ok(detail) => StepStatus::Ok { detail },
                Err(e) => {
                    if e.is_domain_rejection() {
                        tracing::warn!(step = index, action = step.action(), "Step rejected: {}", e);
                    } else {
                        tracing::error!(step = index, action = step.action(), "Step failed: {}", e);
                    }
                    StepStatus::Error {
                        kind: e.kind(),
                        message: e.to_string(),
                    }
                }
            };
            let outcome = StepOutcome {
                index,
                action: step.action(),
                flight: step.flight(),
                status,
            };
            let failed = !outcome.is_ok();
            outcomes.push(outcome);

            if failed && self.stop_on_error {
                halted = index + 1 < steps.len();
                tracing::warn!(step = index, "Stopping scenario at first failure");
                break;
            }
        }

        let mut snapshots = Vec::with_capacity(flights.len());
        for id in flights {
            snapshots.push(self.service.flight(*id).await?);
        }

        let succeeded = outcomes.iter().filter(|o| o.is_ok()).count();
        let failed = outcomes.len() - succeeded;
        tracing::info!(succeeded, failed, halted, "Scenario finished");

        Ok(ScenarioReport {
            succeeded,
            failed,
            halted,
            steps: outcomes,
            flights: snapshots,
        })
    }

    /// One step through the service; the `Ok` string is the report detail.
    async fn execute(&self, step: &StepConfig) -> Result<String> {
        match step {
            StepConfig::Register { flight, passengers } => {
                self.service.register_passengers(*flight, passengers).await?;
                Ok(format!("registered {} passenger id(s)", passengers.len()))
            }
            StepConfig::CheckIn { flight, passenger } => {
                let seat = self.service.check_in_passenger(*flight, *passenger).await?;
                Ok(format!("seat {}", seat))
            }
            StepConfig::AddBaggage {
                flight,
                passenger,
                tag,
                weight_kg,
                weight_lb,
            } => {
                let weight = bag_weight(*weight_kg, *weight_lb)?;
                let tag = self
                    .service
                    .add_baggage(*flight, *passenger, tag.clone().map(BaggageTag::new), weight)
                    .await?;
                Ok(format!("bag {} ({})", tag, weight))
            }
        }
    }
}
