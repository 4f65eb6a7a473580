pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::{FixedClock, InMemoryFlightRepository, SystemClock};
pub use app::CheckInService;
pub use config::CheckInConfig;
pub use crate::core::{ScenarioReport, ScenarioRunner};
pub use domain::{
    BaggageItem, BaggagePolicy, BaggageTag, Clock, Flight, FlightId, FlightRepository, Passenger,
    PassengerId, StandardBaggagePolicy, Weight,
};
pub use utils::error::{CheckInError, ErrorKind, Result};
