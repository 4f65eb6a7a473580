use crate::domain::flight::Flight;
use crate::domain::value_objects::FlightId;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Key-value persistence for `Flight` aggregates.
#[async_trait]
pub trait FlightRepository: Send + Sync {
    /// Fails with `FlightNotFound` when the id is unknown.
    async fn get(&self, id: FlightId) -> Result<Flight>;

    /// Fails with `ConcurrencyConflict` when the stored flight moved on since
    /// `flight` was loaded.
    async fn save(&self, flight: &Flight) -> Result<()>;

    /// Stores a new flight; fails with `DuplicateFlight` if the id is taken.
    async fn insert(&self, flight: Flight) -> Result<()>;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
