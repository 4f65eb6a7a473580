use crate::domain::flight::Flight;
use crate::domain::ports::FlightRepository;
use crate::domain::value_objects::FlightId;
use crate::utils::error::{CheckInError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// HashMap-backed store holding a clone of each flight.
///
/// `save` is optimistic: the caller's copy must carry the version that is
/// currently stored, and a successful save bumps it.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFlightRepository {
    flights: Arc<RwLock<HashMap<FlightId, Flight>>>,
}

impl InMemoryFlightRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FlightRepository for InMemoryFlightRepository {
    async fn get(&self, id: FlightId) -> Result<Flight> {
        let flights = self.flights.read().await;
        flights
            .get(&id)
            .cloned()
            .ok_or(CheckInError::FlightNotFound(id))
    }

    async fn save(&self, flight: &Flight) -> Result<()> {
        let mut flights = self.flights.write().await;
        let stored = flights
            .get(&flight.id())
            .ok_or(CheckInError::FlightNotFound(flight.id()))?;

        if stored.version() != flight.version() {
            tracing::debug!(
                flight_id = %flight.id(),
                stored = stored.version(),
                incoming = flight.version(),
                "Rejecting stale flight save"
            );
            return Err(CheckInError::ConcurrencyConflict(flight.id()));
        }

        let mut next = flight.clone();
        next.set_version(flight.version() + 1);
        flights.insert(next.id(), next);
        Ok(())
    }

    async fn insert(&self, flight: Flight) -> Result<()> {
        let mut flights = self.flights.write().await;
        if flights.contains_key(&flight.id()) {
            return Err(CheckInError::DuplicateFlight(flight.id()));
        }
        flights.insert(flight.id(), flight);
        Ok(())
    }
}
