use crate::domain::{
    BaggageItem, BaggagePolicy, BaggageTag, Clock, Flight, FlightId, FlightRepository,
    PassengerId, Weight,
};
use crate::utils::error::{CheckInError, Result};
use std::sync::Arc;

/// Command handlers around the `Flight` aggregate: load, run one domain
/// operation, save. Check-in and baggage failures are not saved; a failing
/// registration batch saves whatever it registered first.
pub struct CheckInService<R: FlightRepository> {
    repository: R,
    clock: Arc<dyn Clock>,
    policy: Arc<dyn BaggagePolicy>,
}

impl<R: FlightRepository> CheckInService<R> {
    /// Wires the service; `clock` stamps check-ins and `policy` gates every bag.
    pub fn new(repository: R, clock: Arc<dyn Clock>, policy: Arc<dyn BaggagePolicy>) -> Self {
        Self {
            repository,
            clock,
            policy,
        }
    }

    /// The underlying store, for callers that seed or inspect flights directly.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Current stored snapshot of a flight.
    pub async fn flight(&self, flight_id: FlightId) -> Result<Flight> {
        self.repository.get(flight_id).await
    }

    /// Registers `passenger_ids` in order on the stored flight.
    ///
    /// On overbooking the ids registered before the failing one are still
    /// saved, then the error is returned.
    pub async fn register_passengers(
        &self,
        flight_id: FlightId,
        passenger_ids: &[PassengerId],
    ) -> Result<()> {
        let mut flight = self.repository.get(flight_id).await?;
        let before = flight.passengers().len();

        let outcome = flight.register_passengers(passenger_ids.iter().copied());
        let added = flight.passengers().len() - before;
        if outcome.is_ok() || added > 0 {
            self.repository.save(&flight).await?;
        }

        if let Err(e) = outcome {
            tracing::debug!(flight_id = %flight_id, kept = added, "Partial registration kept");
            log_rejection(flight_id, None, &e);
            return Err(e);
        }

        tracing::info!(
            flight_id = %flight_id,
            requested = passenger_ids.len(),
            added,
            "Passengers registered"
        );
        Ok(())
    }

    /// Returns the assigned seat number.
    pub async fn check_in_passenger(
        &self,
        flight_id: FlightId,
        passenger_id: PassengerId,
    ) -> Result<String> {
        let mut flight = self.repository.get(flight_id).await?;

        let passenger = flight
            .check_in_passenger(passenger_id, self.clock.as_ref())
            .inspect_err(|e| log_rejection(flight_id, Some(passenger_id), e))?;
        let seat = passenger.seat_number().unwrap_or_default().to_string();
        self.repository.save(&flight).await?;

        tracing::info!(
            flight_id = %flight_id,
            passenger_id = %passenger_id,
            seat = %seat,
            "Passenger checked in"
        );
        Ok(seat)
    }

    /// Adds one bag, generating a tag when none is given. Returns the tag
    /// stored on the bag.
    pub async fn add_baggage(
        &self,
        flight_id: FlightId,
        passenger_id: PassengerId,
        tag: Option<BaggageTag>,
        weight: Weight,
    ) -> Result<BaggageTag> {
        let mut flight = self.repository.get(flight_id).await?;
        let bag = BaggageItem::create(tag.unwrap_or_else(BaggageTag::generate), weight)?;
        let tag = bag.tag().clone();

        flight
            .add_baggage(passenger_id, bag, self.policy.as_ref())
            .inspect_err(|e| log_rejection(flight_id, Some(passenger_id), e))?;
        self.repository.save(&flight).await?;

        tracing::info!(
            flight_id = %flight_id,
            passenger_id = %passenger_id,
            tag = %tag,
            weight = %weight,
            "Bag added"
        );
        Ok(tag)
    }
}

fn log_rejection(flight_id: FlightId, passenger_id: Option<PassengerId>, error: &CheckInError) {
    match passenger_id {
        Some(passenger_id) => tracing::warn!(
            flight_id = %flight_id,
            passenger_id = %passenger_id,
            kind = ?error.kind(),
            "Rejected: {}",
            error
        ),
        None => tracing::warn!(
            flight_id = %flight_id,
            kind = ?error.kind(),
            "Rejected: {}",
            error
        ),
    }
}
