use crate::domain::baggage::BaggageItem;
use crate::domain::passenger::Passenger;
use crate::domain::policy::BaggagePolicy;
use crate::domain::ports::Clock;
use crate::domain::value_objects::{FlightId, PassengerId};
use crate::utils::error::{CheckInError, Result};
use serde::Serialize;

/// Aggregate root for one flight's check-in state.
///
/// All mutation goes through the three operations below; the roster is only
/// handed out as a read-only slice. Passengers are appended and never removed.
#[derive(Debug, Clone, Serialize)]
pub struct Flight {
    id: FlightId,
    capacity: usize,
    passengers: Vec<Passenger>,
    /// Storage revision, owned by the repository.
    version: u64,
}

impl Flight {
    pub fn new(id: FlightId, capacity: usize) -> Self {
        Self {
            id,
            capacity,
            passengers: Vec::new(),
            version: 0,
        }
    }

    pub fn id(&self) -> FlightId {
        self.id
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Registered passengers in registration order.
    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    pub fn passenger(&self, id: PassengerId) -> Option<&Passenger> {
        self.passengers.iter().find(|p| p.id() == id)
    }

    pub fn checked_in_count(&self) -> usize {
        self.passengers.iter().filter(|p| p.is_checked_in()).count()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub(crate) fn set_version(&mut self, version: u64) {
        self.version = version;
    }

    /// Registers each id in order. Known ids are skipped. The first id that
    /// would exceed capacity fails the call; ids before it stay registered.
    pub fn register_passengers<I>(&mut self, ids: I) -> Result<()>
    where
        I: IntoIterator<Item = PassengerId>,
    {
        for id in ids {
            self.register_passenger(id)?;
        }
        Ok(())
    }

    fn register_passenger(&mut self, id: PassengerId) -> Result<()> {
        if self.passenger(id).is_some() {
            return Ok(());
        }
        if self.passengers.len() >= self.capacity {
            return Err(CheckInError::Overbooking(self.id));
        }
        self.passengers.push(Passenger::new(id));
        Ok(())
    }

    /// Seats are a running counter over check-ins: "1", "2", ...
    pub fn check_in_passenger(&mut self, id: PassengerId, clock: &dyn Clock) -> Result<&Passenger> {
        let index = self.index_of(id)?;
        let seat = (self.checked_in_count() + 1).to_string();

        let passenger = &mut self.passengers[index];
        passenger.check_in(clock.now(), seat);
        Ok(&*passenger)
    }

    pub fn add_baggage(
        &mut self,
        id: PassengerId,
        bag: BaggageItem,
        policy: &dyn BaggagePolicy,
    ) -> Result<()> {
        let index = self.index_of(id)?;
        policy.ensure_can_add(self, &self.passengers[index], &bag)?;
        self.passengers[index].add_bag(bag)
    }

    fn index_of(&self, id: PassengerId) -> Result<usize> {
        self.passengers
            .iter()
            .position(|p| p.id() == id)
            .ok_or(CheckInError::PassengerNotFound(id))
    }
}
