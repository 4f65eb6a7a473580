use crate::domain::baggage::BaggageItem;
use crate::domain::flight::Flight;
use crate::domain::passenger::Passenger;
use crate::domain::value_objects::Weight;
use crate::utils::error::{CheckInError, Result};

/// Decides whether a bag may be added on top of what a passenger already
/// carries. Implementations must not mutate anything; `Flight` calls them
/// before it touches the passenger.
pub trait BaggagePolicy: Send + Sync {
    fn ensure_can_add(&self, flight: &Flight, passenger: &Passenger, bag: &BaggageItem)
        -> Result<()>;
}

pub const STANDARD_MAX_TOTAL: Weight = Weight::from_trusted_kilograms(50.0);

/// Cumulative weight cap per passenger, 50 kg unless configured otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardBaggagePolicy {
    max_total: Weight,
}

impl StandardBaggagePolicy {
    pub fn new() -> Self {
        Self {
            max_total: STANDARD_MAX_TOTAL,
        }
    }

    pub fn with_limit(max_total: Weight) -> Self {
        Self { max_total }
    }

    pub fn max_total(&self) -> Weight {
        self.max_total
    }
}

impl Default for StandardBaggagePolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl BaggagePolicy for StandardBaggagePolicy {
    fn ensure_can_add(
        &self,
        _flight: &Flight,
        passenger: &Passenger,
        bag: &BaggageItem,
    ) -> Result<()> {
        let attempted = passenger.total_bags_weight() + bag.weight();
        if attempted > self.max_total {
            return Err(CheckInError::BaggageLimitExceeded {
                attempted,
                limit: self.max_total,
            });
        }
        Ok(())
    }
}
