use crate::domain::baggage::BaggageItem;
use crate::domain::value_objects::{PassengerId, Weight};
use crate::utils::error::{CheckInError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Seat and timestamp are assigned together, so they live together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct Boarding {
    #[serde(rename = "checked_in_at")]
    at: DateTime<Utc>,
    #[serde(rename = "seat_number")]
    seat: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Passenger {
    id: PassengerId,
    #[serde(flatten)]
    boarding: Option<Boarding>,
    bags: Vec<BaggageItem>,
}

impl Passenger {
    pub(crate) fn new(id: PassengerId) -> Self {
        Self {
            id,
            boarding: None,
            bags: Vec::new(),
        }
    }

    pub fn id(&self) -> PassengerId {
        self.id
    }

    pub fn is_checked_in(&self) -> bool {
        self.boarding.is_some()
    }

    pub fn checked_in_at(&self) -> Option<DateTime<Utc>> {
        self.boarding.as_ref().map(|b| b.at)
    }

    pub fn seat_number(&self) -> Option<&str> {
        self.boarding.as_ref().map(|b| b.seat.as_str())
    }

    /// Bags in the order they were added.
    pub fn bags(&self) -> &[BaggageItem] {
        &self.bags
    }

    pub fn total_bags_weight(&self) -> Weight {
        self.bags.iter().map(BaggageItem::weight).sum()
    }

    /// A later call overwrites an earlier check-in.
    pub(crate) fn check_in(&mut self, at: DateTime<Utc>, seat: String) {
        self.boarding = Some(Boarding { at, seat });
    }

    pub(crate) fn add_bag(&mut self, bag: BaggageItem) -> Result<()> {
        // resubmitted bag: keep the first copy
        if self.bags.contains(&bag) {
            return Ok(());
        }

        if !self.is_checked_in() {
            return Err(CheckInError::PassengerNotCheckedIn(self.id));
        }

        self.bags.push(bag);
        Ok(())
    }
}
