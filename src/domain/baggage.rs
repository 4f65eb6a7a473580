use crate::domain::value_objects::{BaggageTag, Weight};
use crate::utils::error::{CheckInError, Result};
use serde::Serialize;

/// Hard ceiling for one bag, independent of any carrier policy.
pub const MAX_SINGLE_BAG: Weight = Weight::from_trusted_kilograms(32.0);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaggageItem {
    tag: BaggageTag,
    weight: Weight,
}

impl BaggageItem {
    pub fn create(tag: BaggageTag, weight: Weight) -> Result<Self> {
        if weight > MAX_SINGLE_BAG {
            return Err(CheckInError::SingleBagTooHeavy {
                weight,
                max: MAX_SINGLE_BAG,
            });
        }
        Ok(Self { tag, weight })
    }

    pub fn tag(&self) -> &BaggageTag {
        &self.tag
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }
}
