use crate::utils::error::{CheckInError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlightId(pub Uuid);

impl FlightId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> std::result::Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for FlightId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PassengerId(pub Uuid);

impl PassengerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> std::result::Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for PassengerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PassengerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Label printed on a physical bag. Uniqueness is not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BaggageTag(String);

impl BaggageTag {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Random tag, used when the caller does not supply one.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn code(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaggageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

const KILOGRAMS_PER_POUND: f64 = 0.45359237;

/// Non-negative, finite mass stored in kilograms.
///
/// Construction rejects negative and non-finite values, which is what makes
/// the `Eq`/`Ord` implementations below sound.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(transparent)]
pub struct Weight {
    kilograms: f64,
}

impl Weight {
    pub const ZERO: Weight = Weight { kilograms: 0.0 };

    /// For compile-time constants only; `kg` must be finite and non-negative.
    pub(crate) const fn from_trusted_kilograms(kg: f64) -> Self {
        Self { kilograms: kg }
    }

    pub fn from_kilograms(kg: f64) -> Result<Self> {
        if !kg.is_finite() {
            return Err(CheckInError::InvalidWeight { value: kg });
        }
        if kg < 0.0 {
            return Err(CheckInError::NegativeWeight { value: kg });
        }
        Ok(Self { kilograms: kg })
    }

    pub fn from_pounds(lb: f64) -> Result<Self> {
        if !lb.is_finite() {
            return Err(CheckInError::InvalidWeight { value: lb });
        }
        if lb < 0.0 {
            return Err(CheckInError::NegativeWeight { value: lb });
        }
        Self::from_kilograms(lb * KILOGRAMS_PER_POUND)
    }

    pub fn kilograms(&self) -> f64 {
        self.kilograms
    }

    pub fn pounds(&self) -> f64 {
        self.kilograms / KILOGRAMS_PER_POUND
    }

    /// Fails with a range error when `other` is heavier than `self`.
    pub fn checked_sub(self, other: Weight) -> Result<Weight> {
        Self::from_kilograms(self.kilograms - other.kilograms)
    }
}

impl Add for Weight {
    type Output = Weight;

    fn add(self, rhs: Weight) -> Weight {
        Weight {
            kilograms: self.kilograms + rhs.kilograms,
        }
    }
}

/// Subtraction can leave the non-negative range, so `-` yields a `Result`.
impl Sub for Weight {
    type Output = Result<Weight>;

    fn sub(self, rhs: Weight) -> Result<Weight> {
        self.checked_sub(rhs)
    }
}

impl Sum for Weight {
    fn sum<I: Iterator<Item = Weight>>(iter: I) -> Weight {
        iter.fold(Weight::ZERO, |acc, w| acc + w)
    }
}

impl<'a> Sum<&'a Weight> for Weight {
    fn sum<I: Iterator<Item = &'a Weight>>(iter: I) -> Weight {
        iter.copied().sum()
    }
}

impl PartialEq for Weight {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Weight {}

impl PartialOrd for Weight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Weight {
    fn cmp(&self, other: &Self) -> Ordering {
        // -0.0 and 0.0 must compare equal
        if self.kilograms == other.kilograms {
            Ordering::Equal
        } else {
            self.kilograms.total_cmp(&other.kilograms)
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} kg", self.kilograms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorKind;

    #[test]
    fn test_negative_weight_is_range_error() {
        let err = Weight::from_kilograms(-0.5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);

        let err = Weight::from_pounds(-1.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn test_non_finite_weight_rejected() {
        assert!(Weight::from_kilograms(f64::NAN).is_err());
        assert!(Weight::from_kilograms(f64::INFINITY).is_err());
        assert!(Weight::from_pounds(f64::NAN).is_err());
    }

    #[test]
    fn test_pounds_conversion() {
        let w = Weight::from_pounds(100.0).unwrap();
        assert!((w.kilograms() - 45.359237).abs() < 1e-9);
        assert!((w.pounds() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_arithmetic_and_ordering() {
        let a = Weight::from_kilograms(30.0).unwrap();
        let b = Weight::from_kilograms(19.0).unwrap();

        assert_eq!(a + b, Weight::from_kilograms(49.0).unwrap());
        assert_eq!(a.checked_sub(b).unwrap(), Weight::from_kilograms(11.0).unwrap());
        assert!(b.checked_sub(a).is_err());
        assert!(b < a);
        assert!(a >= b);
        assert!(Weight::ZERO <= b);
        assert_eq!(Weight::from_kilograms(0.0).unwrap(), Weight::ZERO);
    }

    #[test]
    fn test_sub_operator_matches_checked_sub() {
        let a = Weight::from_kilograms(30.0).unwrap();
        let b = Weight::from_kilograms(19.0).unwrap();

        assert_eq!((a - b).unwrap(), Weight::from_kilograms(11.0).unwrap());
        assert_eq!((a - a).unwrap(), Weight::ZERO);
        assert_eq!((b - a).unwrap_err().kind(), ErrorKind::Range);
    }

    #[test]
    fn test_sum_of_weights() {
        let weights = [
            Weight::from_kilograms(1.5).unwrap(),
            Weight::from_kilograms(2.5).unwrap(),
        ];
        let total: Weight = weights.iter().sum();
        assert_eq!(total, Weight::from_kilograms(4.0).unwrap());
        assert_eq!(Vec::<Weight>::new().into_iter().sum::<Weight>(), Weight::ZERO);
    }

    #[test]
    fn test_display() {
        assert_eq!(Weight::from_kilograms(32.0).unwrap().to_string(), "32.0 kg");
        assert_eq!(BaggageTag::new("T1").to_string(), "T1");
    }

    #[test]
    fn test_ids_parse_and_compare() {
        let raw = "11111111-1111-1111-1111-111111111111";
        let a = FlightId::from_string(raw).unwrap();
        let b = FlightId::from_string(raw).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), raw);
        assert_ne!(PassengerId::new(), PassengerId::new());
        assert!(PassengerId::from_string("not-a-uuid").is_err());
    }
}
