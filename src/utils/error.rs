use crate::domain::value_objects::{FlightId, PassengerId, Weight};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckInError {
    #[error("Flight {0} not found.")]
    FlightNotFound(FlightId),

    #[error("Passenger {0} not found.")]
    PassengerNotFound(PassengerId),

    #[error("Flight {0} capacity reached.")]
    Overbooking(FlightId),

    #[error("Concurrency conflict on flight {0}.")]
    ConcurrencyConflict(FlightId),

    #[error("Flight {0} already exists.")]
    DuplicateFlight(FlightId),

    #[error("Baggage limit exceeded: {attempted} > {limit}")]
    BaggageLimitExceeded { attempted: Weight, limit: Weight },

    #[error("Passenger {0} must be checked in before adding bags.")]
    PassengerNotCheckedIn(PassengerId),

    #[error("Weight cannot be negative: {value}")]
    NegativeWeight { value: f64 },

    #[error("Weight must be a finite number: {value}")]
    InvalidWeight { value: f64 },

    #[error("Single bag cannot exceed {max}, got {weight}")]
    SingleBagTooHeavy { weight: Weight, max: Weight },

    #[error("Invalid configuration value for '{field}': '{value}' - {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },

    #[error("Configuration parsing error: {message}")]
    ConfigParse { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of a [`CheckInError`], used by callers that need to
/// react to a family of failures rather than a single variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    Conflict,
    Validation,
    Range,
    Config,
    Internal,
}

impl CheckInError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CheckInError::FlightNotFound(_) | CheckInError::PassengerNotFound(_) => {
                ErrorKind::NotFound
            }
            CheckInError::Overbooking(_)
            | CheckInError::ConcurrencyConflict(_)
            | CheckInError::DuplicateFlight(_) => ErrorKind::Conflict,
            CheckInError::BaggageLimitExceeded { .. } | CheckInError::PassengerNotCheckedIn(_) => {
                ErrorKind::Validation
            }
            CheckInError::NegativeWeight { .. }
            | CheckInError::InvalidWeight { .. }
            | CheckInError::SingleBagTooHeavy { .. } => ErrorKind::Range,
            CheckInError::InvalidConfigValue { .. }
            | CheckInError::MissingConfig { .. }
            | CheckInError::ConfigParse { .. } => ErrorKind::Config,
            CheckInError::Io(_) => ErrorKind::Internal,
        }
    }

    /// Domain rejections are expected outcomes of a request; everything else
    /// points at bad input wiring or the environment.
    pub fn is_domain_rejection(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::NotFound | ErrorKind::Conflict | ErrorKind::Validation
        )
    }
}

pub type Result<T> = std::result::Result<T, CheckInError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        let flight_id = FlightId::new();
        let passenger_id = PassengerId::new();

        assert_eq!(
            CheckInError::FlightNotFound(flight_id).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            CheckInError::Overbooking(flight_id).kind(),
            ErrorKind::Conflict
        );
        assert_eq!(
            CheckInError::PassengerNotCheckedIn(passenger_id).kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            CheckInError::NegativeWeight { value: -1.0 }.kind(),
            ErrorKind::Range
        );
        assert_eq!(
            CheckInError::MissingConfig {
                field: "flights".to_string()
            }
            .kind(),
            ErrorKind::Config
        );
    }

    #[test]
    fn test_limit_message_reports_both_weights() {
        let err = CheckInError::BaggageLimitExceeded {
            attempted: Weight::from_kilograms(55.0).unwrap(),
            limit: Weight::from_kilograms(50.0).unwrap(),
        };
        assert_eq!(err.to_string(), "Baggage limit exceeded: 55.0 kg > 50.0 kg");
        assert!(err.is_domain_rejection());
    }
}
