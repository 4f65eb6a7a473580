// Domain layer: the flight aggregate, its value types and the ports it consumes.
// Nothing in here logs, awaits or reads ambient state.

pub mod baggage;
pub mod flight;
pub mod passenger;
pub mod policy;
pub mod ports;
pub mod value_objects;

pub use baggage::{BaggageItem, MAX_SINGLE_BAG};
pub use flight::Flight;
pub use passenger::Passenger;
pub use policy::{BaggagePolicy, StandardBaggagePolicy, STANDARD_MAX_TOTAL};
pub use ports::{Clock, FlightRepository};
pub use value_objects::{BaggageTag, FlightId, PassengerId, Weight};
