// Adapters layer: concrete implementations of the domain ports.

pub mod clock;
pub mod repository;

pub use clock::{FixedClock, SystemClock};
pub use repository::InMemoryFlightRepository;
