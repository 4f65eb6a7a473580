pub mod service;

pub use service::CheckInService;
