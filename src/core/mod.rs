pub mod scenario;

pub use scenario::{ScenarioReport, ScenarioRunner, StepOutcome, StepStatus};
