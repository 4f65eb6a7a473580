use crate::domain::{FlightId, PassengerId, Weight};
use crate::utils::error::{CheckInError, Result};
use crate::utils::validation::{
    validate_finite_positive, validate_positive_number, validate_unique, Validate,
};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInConfig {
    #[serde(default)]
    pub policy: PolicyConfig,
    #[serde(default)]
    pub clock: ClockConfig,
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub flights: Vec<FlightConfig>,
    #[serde(default)]
    pub steps: Vec<StepConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyConfig {
    #[serde(default = "default_max_total_kg")]
    pub max_total_kg: f64,
}

fn default_max_total_kg() -> f64 {
    crate::domain::STANDARD_MAX_TOTAL.kilograms()
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            max_total_kg: default_max_total_kg(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClockConfig {
    /// RFC 3339 instant; the system clock is used when absent.
    pub fixed_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub stop_on_error: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightConfig {
    pub id: FlightId,
    pub capacity: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum StepConfig {
    Register {
        flight: FlightId,
        passengers: Vec<PassengerId>,
    },
    CheckIn {
        flight: FlightId,
        passenger: PassengerId,
    },
    AddBaggage {
        flight: FlightId,
        passenger: PassengerId,
        tag: Option<String>,
        weight_kg: Option<f64>,
        weight_lb: Option<f64>,
    },
}

impl StepConfig {
    /// Name used in reports and dry-run listings.
    pub fn action(&self) -> &'static str {
        match self {
            StepConfig::Register { .. } => "register",
            StepConfig::CheckIn { .. } => "check_in",
            StepConfig::AddBaggage { .. } => "add_baggage",
        }
    }

    /// Flight the step operates on.
    pub fn flight(&self) -> FlightId {
        match self {
            StepConfig::Register { flight, .. }
            | StepConfig::CheckIn { flight, .. }
            | StepConfig::AddBaggage { flight, .. } => *flight,
        }
    }
}

/// Weight of an `add_baggage` step; exactly one unit must be given.
pub fn bag_weight(weight_kg: Option<f64>, weight_lb: Option<f64>) -> Result<Weight> {
    match (weight_kg, weight_lb) {
        (Some(kg), None) => Weight::from_kilograms(kg),
        (None, Some(lb)) => Weight::from_pounds(lb),
        (kg, lb) => Err(CheckInError::InvalidConfigValue {
            field: "steps.weight".to_string(),
            value: format!("kg={:?}, lb={:?}", kg, lb),
            reason: "Specify exactly one of weight_kg or weight_lb".to_string(),
        }),
    }
}

impl CheckInConfig {
    /// Reads and parses a TOML scenario file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses TOML after environment substitution. Does not validate.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CheckInError::ConfigParse {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the value of the environment variable `VAR`.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").map_err(|e| {
            CheckInError::ConfigParse {
                message: e.to_string(),
            }
        })?;

        if let Some(missing) = re
            .captures_iter(content)
            .map(|caps| caps[1].to_string())
            .find(|name| std::env::var(name).is_err())
        {
            return Err(CheckInError::MissingConfig {
                field: format!("env:{}", missing),
            });
        }

        let result = re.replace_all(content, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_default()
        });
        Ok(result.into_owned())
    }

    /// Per-passenger cumulative baggage limit.
    pub fn max_total(&self) -> Result<Weight> {
        Weight::from_kilograms(self.policy.max_total_kg)
    }

    /// Checks flights, the policy limit and that every step is runnable
    /// against the declared flights.
    pub fn validate_config(&self) -> Result<()> {
        if self.flights.is_empty() {
            return Err(CheckInError::MissingConfig {
                field: "flights".to_string(),
            });
        }

        validate_finite_positive("policy.max_total_kg", self.policy.max_total_kg)?;

        for flight in &self.flights {
            validate_positive_number("flights.capacity", flight.capacity, 1)?;
        }
        validate_unique("flights.id", self.flights.iter().map(|f| f.id))?;

        let known: HashSet<FlightId> = self.flights.iter().map(|f| f.id).collect();
        for (index, step) in self.steps.iter().enumerate() {
            if !known.contains(&step.flight()) {
                return Err(CheckInError::InvalidConfigValue {
                    field: format!("steps[{}].flight", index),
                    value: step.flight().to_string(),
                    reason: "Flight is not declared in [[flights]]".to_string(),
                });
            }
            if let StepConfig::AddBaggage {
                weight_kg,
                weight_lb,
                ..
            } = step
            {
                bag_weight(*weight_kg, *weight_lb)?;
            }
        }

        Ok(())
    }
}

impl Validate for CheckInConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
