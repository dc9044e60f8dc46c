use rand::distributions::WeightedError;
use thiserror::Error;

use ed_core::Severity;

#[derive(Debug, Error)]
pub enum StochasticError {
    #[error("arrival rate must be positive and finite, got {0} per hour")]
    InvalidRate(f64),

    #[error("arrival multiplier for hour {hour} must be positive and finite, got {value}")]
    InvalidMultiplier { hour: usize, value: f64 },

    #[error("severity weights rejected: {0}")]
    InvalidWeights(#[from] WeightedError),

    #[error("treatment range for {severity} is empty ({min}..={max} min)")]
    EmptyTreatmentRange { severity: Severity, min: u32, max: u32 },
}

pub type StochasticResult<T> = Result<T, StochasticError>;
