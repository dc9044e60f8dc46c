use ed_core::EdError;
use ed_stochastic::StochasticError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] EdError),

    #[error("generator setup failed: {0}")]
    Stochastic(#[from] StochasticError),
}

pub type SimResult<T> = Result<T, SimError>;
