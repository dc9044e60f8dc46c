//! Poisson arrivals modulated by time of day.
//!
//! Inter-arrival gaps are exponential with mean `60 / rate_per_hour`
//! minutes.  The rate itself is the configured base rate scaled by a
//! 24-entry step function over the hour of day ([`ArrivalProfile`]).

use rand::distributions::Distribution;
use rand_distr::Exp;

use ed_core::config::HOURS_PER_DAY;
use ed_core::{Minute, SimRng};

use crate::{StochasticError, StochasticResult};

/// Draw the next arrival after `current`.
///
/// The gap is exponentially distributed with mean `60 / rate_per_hour`
/// minutes and rounded down to a whole minute, so several patients may share
/// one arrival minute.
pub fn next_arrival(
    current:       Minute,
    rate_per_hour: f64,
    rng:           &mut SimRng,
) -> StochasticResult<Minute> {
    if !rate_per_hour.is_finite() || rate_per_hour <= 0.0 {
        return Err(StochasticError::InvalidRate(rate_per_hour));
    }
    let per_minute = Exp::new(rate_per_hour / 60.0)
        .map_err(|_| StochasticError::InvalidRate(rate_per_hour))?;
    let gap: f64 = per_minute.sample(rng.inner());
    // A vanishing rate yields an infinite gap, which saturates to `Minute::NEVER`.
    Ok(current.offset(gap.floor() as u64))
}

// ── ArrivalProfile ────────────────────────────────────────────────────────────

/// Hour-of-day demand curve: a discontinuous step function over 24 hours.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrivalProfile {
    multipliers: [f64; HOURS_PER_DAY],
}

impl ArrivalProfile {
    /// Build a profile; every multiplier must be positive and finite.
    pub fn new(multipliers: [f64; HOURS_PER_DAY]) -> StochasticResult<Self> {
        for (hour, &value) in multipliers.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(StochasticError::InvalidMultiplier { hour, value });
            }
        }
        Ok(Self { multipliers })
    }

    /// Constant demand: every hour uses the base rate unchanged.
    pub fn flat() -> Self {
        Self { multipliers: [1.0; HOURS_PER_DAY] }
    }

    /// Multiplier for `hour_of_day`; hours past 23 wrap to the next day.
    #[inline]
    pub fn multiplier(&self, hour_of_day: usize) -> f64 {
        self.multipliers[hour_of_day % HOURS_PER_DAY]
    }

    /// Effective arrival rate (patients per hour) at minute `at`.
    #[inline]
    pub fn effective_rate(&self, base_per_hour: f64, at: Minute) -> f64 {
        base_per_hour * self.multiplier(at.hour_of_day())
    }
}
