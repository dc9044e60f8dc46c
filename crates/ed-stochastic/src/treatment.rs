//! Treatment duration sampling.

use ed_core::{Severity, SimRng, TreatmentPolicy};

use crate::{StochasticError, StochasticResult};

/// Uniform treatment duration whose lower bound rises with severity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreatmentModel {
    policy: TreatmentPolicy,
}

impl TreatmentModel {
    /// Accepts a policy only if every severity has a non-empty, positive range.
    pub fn new(policy: TreatmentPolicy) -> StochasticResult<Self> {
        for severity in Severity::all() {
            let min = policy.min_minutes(severity);
            if min == 0 || min > policy.ceiling_minutes {
                return Err(StochasticError::EmptyTreatmentRange {
                    severity,
                    min,
                    max: policy.ceiling_minutes,
                });
            }
        }
        Ok(Self { policy })
    }

    pub fn sample(&self, severity: Severity, rng: &mut SimRng) -> u32 {
        rng.gen_range(self.policy.range(severity))
    }
}
