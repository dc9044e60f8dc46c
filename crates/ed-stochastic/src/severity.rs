//! Triage severity sampling.

use rand::distributions::{Distribution, WeightedIndex};

use ed_core::config::SEVERITY_LEVELS;
use ed_core::{Severity, SimRng};

use crate::StochasticResult;

/// Weighted categorical distribution over severities 1..=5.
///
/// The reference weighting (1/1/2/2/4) puts 40 % of arrivals at severity 5.
/// Any weighting is accepted as long as at least one weight is non-zero.
#[derive(Clone, Debug)]
pub struct SeverityModel {
    weights: [u32; SEVERITY_LEVELS],
    dist:    WeightedIndex<u32>,
}

impl SeverityModel {
    pub fn new(weights: [u32; SEVERITY_LEVELS]) -> StochasticResult<Self> {
        let dist = WeightedIndex::new(weights)?;
        Ok(Self { weights, dist })
    }

    /// Probability of drawing `severity`.
    pub fn probability(&self, severity: Severity) -> f64 {
        let total: u32 = self.weights.iter().sum();
        self.weights[severity.index()] as f64 / total as f64
    }

    pub fn sample(&self, rng: &mut SimRng) -> Severity {
        let idx = self.dist.sample(rng.inner());
        // WeightedIndex over five weights only yields 0..5.
        Severity::new(idx as u8 + 1).unwrap_or(Severity::MAX)
    }
}
