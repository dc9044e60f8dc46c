//! Run configuration.
//!
//! Every knob of the department model lives in [`SimConfig`].  The defaults
//! reproduce the reference department: one simulated day, 5 doctors,
//! 10 beds, and an evening surge.
//!
//! A config is plain data; [`SimConfig::validate`] is the single gate that
//! rejects values which would otherwise divide by zero or never terminate.

use std::ops::RangeInclusive;

use crate::{EdError, EdResult, Minute, Severity};

pub const HOURS_PER_DAY: usize = 24;
pub const SEVERITY_LEVELS: usize = 5;

/// Demand multipliers of the reference department: night low (00–06),
/// evening peak (18–22), baseline otherwise.
pub const DEFAULT_HOURLY_MULTIPLIERS: [f64; HOURS_PER_DAY] = {
    let mut table = [5.0; HOURS_PER_DAY];
    let mut h = 0;
    while h < HOURS_PER_DAY {
        if h <= 6 {
            table[h] = 2.0;
        } else if h >= 18 && h <= 22 {
            table[h] = 8.0;
        }
        h += 1;
    }
    table
};

/// Relative weights for severities 1..=5 (index 0 = severity 1).
/// Roughly 10/10/20/20/40 percent.
pub const DEFAULT_SEVERITY_WEIGHTS: [u32; SEVERITY_LEVELS] = [1, 1, 2, 2, 4];

// ── AdvancePolicy ─────────────────────────────────────────────────────────────

/// How the event loop moves the clock between ticks.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AdvancePolicy {
    /// One minute per tick.
    Step,
    /// Straight to the next minute at which something can change.
    #[default]
    Jump,
}

// ── TreatmentPolicy ───────────────────────────────────────────────────────────

/// Severity-dependent treatment duration bounds.
///
/// Duration for severity `s` is drawn uniformly from
/// `base_minutes + s * minutes_per_severity ..= ceiling_minutes`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreatmentPolicy {
    pub base_minutes:         u32,
    pub minutes_per_severity: u32,
    pub ceiling_minutes:      u32,
}

impl Default for TreatmentPolicy {
    fn default() -> Self {
        Self {
            base_minutes:         30,
            minutes_per_severity: 10,
            ceiling_minutes:      120,
        }
    }
}

impl TreatmentPolicy {
    /// Shortest possible treatment for `severity`.
    #[inline]
    pub fn min_minutes(&self, severity: Severity) -> u32 {
        self.base_minutes
            .saturating_add(self.minutes_per_severity.saturating_mul(severity.level() as u32))
    }

    /// Inclusive range of treatment durations for `severity`.
    pub fn range(&self, severity: Severity) -> RangeInclusive<u32> {
        self.min_minutes(severity)..=self.ceiling_minutes
    }

    fn validate(&self) -> EdResult<()> {
        if self.min_minutes(Severity::MIN) == 0 {
            return Err(EdError::Config(
                "treatment duration for severity 1 must be at least one minute".into(),
            ));
        }
        let top = self.min_minutes(Severity::MAX);
        if top > self.ceiling_minutes {
            return Err(EdError::Config(format!(
                "treatment lower bound for severity 5 ({top} min) exceeds the ceiling ({} min)",
                self.ceiling_minutes
            )));
        }
        Ok(())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically loaded from a JSON file by the application crate (feature
/// `serde`; missing fields fall back to [`Default`]) and passed to the
/// simulation builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Arrivals stop at this minute.  Default: 1440 (one day).
    pub horizon_minutes: u64,

    /// Doctor pool capacity.
    pub doctors: u32,

    /// Bed pool capacity.
    pub beds: u32,

    /// Base arrival rate in patients per hour, before the hourly multiplier.
    pub base_arrivals_per_hour: f64,

    /// Demand curve: the base rate is multiplied by `hourly_multipliers[h]`
    /// during hour-of-day `h`.
    pub hourly_multipliers: [f64; HOURS_PER_DAY],

    /// Relative weights for severities 1..=5.
    pub severity_weights: [u32; SEVERITY_LEVELS],

    pub treatment: TreatmentPolicy,

    /// Master RNG seed.  `None` draws one from the OS at build time.
    pub seed: Option<u64>,

    pub advance: AdvancePolicy,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            horizon_minutes:        1_440,
            doctors:                5,
            beds:                   10,
            base_arrivals_per_hour: 5.0,
            hourly_multipliers:     DEFAULT_HOURLY_MULTIPLIERS,
            severity_weights:       DEFAULT_SEVERITY_WEIGHTS,
            treatment:              TreatmentPolicy::default(),
            seed:                   None,
            advance:                AdvancePolicy::default(),
        }
    }
}

impl SimConfig {
    /// The minute at which arrivals stop (exclusive upper bound).
    #[inline]
    pub fn horizon(&self) -> Minute {
        Minute(self.horizon_minutes)
    }

    /// Reject any configuration the simulation cannot run.
    pub fn validate(&self) -> EdResult<()> {
        self.validate_pools()?;
        self.validate_demand()
    }

    /// Both pools must hold at least one resource.
    pub fn validate_pools(&self) -> EdResult<()> {
        if self.doctors == 0 {
            return Err(EdError::Config("doctor pool must hold at least one doctor".into()));
        }
        if self.beds == 0 {
            return Err(EdError::Config("bed pool must hold at least one bed".into()));
        }
        Ok(())
    }

    /// Everything except pool sizes: horizon, rates, weights, treatment policy.
    pub fn validate_demand(&self) -> EdResult<()> {
        if self.horizon_minutes == 0 {
            return Err(EdError::Config("horizon must be at least one minute".into()));
        }
        let rate = self.base_arrivals_per_hour;
        if !rate.is_finite() || rate <= 0.0 {
            return Err(EdError::Config(format!(
                "base arrival rate must be a positive number of patients per hour, got {rate}"
            )));
        }
        for (hour, &m) in self.hourly_multipliers.iter().enumerate() {
            if !m.is_finite() || m <= 0.0 {
                return Err(EdError::Config(format!(
                    "arrival multiplier for hour {hour} must be positive, got {m}"
                )));
            }
        }
        if self.severity_weights.iter().all(|&w| w == 0) {
            return Err(EdError::Config("severity weights must not all be zero".into()));
        }
        self.treatment.validate()
    }
}
