//! All stochastic inputs of a run, built once from a [`SimConfig`].

use ed_core::{Minute, Patient, PatientId, SimConfig, SimRng};

use crate::{next_arrival, ArrivalProfile, SeverityModel, StochasticResult, TreatmentModel};

/// Arrival schedule, severity, and treatment-duration generators.
#[derive(Clone, Debug)]
pub struct Generators {
    base_rate: f64,
    profile:   ArrivalProfile,
    severity:  SeverityModel,
    treatment: TreatmentModel,
}

impl Generators {
    pub fn new(
        base_rate: f64,
        profile:   ArrivalProfile,
        severity:  SeverityModel,
        treatment: TreatmentModel,
    ) -> Self {
        Self { base_rate, profile, severity, treatment }
    }

    pub fn from_config(config: &SimConfig) -> StochasticResult<Self> {
        Ok(Self::new(
            config.base_arrivals_per_hour,
            ArrivalProfile::new(config.hourly_multipliers)?,
            SeverityModel::new(config.severity_weights)?,
            TreatmentModel::new(config.treatment.clone())?,
        ))
    }

    /// Effective arrival rate (per hour) while the clock reads `now`.
    #[inline]
    pub fn rate_at(&self, now: Minute) -> f64 {
        self.profile.effective_rate(self.base_rate, now)
    }

    /// First arrival of the run, drawn at minute 0 from the unmodulated base rate.
    pub fn first_arrival(&self, rng: &mut SimRng) -> StochasticResult<Minute> {
        next_arrival(Minute::ZERO, self.base_rate, rng)
    }

    /// Arrival following `previous`, drawn at the rate in force at `now`.
    pub fn next_arrival(
        &self,
        previous: Minute,
        now:      Minute,
        rng:      &mut SimRng,
    ) -> StochasticResult<Minute> {
        next_arrival(previous, self.rate_at(now), rng)
    }

    /// Materialise a patient arriving at `arrival`: severity first, then a
    /// duration from that severity's range.
    pub fn draw_patient(&self, id: PatientId, arrival: Minute, rng: &mut SimRng) -> Patient {
        let severity = self.severity.sample(rng);
        let minutes = self.treatment.sample(severity, rng);
        Patient::new(id, arrival, severity, minutes)
    }
}
