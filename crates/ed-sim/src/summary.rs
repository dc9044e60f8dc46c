//! The final report of a run.
//!
//! [`SimSummary`] is computed once, after the last tick.  It renders the
//! human-readable report through `Display` and exposes the same numbers as a
//! name → value map through [`SimSummary::metrics`].

use std::collections::BTreeMap;
use std::fmt;

use ed_core::{Minute, Severity};

use crate::metrics::{utilization, Metrics};

/// Treated count and average wait for one severity level.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SeveritySummary {
    pub severity:             Severity,
    pub arrivals:             u64,
    pub treated:              u64,
    pub average_wait_minutes: f64,
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimSummary {
    pub seed:                 u64,
    pub horizon_minutes:      u64,
    /// Clock minute of the last tick.
    pub final_minute:         u64,
    pub doctors:              usize,
    pub beds:                 usize,
    pub total_patients:       u64,
    pub patients_treated:     u64,
    pub patients_untreated:   u64,
    pub average_wait_minutes: f64,
    pub max_wait_minutes:     u64,
    /// Fraction of `doctors × horizon` spent treating, in `[0, 1]`.
    pub doctor_utilization:   f64,
    /// Fraction of `beds × horizon` spent occupied, in `[0, 1]`.
    pub bed_utilization:      f64,
    /// Treatment minutes started in the run, including time past the horizon.
    pub treatment_minutes:    u64,
    pub peak_queue_len:       usize,
    /// The run ended with patients no resource could ever serve.
    pub stalled:              bool,
    pub by_severity:          Vec<SeveritySummary>,
}

impl SimSummary {
    pub fn new(
        metrics:      &Metrics,
        seed:         u64,
        final_minute: Minute,
        doctors:      usize,
        beds:         usize,
        stalled:      bool,
    ) -> Self {
        let horizon = metrics.horizon();
        let by_severity = Severity::all()
            .map(|severity| {
                let tally = metrics.by_severity[severity.index()];
                SeveritySummary {
                    severity,
                    arrivals: tally.arrivals,
                    treated: tally.treated,
                    average_wait_minutes: if tally.treated == 0 {
                        0.0
                    } else {
                        tally.wait_minutes as f64 / tally.treated as f64
                    },
                }
            })
            .collect();

        Self {
            seed,
            horizon_minutes:      horizon.0,
            final_minute:         final_minute.0,
            doctors,
            beds,
            total_patients:       metrics.total_patients,
            patients_treated:     metrics.treated,
            patients_untreated:   metrics.total_patients - metrics.treated,
            average_wait_minutes: metrics.average_wait(),
            max_wait_minutes:     metrics.max_wait_minutes,
            doctor_utilization:   utilization(metrics.doctor_busy_minutes, doctors, horizon),
            bed_utilization:      utilization(metrics.bed_busy_minutes, beds, horizon),
            treatment_minutes:    metrics.treatment_minutes,
            peak_queue_len:       metrics.peak_queue_len,
            stalled,
            by_severity,
        }
    }

    /// Named metrics for programmatic consumption.
    pub fn metrics(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([
            ("total_patients",       self.total_patients as f64),
            ("patients_treated",     self.patients_treated as f64),
            ("patients_untreated",   self.patients_untreated as f64),
            ("average_wait_minutes", self.average_wait_minutes),
            ("max_wait_minutes",     self.max_wait_minutes as f64),
            ("doctor_utilization",   self.doctor_utilization),
            ("bed_utilization",      self.bed_utilization),
            ("peak_queue_len",       self.peak_queue_len as f64),
            ("final_minute",         self.final_minute as f64),
        ])
    }
}

impl fmt::Display for SimSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Hospital Simulation Results ===")?;
        writeln!(f, "Total Patients Arrived: {}", self.total_patients)?;
        writeln!(f, "Patients Treated: {}", self.patients_treated)?;
        writeln!(f, "Average Wait Time (minutes): {:.2}", self.average_wait_minutes)?;
        writeln!(f, "Doctor Utilization: {:.2}%", self.doctor_utilization * 100.0)?;
        writeln!(f, "Bed Utilization: {:.2}%", self.bed_utilization * 100.0)?;
        writeln!(f)?;
        writeln!(f, "{:<10} {:>9} {:>9} {:>10}", "Severity", "Arrived", "Treated", "Avg wait")?;
        for row in &self.by_severity {
            writeln!(
                f,
                "{:<10} {:>9} {:>9} {:>10.2}",
                row.severity.to_string(),
                row.arrivals,
                row.treated,
                row.average_wait_minutes
            )?;
        }
        writeln!(f)?;
        write!(
            f,
            "Seed {} | ended at minute {} | peak queue {} | max wait {} min",
            self.seed, self.final_minute, self.peak_queue_len, self.max_wait_minutes
        )?;
        if self.stalled {
            write!(f, " | stalled with {} untreated", self.patients_untreated)?;
        }
        Ok(())
    }
}
