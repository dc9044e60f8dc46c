//! Running totals, updated by admission and by every successful assignment.

use ed_core::config::SEVERITY_LEVELS;
use ed_core::{Minute, Patient, Severity};

/// Per-severity counters.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct SeverityTally {
    pub arrivals:     u64,
    pub treated:      u64,
    pub wait_minutes: u64,
}

/// The metrics accumulator.
///
/// Busy minutes are clipped to `[0, horizon)`: a resource can be busy for at
/// most `horizon` minutes inside the window, so utilization never exceeds 1
/// even when the backlog is treated after arrivals stop.
/// `treatment_minutes` keeps the unclipped total.
#[derive(Clone, Debug)]
pub struct Metrics {
    horizon: Minute,

    pub total_patients:      u64,
    pub treated:             u64,
    /// Sum of waits over treated patients only.
    pub total_wait_minutes:  u64,
    pub max_wait_minutes:    u64,
    pub doctor_busy_minutes: u64,
    pub bed_busy_minutes:    u64,
    pub treatment_minutes:   u64,
    pub peak_queue_len:      usize,
    pub by_severity:         [SeverityTally; SEVERITY_LEVELS],
}

impl Metrics {
    pub fn new(horizon: Minute) -> Self {
        Self {
            horizon,
            total_patients:      0,
            treated:             0,
            total_wait_minutes:  0,
            max_wait_minutes:    0,
            doctor_busy_minutes: 0,
            bed_busy_minutes:    0,
            treatment_minutes:   0,
            peak_queue_len:      0,
            by_severity:         [SeverityTally::default(); SEVERITY_LEVELS],
        }
    }

    #[inline]
    pub fn horizon(&self) -> Minute {
        self.horizon
    }

    pub fn record_arrival(&mut self, severity: Severity) {
        self.total_patients += 1;
        self.by_severity[severity.index()].arrivals += 1;
    }

    /// Account for a patient whose treatment has just started.
    pub fn record_assignment(&mut self, patient: &Patient) {
        let (Some(start), Some(wait)) = (patient.treatment_start, patient.wait_minutes()) else {
            debug_assert!(false, "{} recorded without a treatment start", patient.id);
            return;
        };
        let in_window = window_overlap(start, patient.treatment_minutes, self.horizon);

        self.treated += 1;
        self.total_wait_minutes += wait;
        self.max_wait_minutes = self.max_wait_minutes.max(wait);
        self.doctor_busy_minutes += in_window;
        self.bed_busy_minutes += in_window;
        self.treatment_minutes += patient.treatment_minutes as u64;

        let tally = &mut self.by_severity[patient.severity.index()];
        tally.treated += 1;
        tally.wait_minutes += wait;
    }

    pub fn observe_queue_len(&mut self, len: usize) {
        self.peak_queue_len = self.peak_queue_len.max(len);
    }

    /// Mean wait over treated patients; 0 when nobody was treated.
    pub fn average_wait(&self) -> f64 {
        if self.treated == 0 {
            0.0
        } else {
            self.total_wait_minutes as f64 / self.treated as f64
        }
    }
}

/// Minutes of `[start, start + minutes)` that fall before `horizon`.
fn window_overlap(start: Minute, minutes: u32, horizon: Minute) -> u64 {
    let end = (start + minutes as u64).min(horizon);
    end.0.saturating_sub(start.min(horizon).0)
}

/// Busy minutes as a fraction of `capacity × horizon`; 0 for an empty pool.
pub fn utilization(busy_minutes: u64, capacity: usize, horizon: Minute) -> f64 {
    let available = capacity as u64 * horizon.0;
    if available == 0 {
        0.0
    } else {
        busy_minutes as f64 / available as f64
    }
}
