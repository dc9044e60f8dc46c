//! Plain data row types written by output backends.

use ed_core::Patient;
use ed_sim::TickSnapshot;

/// One patient from the ledger, as written at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatientRow {
    pub patient_id:        u32,
    pub arrival_minute:    u64,
    pub severity:          u8,
    pub treatment_minutes: u32,
    /// `None` for patients still waiting when the run ended.
    pub start_minute:      Option<u64>,
    pub wait_minutes:      Option<u64>,
}

impl From<&Patient> for PatientRow {
    fn from(p: &Patient) -> Self {
        Self {
            patient_id:        p.id.0,
            arrival_minute:    p.arrival.0,
            severity:          p.severity.level(),
            treatment_minutes: p.treatment_minutes,
            start_minute:      p.treatment_start.map(|m| m.0),
            wait_minutes:      p.wait_minutes(),
        }
    }
}

/// Department state at the end of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub minute:       u64,
    pub admitted:     u64,
    pub queue_len:    u64,
    pub doctors_busy: u64,
    pub beds_busy:    u64,
}

impl From<&TickSnapshot> for TickSummaryRow {
    fn from(s: &TickSnapshot) -> Self {
        Self {
            minute:       s.minute.0,
            admitted:     s.admitted as u64,
            queue_len:    s.queue_len as u64,
            doctors_busy: s.doctors_busy as u64,
            beds_busy:    s.beds_busy as u64,
        }
    }
}
