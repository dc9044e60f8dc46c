//! Simulation observer trait for progress reporting and data collection.

use ed_core::{Minute, Patient, PatientId, ResourceId};
use ed_queue::PatientLedger;

/// State of the department at the end of one tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct TickSnapshot {
    pub minute:       Minute,
    /// Patients admitted this tick.
    pub admitted:     usize,
    /// Patient assigned this tick, if any.
    pub assigned:     Option<PatientId>,
    pub queue_len:    usize,
    pub doctors_busy: usize,
    pub beds_busy:    usize,
}

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// event loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
pub trait SimObserver {
    /// A new patient has been recorded and queued.
    fn on_arrival(&mut self, _patient: &Patient) {}

    /// The queue head has been given `doctor` and `bed`.  `patient` already
    /// carries its treatment start.
    fn on_assignment(&mut self, _patient: &Patient, _doctor: ResourceId, _bed: ResourceId) {}

    /// Called at the end of every tick.
    fn on_tick_end(&mut self, _snapshot: &TickSnapshot) {}

    /// Called once after the final tick, with the full patient ledger.
    fn on_sim_end(&mut self, _final_minute: Minute, _ledger: &PatientLedger) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
