//! The greedy, head-only assignment engine.

use ed_core::{Minute, PatientId, ResourceId};
use ed_queue::{PatientLedger, WaitingQueue};
use ed_resources::ResourcePool;

use crate::Metrics;

/// One successful match of the queue head to a doctor and a bed.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Assignment {
    pub patient: PatientId,
    pub doctor:  ResourceId,
    pub bed:     ResourceId,
    pub at:      Minute,
    pub wait:    u64,
}

/// Try to start treatment for the queue head at `now`.
///
/// Only the head is considered.  Both a doctor and a bed must be free at
/// `max(now, head.arrival)`; otherwise nothing changes and `None` is
/// returned (no resource is reserved on a partial match).  On success the
/// head's ledger record is written, both resources are held for the
/// treatment duration, the head is popped, and `metrics` is updated.
pub fn assign_head(
    now:     Minute,
    queue:   &mut WaitingQueue,
    ledger:  &mut PatientLedger,
    doctors: &mut ResourcePool,
    beds:    &mut ResourcePool,
    metrics: &mut Metrics,
) -> Option<Assignment> {
    let head = *queue.peek()?;
    let at = now.max(head.arrival);

    let doctor = doctors.find_available(at)?;
    let bed = beds.find_available(at)?;

    let patient = queue.peek_mut(ledger)?;
    patient.begin_treatment(at);
    let minutes = patient.treatment_minutes;
    let wait = at.since(patient.arrival);
    metrics.record_assignment(patient);

    doctors.assign(doctor, at, minutes);
    beds.assign(bed, at, minutes);
    queue.pop();

    Some(Assignment {
        patient: head.id,
        doctor,
        bed,
        at,
        wait,
    })
}
