//! `WaitingQueue`: the waiting room, most urgent first.
//!
//! # Ordering
//!
//! The head is the patient with the highest severity; ties go to the
//! earliest arrival, and patients sharing an arrival minute leave in id
//! (generation) order.  `BinaryHeap` gives O(log N) push and pop.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use ed_core::{Minute, Patient, PatientId, Severity};

use crate::PatientLedger;

/// Ordering key plus ledger handle for one waiting patient.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct QueueEntry {
    pub severity: Severity,
    pub arrival:  Minute,
    pub id:       PatientId,
}

impl From<&Patient> for QueueEntry {
    fn from(p: &Patient) -> Self {
        Self { severity: p.severity, arrival: p.arrival, id: p.id }
    }
}

impl Ord for QueueEntry {
    /// "Greater" means "served first"; `BinaryHeap` is a max-heap.
    fn cmp(&self, other: &Self) -> Ordering {
        self.severity
            .cmp(&other.severity)
            .then_with(|| other.arrival.cmp(&self.arrival))
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Arrived-but-unassigned patients.
#[derive(Clone, Debug, Default)]
pub struct WaitingQueue {
    heap: BinaryHeap<QueueEntry>,
}

impl WaitingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, patient: &Patient) {
        self.heap.push(QueueEntry::from(patient));
    }

    /// The head entry without removing it.
    pub fn peek(&self) -> Option<&QueueEntry> {
        self.heap.peek()
    }

    /// Mutable access to the head patient's ledger record.
    ///
    /// The heap holds its own copy of the ordering key, so writing treatment
    /// fields here leaves the queue ordering intact.
    pub fn peek_mut<'a>(&self, ledger: &'a mut PatientLedger) -> Option<&'a mut Patient> {
        let head = self.heap.peek()?;
        ledger.get_mut(head.id)
    }

    pub fn pop(&mut self) -> Option<QueueEntry> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Arrival minute of the head patient.
    pub fn head_arrival(&self) -> Option<Minute> {
        self.heap.peek().map(|e| e.arrival)
    }
}
