//! `PatientLedger`: append-only record of every patient in the run.

use ed_core::{Patient, PatientId};

/// Every patient generated during a run, indexed by [`PatientId`].
///
/// Ids are handed out densely from 0, so lookup is a plain `Vec` index.
#[derive(Clone, Debug, Default)]
pub struct PatientLedger {
    patients: Vec<Patient>,
}

impl PatientLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next recorded patient must carry.
    #[inline]
    pub fn next_id(&self) -> PatientId {
        PatientId::slot(self.patients.len())
    }

    /// Append `patient`.
    ///
    /// # Panics
    /// Panics in debug mode if `patient.id` is not [`next_id`][Self::next_id].
    pub fn record(&mut self, patient: Patient) -> PatientId {
        debug_assert_eq!(patient.id, self.next_id(), "ledger ids must be dense");
        let id = patient.id;
        self.patients.push(patient);
        id
    }

    pub fn get(&self, id: PatientId) -> Option<&Patient> {
        self.patients.get(id.index())
    }

    pub fn get_mut(&mut self, id: PatientId) -> Option<&mut Patient> {
        self.patients.get_mut(id.index())
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Patient> {
        self.patients.iter()
    }

    pub fn as_slice(&self) -> &[Patient] {
        &self.patients
    }

    pub fn treated(&self) -> impl Iterator<Item = &Patient> {
        self.patients.iter().filter(|p| p.is_treated())
    }

    pub fn untreated(&self) -> impl Iterator<Item = &Patient> {
        self.patients.iter().filter(|p| !p.is_treated())
    }
}
