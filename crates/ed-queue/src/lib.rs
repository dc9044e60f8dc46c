//! `ed-queue`: who has arrived, and who is next.
//!
//! | Module            | Contents                                               |
//! |-------------------|--------------------------------------------------------|
//! | [`ledger`]        | `PatientLedger`: arena of every patient, by `PatientId` |
//! | [`waiting_queue`] | `WaitingQueue`: `BinaryHeap` of handles into the ledger |
//!
//! The queue stores copies of the ordering keys plus a `PatientId` handle,
//! never the `Patient` itself.  The assignment step can therefore write the
//! head patient's treatment fields through the ledger while the patient is
//! still queued, and the heap ordering cannot be disturbed by that write.

pub mod ledger;
pub mod waiting_queue;


pub use ledger::PatientLedger;
pub use waiting_queue::{QueueEntry, WaitingQueue};
