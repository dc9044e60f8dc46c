//! Observer that streams a run into an [`OutputWriter`].

use ed_core::Minute;
use ed_queue::PatientLedger;
use ed_sim::{SimObserver, TickSnapshot};

use crate::row::{PatientRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// Writes one [`TickSummaryRow`] per processed tick and, when the run ends,
/// one [`PatientRow`] per ledger entry followed by `finish`.
///
/// Observer hooks cannot fail, so the first writer error is held back and
/// later writes are skipped.  Call [`take_error`][Self::take_error] once the
/// run returns.
pub struct SimOutputObserver<W: OutputWriter> {
    writer: W,
    error:  Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, error: None }
    }

    /// The first write error of the run, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn guarded(&mut self, write: impl FnOnce(&mut W) -> OutputResult<()>) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = write(&mut self.writer) {
            self.error = Some(e);
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, snapshot: &TickSnapshot) {
        let row = TickSummaryRow::from(snapshot);
        self.guarded(|w| w.write_tick_summary(&row));
    }

    fn on_sim_end(&mut self, _final_minute: Minute, ledger: &PatientLedger) {
        let rows: Vec<PatientRow> = ledger.iter().map(PatientRow::from).collect();
        self.guarded(|w| w.write_patients(&rows));
        self.guarded(|w| w.finish());
    }
}
