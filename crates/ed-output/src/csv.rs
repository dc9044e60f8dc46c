//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `patients.csv`: the full patient ledger; untreated patients have empty
//!   `start_minute` and `wait_minutes` cells
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{OutputResult, PatientRow, TickSummaryRow};
use crate::writer::OutputWriter;

/// Writes run output to two CSV files.
pub struct CsvWriter {
    patients:  Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut patients = Writer::from_path(dir.join("patients.csv"))?;
        patients.write_record([
            "patient_id",
            "arrival_minute",
            "severity",
            "treatment_minutes",
            "start_minute",
            "wait_minutes",
        ])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["minute", "admitted", "queue_len", "doctors_busy", "beds_busy"])?;

        Ok(Self {
            patients,
            summaries,
            finished: false,
        })
    }
}

fn optional(v: Option<u64>) -> String {
    v.map(|n| n.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_patients(&mut self, rows: &[PatientRow]) -> OutputResult<()> {
        for row in rows {
            self.patients.write_record(&[
                row.patient_id.to_string(),
                row.arrival_minute.to_string(),
                row.severity.to_string(),
                row.treatment_minutes.to_string(),
                optional(row.start_minute),
                optional(row.wait_minutes),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.minute.to_string(),
            row.admitted.to_string(),
            row.queue_len.to_string(),
            row.doctors_busy.to_string(),
            row.beds_busy.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.patients.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
