//! SQLite backend (feature `sqlite`): one `output.db` with a `patients` table
//! and a `tick_summaries` table.  Reopening a directory replaces the previous
//! run's rows, as the CSV backend does.
//!
//! Tick rows are buffered inside one open transaction and committed by
//! `finish`, so a long run costs a single fsync.

use std::path::Path;

use rusqlite::{Connection, params};

use crate::writer::OutputWriter;
use crate::{OutputResult, PatientRow, TickSummaryRow};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS patients (
        patient_id        INTEGER PRIMARY KEY,
        arrival_minute    INTEGER NOT NULL,
        severity          INTEGER NOT NULL CHECK (severity BETWEEN 1 AND 5),
        treatment_minutes INTEGER NOT NULL,
        start_minute      INTEGER,
        wait_minutes      INTEGER
    );
    CREATE TABLE IF NOT EXISTS tick_summaries (
        minute       INTEGER PRIMARY KEY,
        admitted     INTEGER NOT NULL,
        queue_len    INTEGER NOT NULL,
        doctors_busy INTEGER NOT NULL,
        beds_busy    INTEGER NOT NULL
    );";

pub struct SqliteWriter {
    conn:    Connection,
    pending: bool,
}

impl SqliteWriter {
    /// Create (or reopen) `dir/output.db` with both tables present and empty.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;
        conn.execute_batch(SCHEMA)?;
        conn.execute_batch("DELETE FROM patients; DELETE FROM tick_summaries;")?;
        Ok(Self { conn, pending: false })
    }

    fn begin(&mut self) -> OutputResult<()> {
        if !self.pending {
            self.conn.execute_batch("BEGIN")?;
            self.pending = true;
        }
        Ok(())
    }
}

fn int(v: u64) -> i64 {
    v as i64
}

impl OutputWriter for SqliteWriter {
    fn write_patients(&mut self, rows: &[PatientRow]) -> OutputResult<()> {
        self.begin()?;
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO patients
                 (patient_id, arrival_minute, severity, treatment_minutes, start_minute, wait_minutes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )?;
        for row in rows {
            stmt.execute(params![
                row.patient_id,
                int(row.arrival_minute),
                row.severity,
                row.treatment_minutes,
                row.start_minute.map(int),
                row.wait_minutes.map(int),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.begin()?;
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO tick_summaries (minute, admitted, queue_len, doctors_busy, beds_busy)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;
        stmt.execute(params![
            int(row.minute),
            int(row.admitted),
            int(row.queue_len),
            int(row.doctors_busy),
            int(row.beds_busy),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.pending {
            self.conn.execute_batch("COMMIT")?;
            self.pending = false;
        }
        Ok(())
    }
}
