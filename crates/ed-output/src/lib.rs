//! `ed-output`: run output writers for the emergency department simulator.
//!
//! Two backends are provided behind Cargo features:
//!
//! | Feature   | Backend     | Files created                           |
//! |-----------|-------------|-----------------------------------------|
//! | *(none)*  | CSV         | `patients.csv`, `tick_summaries.csv`    |
//! | `sqlite`  | SQLite      | `output.db`                             |
//!
//! All backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `ed_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ed_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{PatientRow, TickSummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
