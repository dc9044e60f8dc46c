//! `ed-sim`: the event loop that drives the department.
//!
//! # Tick
//!
//! ```text
//! at clock minute `now`:
//!   ① Reclaim  doctors and beds whose free_at <= now become available.
//!   ② Admit    every scheduled arrival <= now (and < horizon) becomes a
//!              Patient in the ledger and the waiting queue; the next
//!              arrival is drawn at the rate in force at `now`.
//!   ③ Assign   the queue head gets one doctor and one bed, or nothing.
//!   ④ Stop     once now >= horizon and the queue is empty.
//!   ⑤ Advance  to the next minute at which anything can change
//!              (one minute at a time under `AdvancePolicy::Step`).
//! ```
//!
//! The assignment policy is greedy and head-only: a waiting patient is never
//! served ahead of the head, and the head waits until a doctor and a bed are
//! free at the same minute.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ed_core::SimConfig;
//! use ed_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig { seed: Some(42), ..SimConfig::default() })
//!     .build()?;
//! let summary = sim.run(&mut NoopObserver)?;
//! println!("{summary}");
//! ```

pub mod assign;
pub mod builder;
pub mod error;
pub mod metrics;
pub mod observer;
pub mod sim;
pub mod summary;

#[cfg(test)]
mod tests;

pub use assign::{assign_head, Assignment};
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use metrics::{Metrics, SeverityTally};
pub use observer::{NoopObserver, SimObserver, TickSnapshot};
pub use sim::Sim;
pub use summary::{SeveritySummary, SimSummary};
