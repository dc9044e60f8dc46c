//! `ed-core`: foundational types for the emergency department simulator.
//!
//! This crate is a dependency of every other `ed-*` crate.  It intentionally
//! has no `ed-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `PatientId`, `ResourceId`                             |
//! | [`time`]        | `Minute`, `SimClock`                                  |
//! | [`patient`]     | `Severity`, `Patient`                                 |
//! | [`config`]      | `SimConfig`, `TreatmentPolicy`, `AdvancePolicy`       |
//! | [`rng`]         | `SimRng` (the single run-wide generator)              |
//! | [`error`]       | `EdError`, `EdResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required to load a `SimConfig` from JSON.                  |

pub mod config;
pub mod error;
pub mod ids;
pub mod patient;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{AdvancePolicy, SimConfig, TreatmentPolicy, HOURS_PER_DAY, SEVERITY_LEVELS};
pub use error::{EdError, EdResult};
pub use ids::{PatientId, ResourceId};
pub use patient::{Patient, Severity};
pub use rng::SimRng;
pub use time::{Minute, SimClock};
