//! `ed-stochastic`: the random inputs of the department model.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`arrival`]     | `next_arrival`, `ArrivalProfile` (hour-of-day demand)     |
//! | [`severity`]    | `SeverityModel` (weighted categorical over 1..=5)         |
//! | [`treatment`]   | `TreatmentModel` (severity-dependent uniform duration)    |
//! | [`generators`]  | `Generators`: all three bundled from a `SimConfig`       |
//! | [`error`]       | `StochasticError`, `StochasticResult<T>`                  |
//!
//! Every draw takes the run's `&mut SimRng` explicitly; nothing here owns or
//! reseeds a generator.

pub mod arrival;
pub mod error;
pub mod generators;
pub mod severity;
pub mod treatment;


pub use arrival::{next_arrival, ArrivalProfile};
pub use error::{StochasticError, StochasticResult};
pub use generators::Generators;
pub use severity::SeverityModel;
pub use treatment::TreatmentModel;
