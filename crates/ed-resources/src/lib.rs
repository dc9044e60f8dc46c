//! `ed-resources`: the two scarce pools of the department.
//!
//! A [`ResourcePool`] is a fixed-size `Vec<Resource>`.  A resource is either
//! available or busy until a scheduled `free_at` minute; release happens by
//! time alone ([`ResourcePool::reclaim_expired`]), never by the patient.
//!
//! Pools are small (tens of slots), so every lookup is a linear scan.

pub mod pool;

#[cfg(test)]
mod tests;

pub use pool::{Resource, ResourceKind, ResourcePool};
