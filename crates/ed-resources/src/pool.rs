//! `Resource` slots and the `ResourcePool` that owns them.

use std::fmt;

use ed_core::{Minute, ResourceId};

// ── ResourceKind ──────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResourceKind {
    Doctor,
    Bed,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ResourceKind::Doctor => "doctor",
            ResourceKind::Bed    => "bed",
        })
    }
}

// ── Resource ──────────────────────────────────────────────────────────────────

/// One doctor or bed.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resource {
    pub available: bool,
    /// When the current (or last) treatment interval ends.
    pub free_at:   Minute,
}

impl Default for Resource {
    fn default() -> Self {
        Self { available: true, free_at: Minute::ZERO }
    }
}

impl Resource {
    /// Free for a treatment starting at `at`.
    #[inline]
    pub fn is_free_at(&self, at: Minute) -> bool {
        self.available && self.free_at <= at
    }
}

// ── ResourcePool ──────────────────────────────────────────────────────────────

/// Fixed-capacity pool of one [`ResourceKind`].
#[derive(Clone, Debug)]
pub struct ResourcePool {
    kind:  ResourceKind,
    slots: Vec<Resource>,
}

impl ResourcePool {
    /// `capacity` resources, all available at minute 0.
    pub fn new(kind: ResourceKind, capacity: u32) -> Self {
        Self {
            kind,
            slots: vec![Resource::default(); capacity as usize],
        }
    }

    #[inline]
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, id: ResourceId) -> Option<&Resource> {
        self.slots.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = (ResourceId, &Resource)> {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, r)| (ResourceId::slot(i), r))
    }

    /// Mark every busy resource whose `free_at <= now` available again.
    ///
    /// Returns how many were released.  Call before any assignment attempt
    /// in the same tick.
    pub fn reclaim_expired(&mut self, now: Minute) -> usize {
        let mut released = 0;
        for slot in self.slots.iter_mut().filter(|s| !s.available && s.free_at <= now) {
            slot.available = true;
            released += 1;
        }
        released
    }

    /// Any resource free for a treatment starting at `at` (lowest id wins).
    pub fn find_available(&self, at: Minute) -> Option<ResourceId> {
        self.slots
            .iter()
            .position(|s| s.is_free_at(at))
            .map(|i| ResourceId::slot(i))
    }

    /// Hold `id` from `at` for `minutes`.
    ///
    /// # Panics
    /// Assigning a resource that is not free at `at` is a logic error:
    /// panics in debug builds.  Panics on an out-of-range `id`.
    pub fn assign(&mut self, id: ResourceId, at: Minute, minutes: u32) {
        let slot = &mut self.slots[id.index()];
        debug_assert!(slot.is_free_at(at), "{} {id} is busy until {}", self.kind, slot.free_at);
        slot.available = false;
        slot.free_at = at + minutes as u64;
    }

    /// Number of resources currently held.
    pub fn busy_count(&self) -> usize {
        self.slots.iter().filter(|s| !s.available).count()
    }

    /// Earliest release strictly after `now`, if any resource is busy.
    pub fn next_release_after(&self, now: Minute) -> Option<Minute> {
        self.slots
            .iter()
            .filter(|s| !s.available && s.free_at > now)
            .map(|s| s.free_at)
            .min()
    }
}
