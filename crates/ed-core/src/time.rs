//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically non-decreasing `Minute` counter measured from the
//! start of the run.  Using an integer minute as the canonical unit keeps all
//! schedule arithmetic exact (no floating-point drift) and comparisons O(1).
//!
//! `SimClock` pairs the current minute with the configured horizon, the
//! point after which no new patients arrive.  The clock may run past the
//! horizon while the waiting room drains.

use std::fmt;

// ── Minute ────────────────────────────────────────────────────────────────────

/// An absolute simulated minute since the start of the run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Minute(pub u64);

impl Minute {
    pub const ZERO: Minute = Minute(0);

    /// Sentinel for an event that can never happen.
    pub const NEVER: Minute = Minute(u64::MAX);

    /// Return the minute `n` steps after `self`, saturating at [`NEVER`][Self::NEVER].
    #[inline]
    pub fn offset(self, n: u64) -> Minute {
        Minute(self.0.saturating_add(n))
    }

    /// Minutes elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Minute) -> u64 {
        self.0 - earlier.0
    }

    /// Hours elapsed since minute 0 (not wrapped).
    #[inline]
    pub fn hour(self) -> u64 {
        self.0 / 60
    }

    /// Hour of the simulated day, `0..24`.
    #[inline]
    pub fn hour_of_day(self) -> usize {
        (self.hour() % 24) as usize
    }
}

impl std::ops::Add<u64> for Minute {
    type Output = Minute;
    #[inline]
    fn add(self, rhs: u64) -> Minute {
        self.offset(rhs)
    }
}

impl std::ops::Sub for Minute {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Minute) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Minute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The run's single clock.  Cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The current minute, moved forward by `step` or `advance_to`.
    pub now: Minute,
    /// Arrivals stop at this minute (exclusive).
    pub horizon: Minute,
}

impl SimClock {
    pub fn new(horizon: Minute) -> Self {
        Self { now: Minute::ZERO, horizon }
    }

    /// Advance the clock by one minute.
    #[inline]
    pub fn step(&mut self) {
        self.now = self.now + 1;
    }

    /// Move the clock forward to `to`.
    ///
    /// # Panics
    /// Panics in debug mode if `to` is earlier than the current minute.
    #[inline]
    pub fn advance_to(&mut self, to: Minute) {
        debug_assert!(to >= self.now, "clock moved backwards: {} -> {}", self.now, to);
        self.now = to;
    }

    /// `true` once the clock has reached the horizon.
    #[inline]
    pub fn past_horizon(&self) -> bool {
        self.now >= self.horizon
    }

    /// Break the current minute into (day, hour, minute) components.
    pub fn elapsed_dhm(&self) -> (u64, u32, u32) {
        let total = self.now.0;
        let days = total / 1_440;
        let hours = ((total % 1_440) / 60) as u32;
        let minutes = (total % 60) as u32;
        (days, hours, minutes)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (d, h, m) = self.elapsed_dhm();
        write!(f, "{} (day {} {:02}:{:02})", self.now, d, h, m)
    }
}
