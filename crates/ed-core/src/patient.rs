//! Patient records and medical severity.

use std::fmt;

use crate::{EdError, Minute, PatientId};

// ── Severity ──────────────────────────────────────────────────────────────────

/// Triage severity, 1 (least urgent) through 5 (most urgent).
///
/// `Ord` follows urgency: `Severity(5) > Severity(1)`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Severity(u8);

impl Severity {
    pub const MIN: Severity = Severity(1);
    pub const MAX: Severity = Severity(5);

    /// Checked constructor.
    pub fn new(level: u8) -> Option<Severity> {
        (1..=5).contains(&level).then_some(Severity(level))
    }

    #[inline]
    pub fn level(self) -> u8 {
        self.0
    }

    /// Zero-based index into per-severity tables (`Severity(1)` → 0).
    #[inline]
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// All five levels in ascending urgency.
    pub fn all() -> impl Iterator<Item = Severity> {
        (1..=5).map(Severity)
    }
}

impl TryFrom<u8> for Severity {
    type Error = EdError;
    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Severity::new(level).ok_or(EdError::InvalidSeverity(level))
    }
}

impl From<Severity> for u8 {
    fn from(s: Severity) -> u8 {
        s.0
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

// ── Patient ───────────────────────────────────────────────────────────────────

/// One emergency department visit.
///
/// Created at arrival with no treatment start; written exactly once, when a
/// doctor and a bed are assigned.  Never removed from the ledger.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Patient {
    pub id:                 PatientId,
    pub arrival:            Minute,
    pub severity:           Severity,
    /// Time a doctor and a bed are held once treatment starts.  Always > 0.
    pub treatment_minutes:  u32,
    /// `None` until the patient is assigned.
    pub treatment_start:    Option<Minute>,
}

impl Patient {
    pub fn new(id: PatientId, arrival: Minute, severity: Severity, treatment_minutes: u32) -> Self {
        Self {
            id,
            arrival,
            severity,
            treatment_minutes,
            treatment_start: None,
        }
    }

    #[inline]
    pub fn is_treated(&self) -> bool {
        self.treatment_start.is_some()
    }

    /// Minutes between arrival and treatment start, once treated.
    pub fn wait_minutes(&self) -> Option<u64> {
        self.treatment_start.map(|start| start.since(self.arrival))
    }

    /// Minute at which this patient's doctor and bed are released.
    pub fn treatment_end(&self) -> Option<Minute> {
        self.treatment_start
            .map(|start| start + self.treatment_minutes as u64)
    }

    /// Record the start of treatment.
    ///
    /// # Panics
    /// Panics in debug mode if the patient was already treated or `at`
    /// precedes arrival (which would make the wait negative).
    pub fn begin_treatment(&mut self, at: Minute) {
        debug_assert!(self.treatment_start.is_none(), "{} assigned twice", self.id);
        debug_assert!(at >= self.arrival, "{} treated before arrival", self.id);
        self.treatment_start = Some(at);
    }
}
