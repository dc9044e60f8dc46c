//! Dense integer identifiers.
//!
//! Both id kinds double as positions: a `PatientId` is the patient's slot in
//! the run ledger and a `ResourceId` is the slot within its pool.  Lower ids
//! sort first, which is what the tie-breaks in the waiting queue and the pool
//! search rely on.

use std::fmt;

macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty) = $tag:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Id for position `n` of a dense arena.
            ///
            /// # Panics
            /// Panics in debug mode if `n` does not fit the id width.
            #[inline]
            pub fn slot(n: usize) -> Self {
                debug_assert!(n <= <$inner>::MAX as usize, "{} overflow", stringify!($name));
                $name(n as $inner)
            }

            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($tag, "{}"), self.0)
            }
        }
    };
}

typed_id! {
    /// Arrival-ordered patient identifier, starting at 0.
    pub struct PatientId(u32) = "P";
}

typed_id! {
    /// A doctor or bed within its own pool.
    pub struct ResourceId(u32) = "R";
}
