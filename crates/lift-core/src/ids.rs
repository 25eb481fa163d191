//! Strongly typed floor and elevator identifiers.
//!
//! Both types are `Copy + Ord + Hash` so they can be used as map keys and
//! sorted collection elements without ceremony.  The inner integer is `pub`
//! to allow direct indexing into per-floor `Vec`s via `id.0 as usize`, but
//! callers should prefer the `.index()` helpers for clarity.

use std::fmt;

// ── Floor ─────────────────────────────────────────────────────────────────────

/// A floor number, counted from the ground floor (0) upward.
///
/// `u16` bounds a building at 65,536 floors — construction validates the
/// floor count against [`Floor::MAX_FLOOR_COUNT`] so arithmetic never wraps.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor(pub u16);

impl Floor {
    /// The ground floor — where cabs start, and where they return to park.
    pub const GROUND: Floor = Floor(0);

    /// The largest floor count representable by this index type.
    pub const MAX_FLOOR_COUNT: usize = u16::MAX as usize + 1;

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn is_ground(self) -> bool {
        self.0 == 0
    }

    /// The floor one above.
    #[inline]
    pub fn up(self) -> Floor {
        Floor(self.0 + 1)
    }

    /// The floor one below.
    ///
    /// # Panics
    /// Panics in debug mode when called on the ground floor.
    #[inline]
    pub fn down(self) -> Floor {
        Floor(self.0 - 1)
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Floor> for usize {
    #[inline(always)]
    fn from(floor: Floor) -> usize {
        floor.0 as usize
    }
}

impl TryFrom<usize> for Floor {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<Floor, Self::Error> {
        u16::try_from(n).map(Floor)
    }
}

// ── ElevatorId ────────────────────────────────────────────────────────────────

/// Index of a cab in the building's elevator bank.
///
/// Assigned densely from 0 at construction and stable for the life of the
/// building — cabs are never destroyed during a run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElevatorId(pub u32);

impl ElevatorId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ElevatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElevatorId({})", self.0)
    }
}

impl From<ElevatorId> for usize {
    #[inline(always)]
    fn from(id: ElevatorId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for ElevatorId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<ElevatorId, Self::Error> {
        u32::try_from(n).map(ElevatorId)
    }
}
