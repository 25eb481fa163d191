//! Door state for a single elevator cab.

/// Door position, carrying the auto-close countdown while open.
///
/// A cab with an open door does not move.  The countdown is decremented once
/// per tick by the cab's state machine; the door closes on the tick the
/// countdown expires.  A cab parked out of service at the ground floor keeps
/// its door open with a spent countdown — it never closes again.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DoorState {
    #[default]
    Closed,
    /// Open, with the number of ticks left before it closes.
    Open(u32),
}

impl DoorState {
    #[inline]
    pub fn is_closed(self) -> bool {
        matches!(self, DoorState::Closed)
    }

    #[inline]
    pub fn is_open(self) -> bool {
        !self.is_closed()
    }
}
