//! Travel direction vocabulary shared by cabs, requests, and reports.

use std::fmt;

/// The direction a cab is travelling, or a request is asking to travel.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    /// Not moving — an idle cab, or one parked out of service.
    #[default]
    Stopped,
}

impl Direction {
    /// `true` for either direction of travel.
    #[inline]
    pub fn is_moving(self) -> bool {
        !matches!(self, Direction::Stopped)
    }

    /// Single-character form used in the canonical report renderings.
    pub fn symbol(self) -> char {
        match self {
            Direction::Up      => '^',
            Direction::Down    => 'v',
            Direction::Stopped => '-',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
