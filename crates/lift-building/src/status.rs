//! Building-wide lifecycle status.

use std::fmt;

/// The lifecycle status of the whole elevator system.
///
/// Owned exclusively by the [`Building`][crate::Building]; there is no
/// process-wide instance, so independent simulations never interfere.
///
/// Requests are accepted only while `Running`.  `Stopping` means a stop has
/// been ordered and cabs are converging on the ground floor; the status
/// collapses to `OutOfService` once they all arrive.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SystemStatus {
    #[default]
    OutOfService,
    Running,
    Stopping,
}

impl SystemStatus {
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, SystemStatus::Running)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SystemStatus::OutOfService => "Out of Service",
            SystemStatus::Running      => "Running",
            SystemStatus::Stopping     => "Stopping",
        }
    }
}

impl fmt::Display for SystemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
