//! Per-cab service lifecycle.

use std::fmt;

/// Where a cab sits in its service lifecycle.
///
/// The path is one-way: `InService → Returning → OutOfService`.  A
/// `Returning` cab has been told to withdraw — it finishes any in-progress
/// door cycle, descends to the ground floor, and parks there permanently as
/// `OutOfService`.  Only a system-level restart re-admits a cab to
/// `InService`; no cab-level operation does.
///
/// Cabs are constructed `OutOfService` and enter service with the first
/// system start.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ServiceState {
    InService,
    /// Withdrawn and heading to the ground floor; no longer eligible for
    /// request allocation.
    Returning,
    #[default]
    OutOfService,
}

impl ServiceState {
    /// `true` only for `InService` — the eligibility test used by request
    /// allocation.
    #[inline]
    pub fn is_in_service(self) -> bool {
        matches!(self, ServiceState::InService)
    }

    /// Human-readable label for diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceState::InService    => "in service",
            ServiceState::Returning    => "returning",
            ServiceState::OutOfService => "out of service",
        }
    }
}

impl fmt::Display for ServiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
