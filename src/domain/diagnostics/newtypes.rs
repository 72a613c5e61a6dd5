// SPDX-License-Identifier: MPL-2.0
//! Diagnostics newtypes.

// =============================================================================
// History Capacity Bounds
// =============================================================================

/// History capacity bounds (16 to 4096 events).
pub mod history_capacity_bounds {
    /// Minimum history capacity.
    pub const MIN: usize = 16;
    /// Maximum history capacity.
    pub const MAX: usize = 4096;
    /// Default history capacity.
    pub const DEFAULT: usize = 256;
}

// =============================================================================
// HistoryCapacity
// =============================================================================

/// Number of diagnostic events retained before the oldest are evicted.
///
/// Always within 16–4096 events.
///
/// # Example
///
/// ```
/// use iced_toaster::domain::diagnostics::HistoryCapacity;
///
/// assert_eq!(HistoryCapacity::new(300).value(), 300);
/// assert_eq!(HistoryCapacity::new(1).value(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryCapacity(usize);

impl HistoryCapacity {
    /// Creates a new history capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(history_capacity_bounds::MIN, history_capacity_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for HistoryCapacity {
    fn default() -> Self {
        Self(history_capacity_bounds::DEFAULT)
    }
}
