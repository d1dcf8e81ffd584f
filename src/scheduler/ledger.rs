//! Remaining-hour counters.
//!
//! Course metadata stays immutable; the hours still to be placed live here,
//! indexed like the course slice they were built from. Each generation run
//! builds its own ledgers, so caller-owned inputs are never mutated.

/// Index-addressed remaining hours for a slice of courses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourLedger {
    remaining: Vec<u32>,
}

impl HourLedger {
    /// Builds a ledger from initial hour counts.
    pub fn from_hours(hours: impl IntoIterator<Item = u32>) -> Self {
        Self {
            remaining: hours.into_iter().collect(),
        }
    }

    /// Hours left for entry `index` (0 if out of range).
    #[inline]
    pub fn remaining(&self, index: usize) -> u32 {
        self.remaining.get(index).copied().unwrap_or(0)
    }

    /// Whether entry `index` still needs at least one hour.
    #[inline]
    pub fn has_remaining(&self, index: usize) -> bool {
        self.remaining(index) > 0
    }

    /// Removes `hours` from entry `index`, saturating at zero.
    pub fn consume(&mut self, index: usize, hours: u32) {
        if let Some(r) = self.remaining.get_mut(index) {
            *r = r.saturating_sub(hours);
        }
    }

    /// Indices of entries with hours left, in order.
    pub fn pending(&self) -> Vec<usize> {
        self.remaining
            .iter()
            .enumerate()
            .filter(|(_, &h)| h > 0)
            .map(|(i, _)| i)
            .collect()
    }

    /// Sum of all remaining hours.
    pub fn total(&self) -> u32 {
        self.remaining.iter().sum()
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }
}
