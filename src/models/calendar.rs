//! Weekly calendar model.
//!
//! A fixed teaching week: five days, eight one-hour slots per day, and one
//! slot reserved for lunch. The week is not configurable at runtime; slot
//! identity is its index within the day.
//!
//! # Layout
//!
//! | Index | Interval |
//! |-------|----------|
//! | 0 | 9:00-10:00 (day-opening slot) |
//! | 1 | 10:00-11:00 |
//! | 2 | 11:00-12:00 |
//! | 3 | 12:00-1:00 (lunch) |
//! | 4 | 1:00-2:00 |
//! | 5 | 2:00-3:00 |
//! | 6 | 3:00-4:00 |
//! | 7 | 4:00-5:00 |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of teaching days in the week.
pub const DAY_COUNT: usize = 5;

/// Number of slots per day.
pub const SLOTS_PER_DAY: usize = 8;

/// Slot labels, in order.
pub const TIME_SLOTS: [&str; SLOTS_PER_DAY] = [
    "9:00-10:00",
    "10:00-11:00",
    "11:00-12:00",
    "12:00-1:00",
    "1:00-2:00",
    "2:00-3:00",
    "3:00-4:00",
    "4:00-5:00",
];

/// Index of the lunch slot.
pub const LUNCH_SLOT: usize = 3;

/// Whether a slot index is the lunch slot.
#[inline]
pub fn is_lunch(slot: usize) -> bool {
    slot == LUNCH_SLOT
}

/// A teaching day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    /// All days in week order.
    pub const ALL: [Day; DAY_COUNT] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    /// Position within the week (Monday = 0).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Day name as it appears in serialized output.
    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A time slot within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    /// Slot index (0-based).
    pub index: usize,
    /// Human-readable interval, e.g. `"9:00-10:00"`.
    pub label: &'static str,
}

impl TimeSlot {
    /// Returns the slot at `index`, or `None` if out of range.
    pub fn at(index: usize) -> Option<Self> {
        TIME_SLOTS.get(index).map(|&label| Self { index, label })
    }

    /// Whether this is the lunch slot.
    #[inline]
    pub fn is_lunch(&self) -> bool {
        is_lunch(self.index)
    }

    /// All slots of a day in order.
    pub fn all() -> impl Iterator<Item = TimeSlot> {
        TIME_SLOTS
            .iter()
            .enumerate()
            .map(|(index, &label)| TimeSlot { index, label })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_shape() {
        assert_eq!(Day::ALL.len(), 5);
        assert_eq!(TimeSlot::all().count(), 8);
        assert_eq!(Day::Monday.index(), 0);
        assert_eq!(Day::Friday.index(), 4);
        assert!(Day::Monday < Day::Friday);
    }

    #[test]
    fn test_single_lunch_slot() {
        let lunches: Vec<_> = TimeSlot::all().filter(|s| s.is_lunch()).collect();
        assert_eq!(lunches.len(), 1);
        assert_eq!(lunches[0].index, LUNCH_SLOT);
        assert_eq!(lunches[0].label, "12:00-1:00");
        assert!(!is_lunch(0));
        assert!(is_lunch(3));
    }

    #[test]
    fn test_slot_lookup() {
        assert_eq!(TimeSlot::at(0).map(|s| s.label), Some("9:00-10:00"));
        assert!(TimeSlot::at(SLOTS_PER_DAY).is_none());
    }

    #[test]
    fn test_day_serializes_as_name() {
        let json = serde_json::to_string(&Day::Wednesday).unwrap();
        assert_eq!(json, "\"Wednesday\"");
        assert_eq!(Day::Thursday.to_string(), "Thursday");
    }
}
