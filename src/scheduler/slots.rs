//! Slot availability and gap heuristics.
//!
//! # Slot selection
//!
//! [`SlotSelector::find_best_slot`] tries three tiers in order and returns
//! the first hit:
//! 1. A hole strictly between two filled slots ([`find_gap_slots`]).
//! 2. The first free slot (from index 1) next to a filled slot, unless it
//!    would repeat the same subject back-to-back while another subject could
//!    still be scheduled.
//! 3. The first free slot from index 1.
//!
//! Slot 0 is never returned; it belongs to the day-opening pass.
//! "Filled" means anything but empty: lunch breaks and lab markers count.

use crate::models::{Channel, Day, Room, Subject, TimetableGrid, SLOTS_PER_DAY};

use super::{FacultyWorkload, HourLedger};

const LAST_SLOT: usize = SLOTS_PER_DAY - 1;

/// Whether the slot just before or after `slot` holds a session of `subject`.
pub fn is_subject_consecutive(
    grid: &TimetableGrid,
    day: Day,
    slot: usize,
    subject: &str,
    channel: Channel,
) -> bool {
    let same_subject = |s: usize| {
        grid.get(day, s, channel)
            .and_then(|cell| cell.subject())
            .is_some_and(|name| name == subject)
    };

    (slot > 0 && same_subject(slot - 1)) || (slot < LAST_SLOT && same_subject(slot + 1))
}

/// Whether `slot` has a free predecessor and a filled successor.
///
/// Only interior slots can qualify.
pub fn has_gap(grid: &TimetableGrid, day: Day, slot: usize, channel: Channel) -> bool {
    if slot == 0 || slot >= LAST_SLOT {
        return false;
    }
    !grid.is_filled(day, slot - 1, channel) && grid.is_filled(day, slot + 1, channel)
}

/// Free interior slots sitting between two filled slots, in index order.
pub fn find_gap_slots(grid: &TimetableGrid, day: Day, channel: Channel) -> Vec<usize> {
    (1..LAST_SLOT)
        .filter(|&slot| {
            grid.is_available(day, slot, channel)
                && grid.is_filled(day, slot - 1, channel)
                && grid.is_filled(day, slot + 1, channel)
        })
        .collect()
}

/// Read-only view of the scheduling state used to pick lecture slots.
#[derive(Debug, Clone, Copy)]
pub struct SlotSelector<'a> {
    /// Placements so far.
    pub grid: &'a TimetableGrid,
    /// Subjects, indexed like `ledger`.
    pub subjects: &'a [Subject],
    /// Lecture hours still to place.
    pub ledger: &'a HourLedger,
    /// Faculty hours recorded so far.
    pub workload: &'a FacultyWorkload,
    /// Rooms available for lectures.
    pub rooms: &'a [Room],
}

impl<'a> SlotSelector<'a> {
    /// Whether any subject other than `current` could be placed on `day`:
    /// it has hours left, some eligible faculty is under the theory cap, and
    /// some room seats its students.
    pub fn can_schedule_other_subject(&self, day: Day, current: usize) -> bool {
        let current_name = self.subjects.get(current).map(|s| s.name.as_str());

        self.subjects.iter().enumerate().any(|(i, subject)| {
            self.ledger.has_remaining(i)
                && Some(subject.name.as_str()) != current_name
                && subject
                    .faculty
                    .iter()
                    .any(|f| self.workload.can_take_theory(day, f))
                && self.rooms.iter().any(|room| subject.fits_in(room))
        })
    }

    /// Best slot for `subject` on `day`, or `None` if no slot is free.
    pub fn find_best_slot(&self, day: Day, subject: usize, channel: Channel) -> Option<usize> {
        if let Some(&gap) = find_gap_slots(self.grid, day, channel).first() {
            return Some(gap);
        }

        let name = self.subjects.get(subject).map(|s| s.name.as_str())?;

        for slot in 1..SLOTS_PER_DAY {
            if !self.grid.is_available(day, slot, channel) {
                continue;
            }
            let adjacent = self.grid.is_filled(day, slot - 1, channel)
                || (slot < LAST_SLOT && self.grid.is_filled(day, slot + 1, channel));
            if !adjacent {
                continue;
            }
            if !is_subject_consecutive(self.grid, day, slot, name, channel)
                || !self.can_schedule_other_subject(day, subject)
            {
                return Some(slot);
            }
        }

        (1..SLOTS_PER_DAY).find(|&slot| self.grid.is_available(day, slot, channel))
    }
}
