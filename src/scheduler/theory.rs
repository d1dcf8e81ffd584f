//! Whole-class lecture scheduling.
//!
//! # Algorithm
//!
//! Lectures are always placed on the whole-class channel with a
//! synchronized copy on every batch channel.
//!
//! 1. **Day opening** ([`TheoryScheduler::open_days`]): for each day, a
//!    random subject not yet used in this pass takes slot 0. The used set
//!    resets once every subject has opened a day.
//! 2. **Backfill** (start of [`TheoryScheduler::fill_remaining`]): days whose
//!    slot 0 is still empty (e.g. the opening pick hit a cap) take the first
//!    pending subject that can be placed.
//! 3. **Sweep**: pending subjects are shuffled and each is tried day by day
//!    in the slot chosen by [`SlotSelector::find_best_slot`]. After every
//!    placement the round restarts; a round that places nothing ends the
//!    sweep. Hours still left are reported, not retried.
//!
//! Faculty is the least-loaded eligible member; the room is a random one
//! that seats the subject's students.

use log::{debug, trace};
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use std::collections::HashSet;

use crate::models::{Channel, Day, Room, Session, Subject, TimetableGrid};

use super::{FacultyWorkload, HourLedger, SlotSelector};

const OPENING_SLOT: usize = 0;

/// Places subject lectures and owns their remaining-hour counters.
#[derive(Debug, Clone)]
pub struct TheoryScheduler<'a> {
    subjects: &'a [Subject],
    rooms: &'a [Room],
    ledger: HourLedger,
}

impl<'a> TheoryScheduler<'a> {
    /// Creates a scheduler with every subject's full hours pending.
    pub fn new(subjects: &'a [Subject], rooms: &'a [Room]) -> Self {
        Self {
            subjects,
            rooms,
            ledger: HourLedger::from_hours(subjects.iter().map(|s| s.hours)),
        }
    }

    /// Hours still to place, indexed like the subject slice.
    #[inline]
    pub fn ledger(&self) -> &HourLedger {
        &self.ledger
    }

    /// Fills slot 0 of each day with a lecture.
    ///
    /// Returns the number of lectures placed.
    pub fn open_days<R: Rng>(
        &mut self,
        grid: &mut TimetableGrid,
        workload: &mut FacultyWorkload,
        rng: &mut R,
    ) -> usize {
        let mut used: HashSet<usize> = HashSet::new();
        let mut placed = 0;

        for day in Day::ALL {
            let pending = self.ledger.pending();
            let mut candidates: Vec<usize> = pending
                .iter()
                .copied()
                .filter(|i| !used.contains(i))
                .collect();
            if candidates.is_empty() {
                used.clear();
                candidates = pending;
            }

            let Some(&subject) = candidates.choose(rng) else {
                continue;
            };
            if self.place(subject, day, OPENING_SLOT, grid, workload, rng) {
                used.insert(subject);
                placed += 1;
            }
        }

        debug!("day-opening pass placed {placed} lectures");
        placed
    }

    /// Backfills empty openings, then sweeps the remaining hours into the
    /// best free slots.
    ///
    /// Returns the number of lectures placed.
    pub fn fill_remaining<R: Rng>(
        &mut self,
        grid: &mut TimetableGrid,
        workload: &mut FacultyWorkload,
        rng: &mut R,
    ) -> usize {
        let mut placed = 0;

        for day in Day::ALL {
            if !grid.is_available(day, OPENING_SLOT, Channel::WholeClass) {
                continue;
            }
            for subject in self.ledger.pending() {
                if self.place(subject, day, OPENING_SLOT, grid, workload, rng) {
                    placed += 1;
                    break;
                }
            }
        }

        loop {
            let mut pending = self.ledger.pending();
            if pending.is_empty() {
                break;
            }
            pending.shuffle(rng);

            let progressed = pending
                .into_iter()
                .any(|subject| self.place_in_best_slot(subject, grid, workload, rng));
            if !progressed {
                break;
            }
            placed += 1;
        }

        debug!(
            "theory sweep placed {placed} lectures, {} hours left",
            self.ledger.total()
        );
        placed
    }

    /// Tries each day in order and places `subject` in that day's best slot.
    fn place_in_best_slot<R: Rng>(
        &mut self,
        subject: usize,
        grid: &mut TimetableGrid,
        workload: &mut FacultyWorkload,
        rng: &mut R,
    ) -> bool {
        let subjects = self.subjects;
        let meta = &subjects[subject];

        for day in Day::ALL {
            let Some(faculty) = workload.pick_faculty(&meta.faculty, rng) else {
                continue;
            };
            if !workload.can_take_theory(day, faculty) {
                continue;
            }

            let selector = SlotSelector {
                grid: &*grid,
                subjects,
                ledger: &self.ledger,
                workload: &*workload,
                rooms: self.rooms,
            };
            let Some(slot) = selector.find_best_slot(day, subject, Channel::WholeClass) else {
                continue;
            };
            if !grid.are_all_batches_free(day, slot) {
                continue;
            }
            let Some(room) = self.pick_room(meta, rng) else {
                continue;
            };

            self.commit(subject, day, slot, faculty, room, grid, workload);
            return true;
        }
        false
    }

    /// Places `subject` at (day, slot) if a faculty under the cap and a
    /// large enough room exist.
    fn place<R: Rng>(
        &mut self,
        subject: usize,
        day: Day,
        slot: usize,
        grid: &mut TimetableGrid,
        workload: &mut FacultyWorkload,
        rng: &mut R,
    ) -> bool {
        let subjects = self.subjects;
        let meta = &subjects[subject];
        let Some(faculty) = workload.pick_faculty(&meta.faculty, rng) else {
            return false;
        };
        if !self.rooms.iter().any(|r| meta.fits_in(r)) || !workload.can_take_theory(day, faculty) {
            return false;
        }
        let Some(room) = self.pick_room(meta, rng) else {
            return false;
        };

        self.commit(subject, day, slot, faculty, room, grid, workload);
        true
    }

    fn pick_room<R: Rng>(&self, subject: &Subject, rng: &mut R) -> Option<&'a Room> {
        let rooms: &'a [Room] = self.rooms;
        let fitting: Vec<&'a Room> = rooms.iter().filter(|r| subject.fits_in(r)).collect();
        fitting.choose(rng).copied()
    }

    #[allow(clippy::too_many_arguments)]
    fn commit(
        &mut self,
        subject: usize,
        day: Day,
        slot: usize,
        faculty: &str,
        room: &Room,
        grid: &mut TimetableGrid,
        workload: &mut FacultyWorkload,
    ) {
        let name = &self.subjects[subject].name;
        trace!("lecture {name} -> {day} slot {slot} ({faculty}, {})", room.name);

        grid.assign_whole_class(day, slot, Session::new(name, faculty, &room.name));
        workload.record_theory(day, faculty);
        self.ledger.consume(subject, 1);
    }
}
