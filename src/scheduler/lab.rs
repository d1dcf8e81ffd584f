//! Per-batch lab block scheduling.
//!
//! # Algorithm
//!
//! Every batch gets its own copy of every lab's hours; batches never share
//! progress. For each batch and lab, while at least two hours remain:
//!
//! 1. Shuffle the days.
//! 2. For each day, take the least-loaded eligible faculty; skip the day if
//!    they are at the lab cap.
//! 3. Scan start slots `1..=6` for a two-slot block where neither slot is
//!    lunch, the block does not touch lunch from the morning side, the batch
//!    cells hold no lecture and no lab, and the whole-class cells are empty
//!    or already lab markers.
//! 4. Place the first qualifying block, record two lab hours, and move on to
//!    the next block.
//!
//! A block that fits on no day ends scheduling for that lab copy. An odd
//! final hour is never placed.

use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{is_lunch, Channel, Day, Lab, Session, TimetableGrid, LUNCH_SLOT, SLOTS_PER_DAY};

use super::{FacultyWorkload, HourLedger};

/// Slots in one lab block.
pub const LAB_BLOCK_HOURS: u32 = 2;

/// Whether a two-slot lab block for `batch` can start at `start`.
pub fn can_hold_lab_block(grid: &TimetableGrid, day: Day, start: usize, batch: usize) -> bool {
    let end = start + 1;
    if end >= SLOTS_PER_DAY {
        return false;
    }
    if start < LUNCH_SLOT && end >= LUNCH_SLOT {
        return false;
    }

    (start..=end).all(|slot| {
        if is_lunch(slot) {
            return false;
        }
        let batch_free = grid
            .get(day, slot, Channel::Batch(batch))
            .is_some_and(|cell| !cell.is_theory() && !cell.is_lab());
        let whole_class_free = grid
            .get(day, slot, Channel::WholeClass)
            .is_some_and(|cell| cell.is_empty() || cell.is_lab_marker());
        batch_free && whole_class_free
    })
}

/// First start slot for a lab block on `day`, scanning from slot 1.
pub fn find_lab_block(grid: &TimetableGrid, day: Day, batch: usize) -> Option<usize> {
    (1..SLOTS_PER_DAY - 1).find(|&start| can_hold_lab_block(grid, day, start, batch))
}

/// Places lab blocks and owns one remaining-hour ledger per batch.
#[derive(Debug, Clone)]
pub struct LabScheduler<'a> {
    labs: &'a [Lab],
    ledgers: Vec<HourLedger>,
}

impl<'a> LabScheduler<'a> {
    /// Creates a scheduler with every lab's full hours pending for each of
    /// `num_batches` batches.
    pub fn new(labs: &'a [Lab], num_batches: usize) -> Self {
        let ledgers = (0..num_batches)
            .map(|_| HourLedger::from_hours(labs.iter().map(|l| l.hours)))
            .collect();
        Self { labs, ledgers }
    }

    /// Hours still to place for `batch` (1-based), indexed like the lab slice.
    pub fn ledger(&self, batch: usize) -> Option<&HourLedger> {
        batch.checked_sub(1).and_then(|i| self.ledgers.get(i))
    }

    /// Schedules every batch in order. Returns the number of blocks placed.
    pub fn schedule_all<R: Rng>(
        &mut self,
        grid: &mut TimetableGrid,
        workload: &mut FacultyWorkload,
        rng: &mut R,
    ) -> usize {
        (1..=self.ledgers.len())
            .map(|batch| self.schedule_batch(batch, grid, workload, rng))
            .sum()
    }

    /// Schedules all labs of one batch (1-based). Returns the number of
    /// blocks placed.
    pub fn schedule_batch<R: Rng>(
        &mut self,
        batch: usize,
        grid: &mut TimetableGrid,
        workload: &mut FacultyWorkload,
        rng: &mut R,
    ) -> usize {
        let labs = self.labs;
        let Some(ledger) = batch.checked_sub(1).and_then(|i| self.ledgers.get_mut(i)) else {
            return 0;
        };
        let mut placed = 0;

        for (index, lab) in labs.iter().enumerate() {
            while ledger.remaining(index) >= LAB_BLOCK_HOURS {
                let mut days = Day::ALL;
                days.shuffle(rng);

                let block = days.into_iter().find_map(|day| {
                    let faculty = workload.pick_faculty(&lab.faculty, rng)?;
                    if !workload.can_take_lab(day, faculty) {
                        return None;
                    }
                    find_lab_block(grid, day, batch).map(|start| (day, start, faculty))
                });
                let Some((day, start, faculty)) = block else {
                    break;
                };

                trace!(
                    "lab {} -> batch_{batch} {day} slots {start}-{} ({faculty})",
                    lab.name,
                    start + 1
                );
                let session = Session::new(&lab.name, faculty, &lab.room);
                grid.assign_batch_lab(day, start, batch, session.clone());
                grid.assign_batch_lab(day, start + 1, batch, session);
                workload.record_lab(day, faculty, LAB_BLOCK_HOURS);
                ledger.consume(index, LAB_BLOCK_HOURS);
                placed += 1;
            }
        }

        debug!(
            "batch_{batch}: placed {placed} lab blocks, {} hours left",
            ledger.total()
        );
        placed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SlotAssignment;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn physics_lab(hours: u32) -> Lab {
        Lab::new("Physics Lab", hours, "R2").with_faculty("F2")
    }

    fn lab_slots(grid: &TimetableGrid, batch: usize) -> Vec<(Day, usize)> {
        Day::ALL
            .iter()
            .flat_map(|&day| (0..SLOTS_PER_DAY).map(move |slot| (day, slot)))
            .filter(|&(day, slot)| {
                grid.get(day, slot, Channel::Batch(batch))
                    .is_some_and(SlotAssignment::is_lab)
            })
            .collect()
    }

    #[test]
    fn test_block_never_touches_lunch() {
        let grid = TimetableGrid::new(1);
        // 1-2 is fine, 2-3 and 3-4 hit lunch, 4-5 is fine, 7 has no successor.
        assert!(can_hold_lab_block(&grid, Day::Monday, 1, 1));
        assert!(!can_hold_lab_block(&grid, Day::Monday, 2, 1));
        assert!(!can_hold_lab_block(&grid, Day::Monday, 3, 1));
        assert!(can_hold_lab_block(&grid, Day::Monday, 4, 1));
        assert!(can_hold_lab_block(&grid, Day::Monday, 6, 1));
        assert!(!can_hold_lab_block(&grid, Day::Monday, 7, 1));
    }

    #[test]
    fn test_block_rejects_lectures_and_own_labs() {
        let mut grid = TimetableGrid::new(2);
        grid.assign_whole_class(Day::Monday, 2, Session::new("Math", "F1", "R1"));
        assert!(!can_hold_lab_block(&grid, Day::Monday, 1, 1));

        grid.assign_batch_lab(Day::Monday, 5, 1, Session::new("Chem Lab", "F3", "L1"));
        assert!(!can_hold_lab_block(&grid, Day::Monday, 4, 1));
        // Batch 2 may run alongside batch 1's lab.
        assert!(can_hold_lab_block(&grid, Day::Monday, 4, 2));
        // Unknown batch.
        assert!(!can_hold_lab_block(&grid, Day::Monday, 4, 3));
    }

    #[test]
    fn test_find_lab_block_scans_from_slot_one() {
        let mut grid = TimetableGrid::new(1);
        assert_eq!(find_lab_block(&grid, Day::Monday, 1), Some(1));

        grid.assign_whole_class(Day::Monday, 1, Session::new("Math", "F1", "R1"));
        assert_eq!(find_lab_block(&grid, Day::Monday, 1), Some(4));
    }

    #[test]
    fn test_each_batch_gets_full_hours() {
        let labs = vec![physics_lab(4)];
        let mut grid = TimetableGrid::new(2);
        let mut workload = FacultyWorkload::new();
        let mut rng = StdRng::seed_from_u64(8);

        let mut scheduler = LabScheduler::new(&labs, 2);
        let blocks = scheduler.schedule_all(&mut grid, &mut workload, &mut rng);

        assert_eq!(blocks, 4);
        for batch in 1..=2 {
            assert_eq!(scheduler.ledger(batch).unwrap().remaining(0), 0);
            assert_eq!(lab_slots(&grid, batch).len(), 4);
        }
        for day in Day::ALL {
            assert!(workload.lab_hours(day, "F2") <= 4);
        }
    }

    #[test]
    fn test_blocks_are_contiguous_and_marked() {
        let labs = vec![physics_lab(6)];
        let mut grid = TimetableGrid::new(1);
        let mut workload = FacultyWorkload::new();
        let mut rng = StdRng::seed_from_u64(21);

        let mut scheduler = LabScheduler::new(&labs, 1);
        scheduler.schedule_all(&mut grid, &mut workload, &mut rng);

        let slots = lab_slots(&grid, 1);
        assert_eq!(slots.len(), 6);
        for chunk in slots.chunks(2) {
            let (day_a, a) = chunk[0];
            let (day_b, b) = chunk[1];
            assert_eq!(day_a, day_b);
            assert_eq!(b, a + 1);
            assert!(a > LUNCH_SLOT || b < LUNCH_SLOT);
            for slot in [a, b] {
                assert!(grid.get(day_a, slot, Channel::WholeClass).unwrap().is_lab_marker());
            }
        }
    }

    #[test]
    fn test_odd_hour_left_over() {
        let labs = vec![physics_lab(3)];
        let mut grid = TimetableGrid::new(1);
        let mut workload = FacultyWorkload::new();
        let mut rng = StdRng::seed_from_u64(0);

        let mut scheduler = LabScheduler::new(&labs, 1);
        assert_eq!(scheduler.schedule_all(&mut grid, &mut workload, &mut rng), 1);
        assert_eq!(scheduler.ledger(1).unwrap().remaining(0), 1);
    }

    #[test]
    fn test_lab_cap_limits_blocks() {
        // A single supervisor can run at most 2 blocks per day: 10 per week.
        let labs = vec![physics_lab(30)];
        let mut grid = TimetableGrid::new(1);
        let mut workload = FacultyWorkload::new();
        let mut rng = StdRng::seed_from_u64(13);

        let mut scheduler = LabScheduler::new(&labs, 1);
        let blocks = scheduler.schedule_all(&mut grid, &mut workload, &mut rng);

        assert_eq!(blocks, 10);
        assert_eq!(scheduler.ledger(1).unwrap().remaining(0), 10);
        for day in Day::ALL {
            assert_eq!(workload.lab_hours(day, "F2"), 4);
        }
    }
}
