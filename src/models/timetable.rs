//! Timetable grid.
//!
//! Storage for one generation run: for every day and slot, one cell on the
//! whole-class channel plus one cell per batch channel.
//!
//! # Invariant
//! The lunch slot holds [`SlotAssignment::Break`] on every channel of every
//! day. It is written once by [`TimetableGrid::new`]; the assignment methods
//! never touch lunch cells.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::fmt;

use super::calendar::{is_lunch, Day, DAY_COUNT, LUNCH_SLOT, SLOTS_PER_DAY};
use super::{Session, SlotAssignment};

/// A schedule channel: the shared whole-class lane, or one batch's lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Channel {
    /// The lane shared by every batch.
    WholeClass,
    /// A batch lane, numbered from 1.
    Batch(usize),
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::WholeClass => f.write_str("whole_class"),
            Channel::Batch(n) => write!(f, "batch_{n}"),
        }
    }
}

impl Serialize for Channel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// All channels of one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRow {
    /// Whole-class cell.
    pub whole_class: SlotAssignment,
    /// Batch cells; index 0 is `batch_1`.
    pub batches: Vec<SlotAssignment>,
}

impl SlotRow {
    fn new(num_batches: usize) -> Self {
        Self {
            whole_class: SlotAssignment::Empty,
            batches: vec![SlotAssignment::Empty; num_batches],
        }
    }

    /// Cell for a channel, `None` if the batch does not exist.
    pub fn get(&self, channel: Channel) -> Option<&SlotAssignment> {
        match channel {
            Channel::WholeClass => Some(&self.whole_class),
            Channel::Batch(n) => n.checked_sub(1).and_then(|i| self.batches.get(i)),
        }
    }

    fn get_mut(&mut self, channel: Channel) -> Option<&mut SlotAssignment> {
        match channel {
            Channel::WholeClass => Some(&mut self.whole_class),
            Channel::Batch(n) => n.checked_sub(1).and_then(|i| self.batches.get_mut(i)),
        }
    }
}

impl Serialize for SlotRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1 + self.batches.len()))?;
        map.serialize_entry(&Channel::WholeClass, &self.whole_class)?;
        for (i, cell) in self.batches.iter().enumerate() {
            map.serialize_entry(&Channel::Batch(i + 1), cell)?;
        }
        map.end()
    }
}

/// Day × slot × channel assignment storage.
///
/// # Example
///
/// ```
/// use u_timetable::models::{Channel, Day, Session, TimetableGrid, LUNCH_SLOT};
///
/// let mut grid = TimetableGrid::new(2);
/// assert!(grid.get(Day::Monday, LUNCH_SLOT, Channel::Batch(2)).unwrap().is_filled());
///
/// grid.assign_whole_class(Day::Monday, 0, Session::new("Math", "F1", "R1"));
/// assert!(grid.get(Day::Monday, 0, Channel::Batch(1)).unwrap().is_synchronized());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimetableGrid {
    num_batches: usize,
    days: [Vec<SlotRow>; DAY_COUNT],
}

impl TimetableGrid {
    /// Creates an empty grid for `num_batches` batches with lunch reserved.
    pub fn new(num_batches: usize) -> Self {
        let mut days: [Vec<SlotRow>; DAY_COUNT] =
            std::array::from_fn(|_| vec![SlotRow::new(num_batches); SLOTS_PER_DAY]);

        for rows in &mut days {
            let lunch = &mut rows[LUNCH_SLOT];
            lunch.whole_class = SlotAssignment::Break;
            lunch.batches.fill(SlotAssignment::Break);
        }

        Self { num_batches, days }
    }

    /// Number of batch channels.
    #[inline]
    pub fn num_batches(&self) -> usize {
        self.num_batches
    }

    /// Whole-class channel followed by every batch channel.
    pub fn channels(&self) -> impl Iterator<Item = Channel> {
        std::iter::once(Channel::WholeClass).chain((1..=self.num_batches).map(Channel::Batch))
    }

    /// All slot rows of a day.
    #[inline]
    pub fn day(&self, day: Day) -> &[SlotRow] {
        &self.days[day.index()]
    }

    /// Slot row, `None` if `slot` is out of range.
    #[inline]
    pub fn row(&self, day: Day, slot: usize) -> Option<&SlotRow> {
        self.days[day.index()].get(slot)
    }

    /// Cell at (day, slot, channel), `None` if slot or channel does not exist.
    pub fn get(&self, day: Day, slot: usize, channel: Channel) -> Option<&SlotAssignment> {
        self.row(day, slot).and_then(|row| row.get(channel))
    }

    /// Whether the cell exists and is not empty.
    #[inline]
    pub fn is_filled(&self, day: Day, slot: usize, channel: Channel) -> bool {
        self.get(day, slot, channel).is_some_and(SlotAssignment::is_filled)
    }

    /// Whether the cell exists, is empty, and is not the lunch slot.
    pub fn is_available(&self, day: Day, slot: usize, channel: Channel) -> bool {
        !is_lunch(slot) && self.get(day, slot, channel).is_some_and(SlotAssignment::is_empty)
    }

    /// Whether every batch channel is empty at (day, slot).
    pub fn are_all_batches_free(&self, day: Day, slot: usize) -> bool {
        self.row(day, slot)
            .is_some_and(|row| row.batches.iter().all(SlotAssignment::is_empty))
    }

    /// Places a lecture on the whole-class channel and a synchronized copy on
    /// every batch channel.
    ///
    /// Callers check [`are_all_batches_free`](Self::are_all_batches_free)
    /// first; occupied cells are overwritten. Lunch and out-of-range slots
    /// are ignored.
    pub fn assign_whole_class(&mut self, day: Day, slot: usize, session: Session) {
        if is_lunch(slot) {
            return;
        }
        let Some(row) = self.days[day.index()].get_mut(slot) else {
            return;
        };

        row.batches.fill(SlotAssignment::Theory {
            session: session.clone(),
            synchronized: true,
        });
        row.whole_class = SlotAssignment::Theory {
            session,
            synchronized: false,
        };
    }

    /// Places one lab hour on a batch channel.
    ///
    /// If the whole-class cell is empty it becomes a
    /// [`SlotAssignment::LabSessionMarker`], reserving the slot against later
    /// lecture placement. Lunch slots and unknown batches are ignored.
    pub fn assign_batch_lab(&mut self, day: Day, slot: usize, batch: usize, session: Session) {
        if is_lunch(slot) {
            return;
        }
        let Some(row) = self.days[day.index()].get_mut(slot) else {
            return;
        };
        let Some(cell) = row.get_mut(Channel::Batch(batch)) else {
            return;
        };

        *cell = SlotAssignment::LabSession(session);
        if row.whole_class.is_empty() {
            row.whole_class = SlotAssignment::LabSessionMarker;
        }
    }
}

impl Serialize for TimetableGrid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(DAY_COUNT))?;
        for day in Day::ALL {
            map.serialize_entry(&day, self.day(day))?;
        }
        map.end()
    }
}
