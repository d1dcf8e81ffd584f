//! Timetabling domain models.
//!
//! Provides the fixed weekly calendar, the course inputs, and the grid that
//! holds one generation run's placements.
//!
//! # Domain Mappings
//!
//! | u-timetable | Scheduling term |
//! |-------------|-----------------|
//! | Subject | Task (whole-class, one slot per hour) |
//! | Lab | Task (per batch, two-slot blocks) |
//! | Faculty / Room | Resource |
//! | TimetableGrid | Schedule |

mod assignment;
pub mod calendar;
mod course;
mod timetable;

pub use assignment::{Session, SlotAssignment};
pub use calendar::{is_lunch, Day, TimeSlot, DAY_COUNT, LUNCH_SLOT, SLOTS_PER_DAY, TIME_SLOTS};
pub use course::{Lab, Room, Subject};
pub use timetable::{Channel, SlotRow, TimetableGrid};
