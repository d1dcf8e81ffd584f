//! Course input models.
//!
//! Subjects (whole-class lectures), labs (per-batch practical sessions)
//! and rooms. These are static metadata: the scheduler never mutates them.
//! Hours still to be placed are tracked separately by
//! [`HourLedger`](crate::scheduler::HourLedger).

use serde::{Deserialize, Serialize};

/// A lecture subject attended by the whole class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    /// Subject name (also its identity within one run).
    pub name: String,
    /// Weekly theory hours requested.
    pub hours: u32,
    /// Faculty eligible to teach this subject, in preference order.
    pub faculty: Vec<String>,
    /// Number of students attending; rooms must hold at least this many.
    pub students: u32,
}

impl Subject {
    /// Creates a subject with no eligible faculty.
    pub fn new(name: impl Into<String>, hours: u32, students: u32) -> Self {
        Self {
            name: name.into(),
            hours,
            faculty: Vec::new(),
            students,
        }
    }

    /// Adds an eligible faculty member.
    pub fn with_faculty(mut self, faculty: impl Into<String>) -> Self {
        self.faculty.push(faculty.into());
        self
    }

    /// Whether `room` can seat this subject's students.
    #[inline]
    pub fn fits_in(&self, room: &Room) -> bool {
        room.capacity >= self.students
    }
}

/// A lab run separately for every batch, in two-hour blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lab {
    /// Lab name.
    pub name: String,
    /// Weekly lab hours per batch. Only whole two-hour blocks are placed.
    pub hours: u32,
    /// Faculty eligible to supervise this lab.
    pub faculty: Vec<String>,
    /// Fixed room for this lab.
    pub room: String,
}

impl Lab {
    /// Creates a lab in the given room with no eligible faculty.
    pub fn new(name: impl Into<String>, hours: u32, room: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hours,
            faculty: Vec::new(),
            room: room.into(),
        }
    }

    /// Adds an eligible faculty member.
    pub fn with_faculty(mut self, faculty: impl Into<String>) -> Self {
        self.faculty.push(faculty.into());
        self
    }
}

/// A lecture room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Room name.
    pub name: String,
    /// Seats available.
    pub capacity: u32,
}

impl Room {
    /// Creates a room.
    pub fn new(name: impl Into<String>, capacity: u32) -> Self {
        Self {
            name: name.into(),
            capacity,
        }
    }
}
