//! Slot assignment model.
//!
//! Every (day, slot, channel) cell of a timetable holds exactly one
//! [`SlotAssignment`]. Cells start `Empty`; the lunch slot is `Break` on
//! every channel.
//!
//! # Serialized form
//!
//! `Empty` serializes as `null`. Every other variant serializes as an object
//! with `subject`, `faculty`, `room` and `type` keys; synchronized batch
//! copies of a theory session additionally carry `with_whole_class: true`.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

const BREAK_LABEL: &str = "Lunch Break";
const LAB_MARKER_LABEL: &str = "Lab Sessions";

/// Subject, faculty and room of one placed session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Session {
    /// Subject or lab name.
    pub subject: String,
    /// Assigned faculty.
    pub faculty: String,
    /// Assigned room.
    pub room: String,
}

impl Session {
    /// Creates a session record.
    pub fn new(
        subject: impl Into<String>,
        faculty: impl Into<String>,
        room: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            faculty: faculty.into(),
            room: room.into(),
        }
    }
}

/// Contents of one timetable cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SlotAssignment {
    /// Nothing scheduled.
    #[default]
    Empty,
    /// Lunch break.
    Break,
    /// A lecture. `synchronized` marks the per-batch copies of a
    /// whole-class session.
    Theory { session: Session, synchronized: bool },
    /// A lab block hour for one batch.
    LabSession(Session),
    /// Whole-class placeholder while one or more batches are in a lab.
    LabSessionMarker,
}

impl SlotAssignment {
    /// Whether nothing is scheduled here.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, SlotAssignment::Empty)
    }

    /// Whether the cell holds anything, breaks and markers included.
    #[inline]
    pub fn is_filled(&self) -> bool {
        !self.is_empty()
    }

    #[inline]
    pub fn is_theory(&self) -> bool {
        matches!(self, SlotAssignment::Theory { .. })
    }

    #[inline]
    pub fn is_lab(&self) -> bool {
        matches!(self, SlotAssignment::LabSession(_))
    }

    #[inline]
    pub fn is_lab_marker(&self) -> bool {
        matches!(self, SlotAssignment::LabSessionMarker)
    }

    /// Whether this is a per-batch copy of a whole-class lecture.
    #[inline]
    pub fn is_synchronized(&self) -> bool {
        matches!(
            self,
            SlotAssignment::Theory {
                synchronized: true,
                ..
            }
        )
    }

    /// The placed session, for theory and lab cells.
    pub fn session(&self) -> Option<&Session> {
        match self {
            SlotAssignment::Theory { session, .. } | SlotAssignment::LabSession(session) => {
                Some(session)
            }
            _ => None,
        }
    }

    /// Subject name of a placed session.
    pub fn subject(&self) -> Option<&str> {
        self.session().map(|s| s.subject.as_str())
    }

    /// Faculty of a placed session.
    pub fn faculty(&self) -> Option<&str> {
        self.session().map(|s| s.faculty.as_str())
    }

    fn type_name(&self) -> &'static str {
        match self {
            SlotAssignment::Empty => "empty",
            SlotAssignment::Break => "break",
            SlotAssignment::Theory { .. } => "theory",
            SlotAssignment::LabSession(_) => "lab",
            SlotAssignment::LabSessionMarker => "lab_session",
        }
    }
}

impl Serialize for SlotAssignment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (subject, session) = match self {
            SlotAssignment::Empty => return serializer.serialize_none(),
            SlotAssignment::Break => (BREAK_LABEL, None),
            SlotAssignment::LabSessionMarker => (LAB_MARKER_LABEL, None),
            SlotAssignment::Theory { session, .. } | SlotAssignment::LabSession(session) => {
                (session.subject.as_str(), Some(session))
            }
        };

        let synchronized = self.is_synchronized();
        let mut map = serializer.serialize_map(Some(if synchronized { 5 } else { 4 }))?;
        map.serialize_entry("subject", subject)?;
        map.serialize_entry("faculty", &session.map(|s| s.faculty.as_str()))?;
        map.serialize_entry("room", &session.map(|s| s.room.as_str()))?;
        map.serialize_entry("type", self.type_name())?;
        if synchronized {
            map.serialize_entry("with_whole_class", &true)?;
        }
        map.end()
    }
}
