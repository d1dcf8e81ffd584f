//! Greedy timetable construction and quality analysis.
//!
//! # Algorithm
//!
//! [`TimetableGenerator`] runs a fixed sequence of greedy passes over a
//! [`TimetableGrid`](crate::models::TimetableGrid): a day-opening lecture
//! pass, per-batch lab blocks, then a lecture sweep guided by the slot
//! heuristics in [`SlotSelector`]. Faculty daily caps are enforced through
//! [`FacultyWorkload`]; remaining hours live in [`HourLedger`]s owned by the
//! two schedulers.
//!
//! The passes are not optimal and never backtrack. Hours that find no slot
//! are reported, not forced.
//!
//! # Analysis
//!
//! [`TimetableAnalysis`] computes faculty load spread and idle gaps on a
//! finished grid and turns them into suggestions.

mod analysis;
mod generator;
mod lab;
mod ledger;
mod slots;
mod theory;
mod workload;

pub use analysis::{count_channel_gaps, GapAnalysis, TimetableAnalysis, WorkloadSummary};
pub use generator::{
    DemandKind, GeneratedTimetable, TimetableGenerator, TimetableInput, UnscheduledDemand,
};
pub use lab::{can_hold_lab_block, find_lab_block, LabScheduler, LAB_BLOCK_HOURS};
pub use ledger::HourLedger;
pub use slots::{find_gap_slots, has_gap, is_subject_consecutive, SlotSelector};
pub use theory::TheoryScheduler;
pub use workload::FacultyWorkload;
