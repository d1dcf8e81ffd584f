//! Weekly academic timetable generation.
//!
//! Builds a five-day, eight-slot timetable for one class split into lab
//! batches: whole-class lectures mirrored into every batch, two-hour lab
//! blocks per batch, and a fixed lunch break. Placement is greedy and
//! respects per-faculty daily caps; the finished grid is analyzed for
//! workload spread and idle gaps.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Day`, `TimeSlot`, `Subject`, `Lab`, `Room`,
//!   `SlotAssignment`, `TimetableGrid`
//! - **`scheduler`**: Theory and lab schedulers, slot heuristics, workload
//!   tracking, the end-to-end `TimetableGenerator`, and `TimetableAnalysis`
//! - **`validation`**: Input integrity checks (empty collections, batch
//!   bounds, missing faculty, duplicate names)
//! - **`config`**: Tunable caps and thresholds, loadable from TOML
//! - **`api`**: JSON request/response adapter
//!
//! # Example
//!
//! ```
//! use u_timetable::models::{Lab, Room, Subject};
//! use u_timetable::scheduler::{TimetableGenerator, TimetableInput};
//!
//! let input = TimetableInput::new(
//!     vec![Subject::new("Math", 3, 30).with_faculty("F1")],
//!     vec![Room::new("R1", 40)],
//! )
//! .with_lab(Lab::new("Physics Lab", 4, "L1").with_faculty("F2"))
//! .with_batches(2, 15);
//!
//! let result = TimetableGenerator::new().generate_seeded(&input, 7).unwrap();
//! assert!(result.is_complete());
//! ```
//!
//! # Logging
//!
//! Progress is reported through the `log` facade. No logger is installed
//! by this crate.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use config::GeneratorConfig;
pub use error::TimetableError;
pub use scheduler::{GeneratedTimetable, TimetableGenerator, TimetableInput};
