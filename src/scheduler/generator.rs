//! End-to-end timetable generation.
//!
//! # Algorithm
//!
//! 1. Validate the input structurally.
//! 2. Build an empty grid with lunch blocked on every channel.
//! 3. Open each day with a lecture in slot 0.
//! 4. Place two-hour lab blocks for every batch.
//! 5. Backfill empty openings and sweep remaining lecture hours into the
//!    best free slots.
//! 6. Analyze the finished grid.
//!
//! Labs are placed before the lecture sweep so that blocks find room; the
//! sweep then fills around them. Demand that could not be placed is returned
//! alongside the grid instead of failing the run.

use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::config::GeneratorConfig;
use crate::error::TimetableError;
use crate::models::{Lab, Room, Subject, TimetableGrid};
use crate::validation::validate_input;

use super::{FacultyWorkload, LabScheduler, TheoryScheduler, TimetableAnalysis};

/// Input collections for one generation run.
#[derive(Debug, Clone)]
pub struct TimetableInput {
    /// Whole-class lecture subjects.
    pub subjects: Vec<Subject>,
    /// Known faculty identifiers. Informational: eligibility comes from each
    /// subject's and lab's own faculty list.
    pub faculties: Vec<String>,
    /// Lecture rooms.
    pub rooms: Vec<Room>,
    /// Labs, run once per batch.
    pub labs: Vec<Lab>,
    /// Number of batches the class is split into for labs.
    pub num_batches: usize,
    /// Students in each batch.
    pub students_per_batch: u32,
}

impl TimetableInput {
    /// Creates an input with one batch of one student and no labs.
    pub fn new(subjects: Vec<Subject>, rooms: Vec<Room>) -> Self {
        Self {
            subjects,
            faculties: Vec::new(),
            rooms,
            labs: Vec::new(),
            num_batches: 1,
            students_per_batch: 1,
        }
    }

    /// Adds a lab.
    pub fn with_lab(mut self, lab: Lab) -> Self {
        self.labs.push(lab);
        self
    }

    /// Sets the faculty list.
    pub fn with_faculties(mut self, faculties: Vec<String>) -> Self {
        self.faculties = faculties;
        self
    }

    /// Sets the batch split.
    pub fn with_batches(mut self, num_batches: usize, students_per_batch: u32) -> Self {
        self.num_batches = num_batches;
        self.students_per_batch = students_per_batch;
        self
    }
}

/// Kind of demand left unplaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DemandKind {
    Theory,
    Lab,
}

/// Hours of one subject, or of one batch's lab copy, that could not be placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnscheduledDemand {
    pub name: String,
    pub kind: DemandKind,
    /// Batch number (1-based) for lab demand.
    pub batch: Option<usize>,
    pub hours: u32,
}

/// Result of a generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedTimetable {
    pub timetable: TimetableGrid,
    pub analysis: TimetableAnalysis,
    pub unscheduled: Vec<UnscheduledDemand>,
}

impl GeneratedTimetable {
    /// Whether every requested hour was placed.
    pub fn is_complete(&self) -> bool {
        self.unscheduled.is_empty()
    }
}

/// Greedy timetable generator.
///
/// # Example
///
/// ```
/// use u_timetable::models::{Room, Subject};
/// use u_timetable::scheduler::{TimetableGenerator, TimetableInput};
///
/// let input = TimetableInput::new(
///     vec![Subject::new("Math", 3, 30).with_faculty("F1")],
///     vec![Room::new("R1", 40)],
/// );
/// let result = TimetableGenerator::new().generate_seeded(&input, 42).unwrap();
/// assert!(result.is_complete());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimetableGenerator {
    config: GeneratorConfig,
}

impl TimetableGenerator {
    /// Creates a generator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator with a custom configuration.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a timetable, seeded from the configuration when it has a
    /// seed and from the OS otherwise.
    pub fn generate(&self, input: &TimetableInput) -> Result<GeneratedTimetable, TimetableError> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.generate_with_rng(input, &mut rng)
    }

    /// Generates a timetable reproducibly from `seed`.
    pub fn generate_seeded(
        &self,
        input: &TimetableInput,
        seed: u64,
    ) -> Result<GeneratedTimetable, TimetableError> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate_with_rng(input, &mut rng)
    }

    /// Generates a timetable drawing every random choice from `rng`.
    pub fn generate_with_rng<R: Rng>(
        &self,
        input: &TimetableInput,
        rng: &mut R,
    ) -> Result<GeneratedTimetable, TimetableError> {
        validate_input(input, &self.config)?;
        info!(
            "generating timetable: {} subjects, {} labs, {} rooms, {} batches",
            input.subjects.len(),
            input.labs.len(),
            input.rooms.len(),
            input.num_batches
        );

        let mut grid = TimetableGrid::new(input.num_batches);
        let mut workload = FacultyWorkload::with_config(&self.config);

        let mut theory = TheoryScheduler::new(&input.subjects, &input.rooms);
        let mut lectures = theory.open_days(&mut grid, &mut workload, rng);

        let mut labs = LabScheduler::new(&input.labs, input.num_batches);
        let blocks = labs.schedule_all(&mut grid, &mut workload, rng);

        lectures += theory.fill_remaining(&mut grid, &mut workload, rng);

        let unscheduled = collect_unscheduled(input, &theory, &labs);
        for demand in &unscheduled {
            match demand.batch {
                Some(batch) => warn!(
                    "lab {} (batch_{batch}): {} hours left unscheduled",
                    demand.name, demand.hours
                ),
                None => warn!(
                    "subject {}: {} hours left unscheduled",
                    demand.name, demand.hours
                ),
            }
        }

        let analysis = TimetableAnalysis::analyze(&grid, &self.config);
        info!(
            "timetable generated: {lectures} lectures, {blocks} lab blocks, {} gaps",
            analysis.gap_analysis.total_gaps
        );

        Ok(GeneratedTimetable {
            timetable: grid,
            analysis,
            unscheduled,
        })
    }
}

fn collect_unscheduled(
    input: &TimetableInput,
    theory: &TheoryScheduler<'_>,
    labs: &LabScheduler<'_>,
) -> Vec<UnscheduledDemand> {
    let lectures = input
        .subjects
        .iter()
        .enumerate()
        .filter_map(|(i, subject)| {
            let hours = theory.ledger().remaining(i);
            (hours > 0).then(|| UnscheduledDemand {
                name: subject.name.clone(),
                kind: DemandKind::Theory,
                batch: None,
                hours,
            })
        });

    let lab_copies = (1..=input.num_batches).flat_map(|batch| {
        input.labs.iter().enumerate().filter_map(move |(i, lab)| {
            let hours = labs.ledger(batch).map_or(0, |ledger| ledger.remaining(i));
            (hours > 0).then(|| UnscheduledDemand {
                name: lab.name.clone(),
                kind: DemandKind::Lab,
                batch: Some(batch),
                hours,
            })
        })
    });

    lectures.chain(lab_copies).collect()
}
