//! Input validation for timetable generation.
//!
//! Checks structural integrity of the input before any placement happens,
//! so the scheduler never stops mid-pass on malformed data. Detects:
//! - Missing subjects or rooms
//! - Batch count or batch size below 1, or more batches than configured
//! - Subjects and labs without a name or without eligible faculty
//! - Duplicate subject and room names
//!
//! All problems are collected; each error names the offending field.

use std::collections::HashSet;

use crate::config::GeneratorConfig;
use crate::scheduler::TimetableInput;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Path of the offending field, e.g. `subjects[1].faculty`.
    pub field: String,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No subjects supplied.
    NoSubjects,
    /// No rooms supplied.
    NoRooms,
    /// `num_batches` is below 1.
    InvalidBatchCount,
    /// `num_batches` exceeds the configured limit.
    TooManyBatches,
    /// `students_per_batch` is below 1.
    InvalidBatchSize,
    /// A subject or lab has an empty name.
    MissingName,
    /// A subject or lab has no eligible faculty.
    MissingFaculty,
    /// Two subjects or two rooms share a name.
    DuplicateName,
}

impl ValidationError {
    pub(crate) fn new(
        kind: ValidationErrorKind,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validates the input of one generation run against the limits in `config`.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(input: &TimetableInput, config: &GeneratorConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if input.subjects.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoSubjects,
            "subjects",
            "At least one subject is required",
        ));
    }
    if input.rooms.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoRooms,
            "rooms",
            "At least one room is required",
        ));
    }
    if input.num_batches < 1 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidBatchCount,
            "num_batches",
            "Number of batches must be at least 1",
        ));
    } else if input.num_batches > config.max_batches {
        errors.push(ValidationError::new(
            ValidationErrorKind::TooManyBatches,
            "num_batches",
            format!("Number of batches must be at most {}", config.max_batches),
        ));
    }
    if input.students_per_batch < 1 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidBatchSize,
            "students_per_batch",
            "Students per batch must be at least 1",
        ));
    }

    let mut subject_names = HashSet::new();
    for (i, subject) in input.subjects.iter().enumerate() {
        check_named(&mut errors, "subjects", i, &subject.name, &subject.faculty);
        if !subject.name.is_empty() && !subject_names.insert(subject.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("subjects[{i}].name"),
                format!("Duplicate subject name: {}", subject.name),
            ));
        }
    }

    for (i, lab) in input.labs.iter().enumerate() {
        check_named(&mut errors, "labs", i, &lab.name, &lab.faculty);
    }

    let mut room_names = HashSet::new();
    for (i, room) in input.rooms.iter().enumerate() {
        if !room_names.insert(room.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("rooms[{i}].name"),
                format!("Duplicate room name: {}", room.name),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_named(
    errors: &mut Vec<ValidationError>,
    collection: &str,
    index: usize,
    name: &str,
    faculty: &[String],
) {
    if name.trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingName,
            format!("{collection}[{index}].name"),
            format!("Entry {index} in {collection} has no name"),
        ));
    }
    if faculty.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingFaculty,
            format!("{collection}[{index}].faculty"),
            format!("'{name}' in {collection} has no eligible faculty"),
        ));
    }
}
