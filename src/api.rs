//! JSON request/response surface.
//!
//! A transport-agnostic adapter: it turns a request body into a
//! [`TimetableInput`], runs the generator, and encodes the result. Serving
//! it over HTTP is left to the embedding application, which can map
//! [`TimetableError::is_client_error`] to a 4xx status.

use serde::{Deserialize, Serialize};

use crate::error::TimetableError;
use crate::models::{Lab, Room, Subject, TimetableGrid};
use crate::scheduler::{
    GeneratedTimetable, TimetableAnalysis, TimetableGenerator, TimetableInput, UnscheduledDemand,
};

fn default_num_batches() -> usize {
    1
}

/// Body of a generation request.
///
/// Every collection may be omitted. A missing `num_batches` means one batch;
/// a missing `students_per_batch` is zero and fails validation.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub subjects: Vec<Subject>,
    #[serde(default)]
    pub faculties: Vec<String>,
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub labs: Vec<Lab>,
    #[serde(default = "default_num_batches")]
    pub num_batches: usize,
    #[serde(default)]
    pub students_per_batch: u32,
}

impl GenerateRequest {
    /// Parses a request body.
    pub fn from_json(body: &str) -> Result<Self, TimetableError> {
        serde_json::from_str(body).map_err(TimetableError::MalformedRequest)
    }

    /// Converts into generator input.
    pub fn into_input(self) -> TimetableInput {
        TimetableInput {
            subjects: self.subjects,
            faculties: self.faculties,
            rooms: self.rooms,
            labs: self.labs,
            num_batches: self.num_batches,
            students_per_batch: self.students_per_batch,
        }
    }
}

/// Body of a successful response.
#[derive(Debug, Serialize)]
pub struct GenerateResponse<'a> {
    pub timetable: &'a TimetableGrid,
    pub analysis: &'a TimetableAnalysis,
    pub unscheduled: &'a [UnscheduledDemand],
}

impl<'a> From<&'a GeneratedTimetable> for GenerateResponse<'a> {
    fn from(result: &'a GeneratedTimetable) -> Self {
        Self {
            timetable: &result.timetable,
            analysis: &result.analysis,
            unscheduled: &result.unscheduled,
        }
    }
}

/// Body of an error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&TimetableError> for ErrorResponse {
    fn from(err: &TimetableError) -> Self {
        // First validation problem only.
        let error = match err {
            TimetableError::InvalidInput(errors) => errors
                .first()
                .map(|e| e.message.clone())
                .unwrap_or_else(|| err.to_string()),
            other => other.to_string(),
        };
        Self { error }
    }
}

/// Parses `body`, generates a timetable, and encodes the response.
pub fn generate_json(body: &str, generator: &TimetableGenerator) -> Result<String, TimetableError> {
    let input = GenerateRequest::from_json(body)?.into_input();
    let result = generator.generate(&input)?;
    serde_json::to_string(&GenerateResponse::from(&result)).map_err(TimetableError::Encode)
}

/// Encodes `err` as an error body.
pub fn error_json(err: &TimetableError) -> Result<String, TimetableError> {
    serde_json::to_string(&ErrorResponse::from(err)).map_err(TimetableError::Encode)
}
