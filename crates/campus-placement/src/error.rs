//! Placement error types.
//!
//! "No eligible building" is not an error: it is reported as an outcome and
//! the student stays pending. These variants are contract breaks.

use campus_core::{BuildingId, StudentId};
use thiserror::Error;

/// Errors that can occur during placement operations.
#[derive(Debug, Error)]
pub enum PlacementError {
    #[error("student not found: {0}")]
    UnknownStudent(StudentId),

    #[error("building not found: {0}")]
    UnknownBuilding(BuildingId),

    #[error("invariant violated: matched {0} has no classroom with capacity")]
    NoClassroomAvailable(BuildingId),
}

pub type PlacementResult<T> = Result<T, PlacementError>;
