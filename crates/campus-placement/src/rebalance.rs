//! Placement passes — the intake pass and the reassignment driver.
//!
//! Both walk a queue of students in list order, run each one through the
//! matcher and, on a match, the assignment operator. Earlier students claim
//! scarce seats first; a later student can lose a seat it could otherwise
//! have reached.
//!
//! - [`assign_intake`] drains newly entered students; misses become pending.
//! - [`reassign_pending`] retries the pending list; misses stay pending in
//!   their original relative order.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, info, warn};

use campus_core::{BuildingId, Campus, StudentId};

use crate::assign::{Assignment, assign};
use crate::error::{PlacementError, PlacementResult};
use crate::matcher::find_nearest_building;

/// Which queue a pass drained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PassKind {
    Intake,
    Reassign,
}

/// Result of running one student through a pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Seated(Assignment),
    /// No eligible building; the student is on the pending list.
    Pending { student: StudentId },
}

impl Outcome {
    pub fn student(&self) -> StudentId {
        match self {
            Outcome::Seated(a) => a.student,
            Outcome::Pending { student } => *student,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PassReport {
    pub kind: PassKind,
    /// One entry per processed student, in processing order.
    pub outcomes: Vec<Outcome>,
}

impl PassReport {
    fn new(kind: PassKind, capacity: usize) -> Self {
        Self {
            kind,
            outcomes: Vec::with_capacity(capacity),
        }
    }

    pub fn seated(&self) -> impl Iterator<Item = &Assignment> {
        self.outcomes.iter().filter_map(|o| match o {
            Outcome::Seated(a) => Some(a),
            Outcome::Pending { .. } => None,
        })
    }

    pub fn pending(&self) -> impl Iterator<Item = StudentId> + '_ {
        self.outcomes.iter().filter_map(|o| match o {
            Outcome::Pending { student } => Some(*student),
            Outcome::Seated(_) => None,
        })
    }

    /// True when the pass had nothing to process.
    pub fn is_noop(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Run the initial assignment for every student in the intake list.
pub fn assign_intake(campus: &mut Campus) -> PlacementResult<PassReport> {
    let queue = campus.take_intake();
    let report = run_pass(campus, PassKind::Intake, queue)?;

    info!(
        seated = report.seated().count(),
        pending = report.pending().count(),
        "intake pass complete"
    );
    Ok(report)
}

/// Retry every pending student once, in list order.
///
/// The matcher is called with no exclusions, so a building drained by the
/// auditor can take its own students straight back. An empty pending list
/// is a no-op.
pub fn reassign_pending(campus: &mut Campus) -> PlacementResult<PassReport> {
    let queue = campus.take_pending();
    if queue.is_empty() {
        debug!("no pending students; nothing to reassign");
        return Ok(PassReport::new(PassKind::Reassign, 0));
    }

    let report = run_pass(campus, PassKind::Reassign, queue)?;

    info!(
        seated = report.seated().count(),
        still_pending = report.pending().count(),
        "reassignment pass complete"
    );
    Ok(report)
}

fn run_pass(
    campus: &mut Campus,
    kind: PassKind,
    queue: Vec<StudentId>,
) -> PlacementResult<PassReport> {
    let mut report = PassReport::new(kind, queue.len());
    let no_exclusions = HashSet::new();
    let mut queue = queue.into_iter();

    while let Some(id) = queue.next() {
        match place_one(campus, id, &no_exclusions) {
            Ok(Some(assignment)) => report.outcomes.push(Outcome::Seated(assignment)),
            Ok(None) => {
                campus.push_pending(id);
                report.outcomes.push(Outcome::Pending { student: id });
            }
            Err(e) => {
                // Keep every unprocessed student on the pending list.
                campus.push_pending(id);
                queue.for_each(|rest| campus.push_pending(rest));
                return Err(e);
            }
        }
    }

    Ok(report)
}

fn place_one(
    campus: &mut Campus,
    id: StudentId,
    exclude: &HashSet<BuildingId>,
) -> PlacementResult<Option<Assignment>> {
    let student = campus.student(id).ok_or(PlacementError::UnknownStudent(id))?;
    let Some(found) = find_nearest_building(student, campus.buildings(), exclude) else {
        warn!(
            student = %student.name,
            locality = %student.locality,
            "no building available"
        );
        return Ok(None);
    };

    assign(campus, id, found.building).map(Some)
}
