//! Human-readable notices rendered from pass and audit reports.
//!
//! Placement operations return structured reports; this module only
//! resolves ids to names and formats text. It never mutates the campus.

use std::fmt;

use campus_core::{BuildingId, Campus, StudentId};

use crate::audit::AuditReport;
use crate::rebalance::{Outcome, PassKind, PassReport};

#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Seated {
        student: String,
        locality: String,
        ideal_capacity: u32,
    },
    AddedToPending {
        student: String,
    },
    NoBuildingAvailable {
        student: String,
    },
    NothingPending,
    Evicted {
        building: BuildingId,
        locality: String,
        seated: usize,
        ideal: u64,
        moved: usize,
    },
    AuditSummary {
        drained: usize,
        reseated: usize,
        still_pending: usize,
    },
    NoRebalanceNeeded,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Seated { student, locality, ideal_capacity } => write!(
                f,
                "Student {student} assigned to building in {locality}, classroom with ideal capacity {ideal_capacity}"
            ),
            Notice::AddedToPending { student } => {
                write!(f, "No building available for student {student}; added to pending")
            }
            Notice::NoBuildingAvailable { student } => {
                write!(f, "No building available for student {student}")
            }
            Notice::NothingPending => write!(f, "No pending students; no changes made"),
            Notice::Evicted { building, locality, seated, ideal, moved } => write!(
                f,
                "Building {} in {locality} under-utilized ({seated}/{ideal} seated); moved {moved} students to pending",
                building.0
            ),
            Notice::AuditSummary { drained, reseated, still_pending } => write!(
                f,
                "Rebalancing done: {drained} building(s) drained, {reseated} student(s) reseated, {still_pending} pending"
            ),
            Notice::NoRebalanceNeeded => write!(f, "No building below threshold; no rebalancing needed"),
        }
    }
}

fn student_name(campus: &Campus, id: StudentId) -> String {
    campus
        .student(id)
        .map(|s| s.name.clone())
        .unwrap_or_else(|| id.to_string())
}

/// One notice per processed student, or a single "no changes" notice.
pub fn pass_notices(campus: &Campus, report: &PassReport) -> Vec<Notice> {
    if report.is_noop() && report.kind == PassKind::Reassign {
        return vec![Notice::NothingPending];
    }

    report
        .outcomes
        .iter()
        .map(|outcome| match outcome {
            Outcome::Seated(a) => {
                let building = campus.building(a.building);
                Notice::Seated {
                    student: student_name(campus, a.student),
                    locality: building.map(|b| b.locality.clone()).unwrap_or_default(),
                    ideal_capacity: building
                        .and_then(|b| b.classrooms.get(a.classroom))
                        .map(|c| c.ideal_capacity)
                        .unwrap_or_default(),
                }
            }
            Outcome::Pending { student } => {
                let student = student_name(campus, *student);
                match report.kind {
                    PassKind::Intake => Notice::AddedToPending { student },
                    PassKind::Reassign => Notice::NoBuildingAvailable { student },
                }
            }
        })
        .collect()
}

/// Eviction notices, then the reassignment notices, then a summary line.
pub fn audit_notices(campus: &Campus, report: &AuditReport) -> Vec<Notice> {
    let mut notices: Vec<Notice> = report
        .evictions
        .iter()
        .map(|e| Notice::Evicted {
            building: e.building,
            locality: campus
                .building(e.building)
                .map(|b| b.locality.clone())
                .unwrap_or_default(),
            seated: e.utilization.total,
            ideal: e.utilization.ideal_sum,
            moved: e.students.len(),
        })
        .collect();

    if let Some(pass) = &report.reassignment {
        notices.extend(pass_notices(campus, pass));
    }

    if report.rebalanced() {
        let (reseated, still_pending) = report
            .reassignment
            .as_ref()
            .map(|p| (p.seated().count(), p.pending().count()))
            .unwrap_or((0, 0));
        notices.push(Notice::AuditSummary {
            drained: report.evictions.len(),
            reseated,
            still_pending,
        });
    } else {
        notices.push(Notice::NoRebalanceNeeded);
    }

    notices
}
