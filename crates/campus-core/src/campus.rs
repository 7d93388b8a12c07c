//! The campus registry — owns every student, building, and queue.
//!
//! A `Campus` is passed explicitly (`&Campus` / `&mut Campus`) to every
//! placement operation. Students are stored once in an arena; classrooms,
//! the intake list, and the pending list hold [`StudentId`]s.
//!
//! Membership rule: a student is in exactly one of
//! - the intake list (entered, initial assignment not yet attempted),
//! - the pending list,
//! - one classroom's `assigned` list.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{Building, BuildingId, Student, StudentId};

/// Where a student currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Membership {
    Intake,
    Pending,
    Seated { building: BuildingId, classroom: usize },
    /// Not found anywhere (only reachable through invalid ids or a broken invariant).
    Unplaced,
}

/// A broken registry invariant, reported by [`Campus::check_invariants`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    OverCapacity {
        building: BuildingId,
        classroom: usize,
        assigned: usize,
        max: u32,
    },
    LocalityMismatch {
        student: StudentId,
        building: BuildingId,
    },
    Unplaced(StudentId),
    Duplicated { student: StudentId, count: usize },
    DanglingId(StudentId),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Campus {
    students: Vec<Student>,
    buildings: Vec<Building>,
    intake: Vec<StudentId>,
    pending: Vec<StudentId>,
}

impl Campus {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Data entry ────────────────────────────────────────────────

    /// Append a student; it waits in the intake list until the next intake pass.
    pub fn add_student(&mut self, student: Student) -> StudentId {
        let id = StudentId(self.students.len());
        self.students.push(student);
        self.intake.push(id);
        id
    }

    /// Append a building to the registry.
    pub fn add_building(&mut self, building: Building) -> BuildingId {
        let id = BuildingId(self.buildings.len());
        self.buildings.push(building);
        id
    }

    // ── Lookups ───────────────────────────────────────────────────

    pub fn student(&self, id: StudentId) -> Option<&Student> {
        self.students.get(id.0)
    }

    pub fn building(&self, id: BuildingId) -> Option<&Building> {
        self.buildings.get(id.0)
    }

    pub fn building_mut(&mut self, id: BuildingId) -> Option<&mut Building> {
        self.buildings.get_mut(id.0)
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    /// Registry access for operations that touch several buildings.
    pub fn buildings_mut(&mut self) -> &mut [Building] {
        &mut self.buildings
    }

    pub fn building_ids(&self) -> impl Iterator<Item = BuildingId> + '_ {
        (0..self.buildings.len()).map(BuildingId)
    }

    pub fn intake(&self) -> &[StudentId] {
        &self.intake
    }

    pub fn pending(&self) -> &[StudentId] {
        &self.pending
    }

    /// Take the intake list, leaving it empty.
    pub fn take_intake(&mut self) -> Vec<StudentId> {
        std::mem::take(&mut self.intake)
    }

    /// Take the pending list, leaving it empty.
    pub fn take_pending(&mut self) -> Vec<StudentId> {
        std::mem::take(&mut self.pending)
    }

    pub fn push_pending(&mut self, id: StudentId) {
        self.pending.push(id);
    }

    /// Seated students grouped per building, in registry order.
    pub fn seated_in(&self, id: BuildingId) -> Vec<StudentId> {
        self.building(id)
            .map(|b| {
                b.classrooms
                    .iter()
                    .flat_map(|c| c.assigned.iter().copied())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn seated_count(&self) -> usize {
        self.buildings.iter().map(Building::occupancy).sum()
    }

    // ── Invariants ────────────────────────────────────────────────

    /// Locate a student.
    pub fn membership(&self, id: StudentId) -> Membership {
        if self.intake.contains(&id) {
            return Membership::Intake;
        }
        if self.pending.contains(&id) {
            return Membership::Pending;
        }
        for (b_idx, building) in self.buildings.iter().enumerate() {
            for (c_idx, classroom) in building.classrooms.iter().enumerate() {
                if classroom.assigned.contains(&id) {
                    return Membership::Seated {
                        building: BuildingId(b_idx),
                        classroom: c_idx,
                    };
                }
            }
        }
        Membership::Unplaced
    }

    /// Check every registry invariant. An empty vector means the campus is consistent.
    pub fn check_invariants(&self) -> Vec<InvariantViolation> {
        let mut violations = Vec::new();
        let mut seen: HashMap<StudentId, usize> = HashMap::new();

        for id in self.intake.iter().chain(&self.pending) {
            *seen.entry(*id).or_insert(0) += 1;
        }

        for (b_idx, building) in self.buildings.iter().enumerate() {
            let building_id = BuildingId(b_idx);
            for (c_idx, classroom) in building.classrooms.iter().enumerate() {
                if classroom.assigned.len() > classroom.max_capacity as usize {
                    violations.push(InvariantViolation::OverCapacity {
                        building: building_id,
                        classroom: c_idx,
                        assigned: classroom.assigned.len(),
                        max: classroom.max_capacity,
                    });
                }
                for id in &classroom.assigned {
                    *seen.entry(*id).or_insert(0) += 1;
                    match self.student(*id) {
                        Some(s) if s.locality != building.locality => {
                            violations.push(InvariantViolation::LocalityMismatch {
                                student: *id,
                                building: building_id,
                            });
                        }
                        Some(_) => {}
                        None => violations.push(InvariantViolation::DanglingId(*id)),
                    }
                }
            }
        }

        for idx in 0..self.students.len() {
            let id = StudentId(idx);
            match seen.remove(&id).unwrap_or(0) {
                0 => violations.push(InvariantViolation::Unplaced(id)),
                1 => {}
                count => violations.push(InvariantViolation::Duplicated { student: id, count }),
            }
        }
        // Anything left refers past the end of the arena.
        let mut dangling: Vec<StudentId> = seen.into_keys().collect();
        dangling.sort();
        violations.extend(dangling.into_iter().map(InvariantViolation::DanglingId));

        violations
    }
}
