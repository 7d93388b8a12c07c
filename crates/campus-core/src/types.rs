//! Domain types shared across campus crates.
//!
//! Students and buildings live in arenas owned by [`Campus`](crate::Campus);
//! everything else refers to them by index ([`StudentId`], [`BuildingId`]).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Index of a student in the campus student arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub usize);

/// Index of a building in the campus building registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildingId(pub usize);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "student#{}", self.0)
    }
}

impl fmt::Display for BuildingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "building#{}", self.0)
    }
}

/// Integer grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Location {
    pub x: i32,
    pub y: i32,
}

impl Location {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

// ── Student ───────────────────────────────────────────────────────

/// A student waiting for, or holding, a classroom seat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub location: Location,
    /// Exact-match eligibility key. Not geometric.
    pub locality: String,
}

impl Student {
    pub fn new(name: impl Into<String>, x: i32, y: i32, locality: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: Location::new(x, y),
            locality: locality.into(),
        }
    }
}

// ── Building ──────────────────────────────────────────────────────

/// A classroom with capacity bounds and its seated students.
///
/// Only `assigned.len() <= max_capacity` is enforced; `min_capacity` is
/// carried for reporting and may exceed `max_capacity`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Classroom {
    pub ideal_capacity: u32,
    pub min_capacity: u32,
    pub max_capacity: u32,
    /// Seated students in assignment order.
    #[serde(default)]
    pub assigned: Vec<StudentId>,
}

impl Classroom {
    pub fn new(ideal_capacity: u32, min_capacity: u32, max_capacity: u32) -> Self {
        Self {
            ideal_capacity,
            min_capacity,
            max_capacity,
            assigned: Vec::new(),
        }
    }

    pub fn occupancy(&self) -> usize {
        self.assigned.len()
    }

    pub fn free_seats(&self) -> usize {
        (self.max_capacity as usize).saturating_sub(self.assigned.len())
    }
}

/// A building in the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub location: Location,
    pub locality: String,
    #[serde(default)]
    pub classrooms: Vec<Classroom>,
}

impl Building {
    pub fn new(x: i32, y: i32, locality: impl Into<String>) -> Self {
        Self {
            location: Location::new(x, y),
            locality: locality.into(),
            classrooms: Vec::new(),
        }
    }

    /// Builder-style classroom append.
    pub fn with_classroom(mut self, ideal: u32, min: u32, max: u32) -> Self {
        self.classrooms.push(Classroom::new(ideal, min, max));
        self
    }

    /// Total seated students across all classrooms.
    pub fn occupancy(&self) -> usize {
        self.classrooms.iter().map(Classroom::occupancy).sum()
    }

    /// Sum of ideal capacities across all classrooms.
    pub fn ideal_capacity(&self) -> u64 {
        self.classrooms.iter().map(|c| u64::from(c.ideal_capacity)).sum()
    }
}
