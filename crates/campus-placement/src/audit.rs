//! Utilization auditor — drains under-used buildings and reseats their students.
//!
//! # Audit Algorithm
//!
//! ```text
//! for building in registry order:
//!     total     = sum(len(classroom.assigned))
//!     ideal_sum = sum(classroom.ideal_capacity)
//!     if total < ideal_sum * threshold:
//!         for classroom in building:        // stored order
//!             while seat := classroom.pop(): // most recent first
//!                 pending.push(seat)
//!
//! if pending is not empty:
//!     reassign_pending()                    // exactly once
//! ```
//!
//! A building with no classrooms, or an ideal sum of zero, is never below
//! threshold.

use serde::Serialize;
use tracing::{debug, info};

use campus_core::{Building, BuildingId, Campus, RebalanceConfig, StudentId};

use crate::error::PlacementResult;
use crate::rebalance::{PassReport, reassign_pending};

/// Seated-vs-ideal figures for one building.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Utilization {
    pub total: usize,
    pub ideal_sum: u64,
    /// `total / ideal_sum`, or `None` when the ideal sum is zero.
    pub ratio: Option<f64>,
}

impl Utilization {
    /// The under-utilization predicate shared by the auditor and the report.
    pub fn is_below(&self, threshold: f64) -> bool {
        (self.total as f64) < self.ideal_sum as f64 * threshold
    }
}

pub fn utilization(building: &Building) -> Utilization {
    let total = building.occupancy();
    let ideal_sum = building.ideal_capacity();
    let ratio = (ideal_sum > 0).then(|| total as f64 / ideal_sum as f64);
    Utilization {
        total,
        ideal_sum,
        ratio,
    }
}

/// Indices of every building currently below `threshold`. Read-only.
pub fn buildings_below_threshold(buildings: &[Building], threshold: f64) -> Vec<BuildingId> {
    buildings
        .iter()
        .enumerate()
        .filter(|(_, b)| utilization(b).is_below(threshold))
        .map(|(idx, _)| BuildingId(idx))
        .collect()
}

/// Students moved from one drained building to the pending list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Eviction {
    pub building: BuildingId,
    pub utilization: Utilization,
    /// In the order they were appended to pending.
    pub students: Vec<StudentId>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditReport {
    pub threshold: f64,
    pub evictions: Vec<Eviction>,
    /// Present when the pending list was non-empty after the scan.
    pub reassignment: Option<PassReport>,
}

impl AuditReport {
    /// True when at least one building was drained.
    pub fn rebalanced(&self) -> bool {
        !self.evictions.is_empty()
    }

    pub fn evicted_count(&self) -> usize {
        self.evictions.iter().map(|e| e.students.len()).sum()
    }
}

/// Drain every building below threshold, then run one reassignment pass.
pub fn audit(campus: &mut Campus, config: &RebalanceConfig) -> PlacementResult<AuditReport> {
    let threshold = config.utilization_threshold;
    let evictions = evict_underutilized(campus, threshold);

    let reassignment = if campus.pending().is_empty() {
        None
    } else {
        Some(reassign_pending(campus)?)
    };

    if evictions.is_empty() {
        info!(threshold, "audit complete; no building below threshold");
    } else {
        info!(
            threshold,
            drained = evictions.len(),
            evicted = evictions.iter().map(|e| e.students.len()).sum::<usize>(),
            "audit complete; buildings rebalanced"
        );
    }

    Ok(AuditReport {
        threshold,
        evictions,
        reassignment,
    })
}

/// The eviction half of [`audit`]: drain buildings below `threshold` into
/// the pending list without reassigning anyone.
pub fn evict_underutilized(campus: &mut Campus, threshold: f64) -> Vec<Eviction> {
    let mut evictions = Vec::new();
    let mut released = Vec::new();

    for (idx, building) in campus.buildings_mut().iter_mut().enumerate() {
        let usage = utilization(building);
        if !usage.is_below(threshold) {
            debug!(building = idx, total = usage.total, ideal = usage.ideal_sum, "building ok");
            continue;
        }

        let mut students = Vec::with_capacity(usage.total);
        for classroom in &mut building.classrooms {
            while let Some(student) = classroom.assigned.pop() {
                students.push(student);
            }
        }

        info!(
            building = idx,
            locality = %building.locality,
            total = usage.total,
            ideal = usage.ideal_sum,
            "building under-utilized; evicting students"
        );

        released.extend_from_slice(&students);
        evictions.push(Eviction {
            building: BuildingId(idx),
            utilization: usage,
            students,
        });
    }

    for student in released {
        campus.push_pending(student);
    }
    evictions
}
