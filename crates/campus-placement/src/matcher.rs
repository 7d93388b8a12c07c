//! Building matcher — nearest same-locality building with a free seat.
//!
//! Filters, in order, for every building in registry order:
//! 1. Skip buildings in the caller's exclusion set
//! 2. Skip buildings whose locality differs (exact, case-sensitive)
//! 3. Skip buildings with no classroom passing the capacity check
//!
//! Among the survivors the strictly nearest wins; on equal distance the
//! first one scanned is kept.

use std::collections::HashSet;

use serde::Serialize;
use tracing::trace;

use campus_core::{Building, BuildingId, Student};

use crate::capacity::select_classroom;
use crate::geometry::distance;

/// A matched building and the student's distance to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BuildingMatch {
    pub building: BuildingId,
    pub distance: f64,
}

/// Find the nearest eligible building for `student`.
///
/// `None` is the ordinary "no capacity nearby" outcome.
pub fn find_nearest_building(
    student: &Student,
    buildings: &[Building],
    exclude: &HashSet<BuildingId>,
) -> Option<BuildingMatch> {
    let mut best: Option<BuildingMatch> = None;

    for (idx, building) in buildings.iter().enumerate() {
        let id = BuildingId(idx);
        if exclude.contains(&id) {
            continue;
        }
        if building.locality != student.locality {
            continue;
        }
        if select_classroom(building).is_none() {
            trace!(student = %student.name, building = idx, "building saturated");
            continue;
        }

        let dist = distance(student.location, building.location);
        if best.is_none_or(|b| dist < b.distance) {
            best = Some(BuildingMatch { building: id, distance: dist });
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::StudentId;

    fn open(x: i32, y: i32, locality: &str) -> Building {
        Building::new(x, y, locality).with_classroom(10, 1, 10)
    }

    fn full(x: i32, y: i32, locality: &str) -> Building {
        let mut b = Building::new(x, y, locality).with_classroom(1, 1, 1);
        b.classrooms[0].assigned.push(StudentId(99));
        b
    }

    fn none() -> HashSet<BuildingId> {
        HashSet::new()
    }

    #[test]
    fn picks_nearest_same_locality() {
        let buildings = vec![open(10, 0, "n"), open(3, 0, "n"), open(1, 0, "s")];
        let s = Student::new("ana", 0, 0, "n");

        let m = find_nearest_building(&s, &buildings, &none()).unwrap();
        assert_eq!(m.building, BuildingId(1));
        assert_eq!(m.distance, 3.0);
    }

    #[test]
    fn locality_is_case_sensitive() {
        let buildings = vec![open(0, 0, "North")];
        let s = Student::new("ana", 0, 0, "north");
        assert!(find_nearest_building(&s, &buildings, &none()).is_none());
    }

    #[test]
    fn skips_saturated_buildings() {
        let buildings = vec![full(1, 0, "n"), open(50, 0, "n")];
        let s = Student::new("ana", 0, 0, "n");

        let m = find_nearest_building(&s, &buildings, &none()).unwrap();
        assert_eq!(m.building, BuildingId(1));
    }

    #[test]
    fn building_without_classrooms_never_matches() {
        let buildings = vec![Building::new(0, 0, "n")];
        let s = Student::new("ana", 0, 0, "n");
        assert!(find_nearest_building(&s, &buildings, &none()).is_none());
    }

    #[test]
    fn ties_keep_first_scanned() {
        let buildings = vec![open(0, 5, "n"), open(5, 0, "n"), open(-3, -4, "n")];
        let s = Student::new("ana", 0, 0, "n");

        let m = find_nearest_building(&s, &buildings, &none()).unwrap();
        assert_eq!(m.building, BuildingId(0));
    }

    #[test]
    fn exclusion_set_is_honored() {
        let buildings = vec![open(1, 0, "n"), open(9, 0, "n")];
        let s = Student::new("ana", 0, 0, "n");
        let exclude: HashSet<BuildingId> = [BuildingId(0)].into_iter().collect();

        let m = find_nearest_building(&s, &buildings, &exclude).unwrap();
        assert_eq!(m.building, BuildingId(1));
    }

    #[test]
    fn empty_registry_has_no_match() {
        let s = Student::new("ana", 0, 0, "n");
        assert!(find_nearest_building(&s, &[], &none()).is_none());
    }
}
