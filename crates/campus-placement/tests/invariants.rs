//! Registry invariants checked after every placement step over a sweep of
//! generated campuses (localities, capacities, thresholds).

use std::collections::HashSet;

use campus_core::*;
use campus_placement::*;

const LOCALITIES: [&str; 3] = ["north", "south", "east"];

/// Deterministic campus: `buildings` buildings spread over the localities,
/// each with a mix of classroom sizes, and `students` students around them.
fn generated(seed: u32, buildings: u32, students: u32) -> Campus {
    let mut campus = Campus::new();
    for b in 0..buildings {
        let locality = LOCALITIES[((b + seed) % 2) as usize];
        let x = ((b * 7 + seed * 3) % 23) as i32 - 11;
        let y = ((b * 5 + seed) % 17) as i32 - 8;
        let mut building = Building::new(x, y, locality);
        for c in 0..(b % 3 + 1) {
            let max = (seed + b + c) % 4;
            let ideal = (seed * 2 + c * 3 + b) % 7;
            building = building.with_classroom(ideal, (c + seed) % 3, max);
        }
        campus.add_building(building);
    }
    for s in 0..students {
        let locality = LOCALITIES[((s * 3 + seed) % 3) as usize];
        let x = ((s * 11 + seed * 5) % 29) as i32 - 14;
        let y = ((s * 13 + seed * 7) % 31) as i32 - 15;
        campus.add_student(Student::new(format!("s{s}"), x, y, locality));
    }
    campus
}

fn assert_consistent(campus: &Campus, step: &str) {
    let violations = campus.check_invariants();
    assert!(violations.is_empty(), "{step}: {violations:?}");
}

#[test]
fn invariants_hold_through_intake_audit_and_reassign() {
    for seed in 0..12 {
        for threshold in [0.0, 0.25, 0.5, 0.9, 1.5] {
            let mut campus = generated(seed, 5, 20);
            let config = RebalanceConfig::with_threshold(threshold);

            assign_intake(&mut campus).unwrap();
            assert_consistent(&campus, "intake");

            audit(&mut campus, &config).unwrap();
            assert_consistent(&campus, "audit");

            reassign_pending(&mut campus).unwrap();
            assert_consistent(&campus, "reassign");

            let placed = campus.seated_count() + campus.pending().len();
            assert_eq!(placed, campus.students().len(), "seed {seed}");
        }
    }
}

#[test]
fn matcher_returns_nearest_eligible_building() {
    for seed in 0..12 {
        let mut campus = generated(seed, 6, 15);
        assign_intake(&mut campus).unwrap();
        let buildings = campus.buildings();

        for student in campus.students() {
            let found = find_nearest_building(student, buildings, &HashSet::new());
            let eligible: Vec<(usize, f64)> = buildings
                .iter()
                .enumerate()
                .filter(|(_, b)| b.locality == student.locality && select_classroom(b).is_some())
                .map(|(i, b)| (i, distance(student.location, b.location)))
                .collect();

            match found {
                None => assert!(eligible.is_empty()),
                Some(m) => {
                    let b = &buildings[m.building.0];
                    assert_eq!(b.locality, student.locality);
                    assert!(b.classrooms.iter().any(has_capacity));
                    let min = eligible.iter().map(|(_, d)| *d).fold(f64::INFINITY, f64::min);
                    assert_eq!(m.distance, min);
                    let first_at_min = eligible.iter().find(|(_, d)| *d == min).map(|(i, _)| *i);
                    assert_eq!(Some(m.building.0), first_at_min);
                }
            }
        }
    }
}

#[test]
fn audit_leaves_buildings_at_or_above_threshold_untouched() {
    for seed in 0..12 {
        let mut campus = generated(seed, 6, 18);
        assign_intake(&mut campus).unwrap();

        let before = campus.buildings().to_vec();
        let below: HashSet<BuildingId> =
            buildings_below_threshold(campus.buildings(), DEFAULT_UTILIZATION_THRESHOLD)
                .into_iter()
                .collect();

        let evictions = evict_underutilized(&mut campus, DEFAULT_UTILIZATION_THRESHOLD);

        let drained: HashSet<BuildingId> = evictions.iter().map(|e| e.building).collect();
        assert_eq!(drained, below);
        for (idx, b) in campus.buildings().iter().enumerate() {
            if below.contains(&BuildingId(idx)) {
                assert_eq!(b.occupancy(), 0);
            } else {
                assert_eq!(b, &before[idx]);
            }
        }
        for e in &evictions {
            for id in &e.students {
                assert_eq!(campus.membership(*id), Membership::Pending);
            }
        }
    }
}

#[test]
fn threshold_report_is_read_only() {
    let mut campus = generated(3, 5, 12);
    assign_intake(&mut campus).unwrap();
    let before = campus.buildings().to_vec();
    let pending = campus.pending().to_vec();

    let _ = buildings_below_threshold(campus.buildings(), 0.5);

    assert_eq!(campus.buildings(), before.as_slice());
    assert_eq!(campus.pending(), pending.as_slice());
}
