//! Human-readable report formatting. Read-only views over a [`Campus`].

use campus_core::{BuildingId, Campus};

use crate::audit::utilization;

pub fn format_pending(campus: &Campus) -> String {
    let mut out = String::new();
    let pending = campus.pending();

    out.push_str(&format!("Pending students ({}):\n", pending.len()));
    for id in pending {
        match campus.student(*id) {
            Some(s) => out.push_str(&format!(
                "  • {} ({}, {}) [{}]\n",
                s.name, s.location.x, s.location.y, s.locality
            )),
            None => out.push_str(&format!("  • {id}\n")),
        }
    }

    out
}

pub fn format_assignments(campus: &Campus) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Assignments ({} seated, {} pending):\n\n",
        campus.seated_count(),
        campus.pending().len()
    ));

    for (idx, building) in campus.buildings().iter().enumerate() {
        out.push_str(&format!(
            "Building {idx} — {} at ({}, {})\n",
            building.locality, building.location.x, building.location.y
        ));
        if building.classrooms.is_empty() {
            out.push_str("  (no classrooms)\n");
        }
        for (c_idx, classroom) in building.classrooms.iter().enumerate() {
            out.push_str(&format!(
                "  Classroom {}: {}/{} seated (ideal {}, min {})\n",
                c_idx + 1,
                classroom.occupancy(),
                classroom.max_capacity,
                classroom.ideal_capacity,
                classroom.min_capacity
            ));
            for id in &classroom.assigned {
                let name = campus.student(*id).map(|s| s.name.as_str()).unwrap_or("?");
                out.push_str(&format!("    - {name}\n"));
            }
        }
        out.push('\n');
    }

    out
}

/// Utilization table plus the indices reported below `threshold`.
pub fn format_utilization(campus: &Campus, below: &[BuildingId], threshold: f64) -> String {
    let mut out = String::new();

    out.push_str(&format!("Utilization (threshold {:.0}%):\n", threshold * 100.0));
    for (idx, building) in campus.buildings().iter().enumerate() {
        let u = utilization(building);
        let ratio = u
            .ratio
            .map(|r| format!("{:.0}%", r * 100.0))
            .unwrap_or_else(|| "n/a".to_string());
        let flag = if below.contains(&BuildingId(idx)) { "  ⚠️ below" } else { "" };
        out.push_str(&format!(
            "  {idx:>3}  {:<16} {:>4}/{:<4} {ratio:>5}{flag}\n",
            building.locality, u.total, u.ideal_sum
        ));
    }

    let indices: Vec<String> = below.iter().map(|b| b.0.to_string()).collect();
    out.push_str(&format!("\nBelow threshold: [{}]\n", indices.join(", ")));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::{Building, Student};

    use crate::audit::buildings_below_threshold;
    use crate::rebalance::assign_intake;

    fn sample() -> Campus {
        let mut campus = Campus::new();
        campus.add_building(Building::new(0, 0, "north").with_classroom(4, 1, 1));
        campus.add_building(Building::new(9, 9, "east"));
        campus.add_student(Student::new("ana", 1, 2, "north"));
        campus.add_student(Student::new("ben", 3, 4, "north"));
        assign_intake(&mut campus).unwrap();
        campus
    }

    #[test]
    fn pending_lists_names() {
        let out = format_pending(&sample());
        assert!(out.starts_with("Pending students (1):"));
        assert!(out.contains("ben (3, 4) [north]"));
    }

    #[test]
    fn assignments_group_by_building() {
        let out = format_assignments(&sample());
        assert!(out.contains("1 seated, 1 pending"));
        assert!(out.contains("Classroom 1: 1/1 seated (ideal 4, min 1)"));
        assert!(out.contains("    - ana"));
        assert!(out.contains("(no classrooms)"));
    }

    #[test]
    fn utilization_flags_buildings_below() {
        let campus = sample();
        let below = buildings_below_threshold(campus.buildings(), 0.5);
        let out = format_utilization(&campus, &below, 0.5);

        assert!(out.contains("threshold 50%"));
        assert!(out.contains("25%  ⚠️ below"));
        assert!(out.contains("n/a"));
        assert!(out.ends_with("Below threshold: [0]\n"));
    }
}
