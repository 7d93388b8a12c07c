//! Seat availability and first-fit classroom selection.

use campus_core::{Building, Classroom};

/// True iff the classroom still has a free seat (`assigned < max_capacity`).
pub fn has_capacity(classroom: &Classroom) -> bool {
    classroom.assigned.len() < classroom.max_capacity as usize
}

/// Index of the first classroom, in stored order, with a free seat.
///
/// First-fit: neither the emptiest nor the tightest classroom is preferred.
/// Returns `None` for saturated buildings and buildings without classrooms.
pub fn select_classroom(building: &Building) -> Option<usize> {
    building.classrooms.iter().position(has_capacity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::StudentId;

    fn filled(ideal: u32, max: u32, seated: usize) -> Classroom {
        let mut c = Classroom::new(ideal, 0, max);
        c.assigned = (0..seated).map(StudentId).collect();
        c
    }

    #[test]
    fn capacity_is_strictly_below_max() {
        assert!(has_capacity(&filled(2, 2, 1)));
        assert!(!has_capacity(&filled(2, 2, 2)));
        assert!(!has_capacity(&filled(0, 0, 0)));
    }

    #[test]
    fn selects_first_fit_not_emptiest() {
        let mut b = campus_core::Building::new(0, 0, "n");
        b.classrooms = vec![filled(5, 1, 1), filled(5, 5, 4), filled(5, 5, 0)];
        assert_eq!(select_classroom(&b), Some(1));
    }

    #[test]
    fn saturated_or_empty_building_has_no_classroom() {
        let mut b = campus_core::Building::new(0, 0, "n");
        assert_eq!(select_classroom(&b), None);

        b.classrooms = vec![filled(1, 1, 1), filled(2, 2, 2)];
        assert_eq!(select_classroom(&b), None);
    }
}
