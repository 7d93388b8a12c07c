//! Assignment operator — seats one student in one building.

use serde::Serialize;
use tracing::debug;

use campus_core::{BuildingId, Campus, StudentId};

use crate::capacity::select_classroom;
use crate::error::{PlacementError, PlacementResult};

/// A completed seat assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub student: StudentId,
    pub building: BuildingId,
    /// Classroom index within the building.
    pub classroom: usize,
}

/// Append `student` to the first classroom of `building` with a free seat.
///
/// Expects a building returned by the matcher, which guarantees a free seat
/// and a matching locality. Locality is not re-checked here.
pub fn assign(
    campus: &mut Campus,
    student: StudentId,
    building: BuildingId,
) -> PlacementResult<Assignment> {
    let name = campus
        .student(student)
        .map(|s| s.name.clone())
        .ok_or(PlacementError::UnknownStudent(student))?;
    let target = campus
        .building_mut(building)
        .ok_or(PlacementError::UnknownBuilding(building))?;
    let classroom =
        select_classroom(target).ok_or(PlacementError::NoClassroomAvailable(building))?;

    target.classrooms[classroom].assigned.push(student);

    debug!(
        student = %name,
        building = building.0,
        classroom,
        "seated student"
    );

    Ok(Assignment {
        student,
        building,
        classroom,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::{Building, Student};

    fn campus_with(building: Building) -> (Campus, StudentId) {
        let mut campus = Campus::new();
        campus.add_building(building);
        let id = campus.add_student(Student::new("ana", 0, 0, "n"));
        campus.take_intake();
        (campus, id)
    }

    #[test]
    fn seats_in_first_free_classroom() {
        let mut b = Building::new(0, 0, "n").with_classroom(1, 0, 1).with_classroom(4, 0, 4);
        b.classrooms[0].assigned.push(StudentId(50));
        let (mut campus, ana) = campus_with(b);

        let a = assign(&mut campus, ana, BuildingId(0)).unwrap();

        assert_eq!(a.classroom, 1);
        assert_eq!(campus.building(BuildingId(0)).unwrap().classrooms[1].assigned, vec![ana]);
    }

    #[test]
    fn saturated_building_is_an_invariant_error() {
        let (mut campus, ana) = campus_with(Building::new(0, 0, "n").with_classroom(0, 0, 0));

        let err = assign(&mut campus, ana, BuildingId(0)).unwrap_err();
        assert!(matches!(err, PlacementError::NoClassroomAvailable(BuildingId(0))));
        assert_eq!(campus.seated_count(), 0);
    }

    #[test]
    fn unknown_ids_are_rejected() {
        let (mut campus, ana) = campus_with(Building::new(0, 0, "n").with_classroom(1, 0, 1));

        assert!(matches!(
            assign(&mut campus, ana, BuildingId(3)),
            Err(PlacementError::UnknownBuilding(BuildingId(3)))
        ));
        assert!(matches!(
            assign(&mut campus, StudentId(8), BuildingId(0)),
            Err(PlacementError::UnknownStudent(StudentId(8)))
        ));
    }
}
