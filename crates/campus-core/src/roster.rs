//! Roster files — bulk student and building entry.
//!
//! A roster is TOML by default, JSON when the file extension is `.json`:
//!
//! ```toml
//! [[students]]
//! name = "ana"
//! x = 3
//! y = 4
//! locality = "north"
//!
//! [[buildings]]
//! x = 0
//! y = 0
//! locality = "north"
//!
//! [[buildings.classrooms]]
//! ideal = 20
//! min = 5
//! max = 25
//! ```
//!
//! Values are taken as given. Capacity bounds are not cross-checked.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::campus::Campus;
use crate::error::{CoreError, CoreResult};
use crate::types::{Building, Classroom, Student};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub students: Vec<StudentRecord>,
    #[serde(default)]
    pub buildings: Vec<BuildingRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub locality: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingRecord {
    pub x: i32,
    pub y: i32,
    pub locality: String,
    #[serde(default)]
    pub classrooms: Vec<ClassroomRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassroomRecord {
    pub ideal: u32,
    pub min: u32,
    pub max: u32,
}

/// On-disk roster encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFormat {
    Toml,
    Json,
}

impl RosterFormat {
    /// Pick the format from a file extension; anything but `.json` is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => RosterFormat::Json,
            _ => RosterFormat::Toml,
        }
    }

    pub fn parse(name: &str) -> CoreResult<Self> {
        match name {
            "toml" => Ok(RosterFormat::Toml),
            "json" => Ok(RosterFormat::Json),
            other => Err(CoreError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl Roster {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading roster {}", path.display()))?;
        let roster = Self::from_str_as(&content, RosterFormat::from_path(path))
            .with_context(|| format!("parsing roster {}", path.display()))?;
        Ok(roster)
    }

    pub fn from_str_as(content: &str, format: RosterFormat) -> CoreResult<Self> {
        match format {
            RosterFormat::Toml => toml::from_str(content).map_err(|e| CoreError::Parse(e.to_string())),
            RosterFormat::Json => {
                serde_json::from_str(content).map_err(|e| CoreError::Parse(e.to_string()))
            }
        }
    }

    /// Append every record, in file order, to `campus`. Students land in intake.
    pub fn load_into(&self, campus: &mut Campus) {
        for b in &self.buildings {
            let mut building = Building::new(b.x, b.y, b.locality.clone());
            building.classrooms = b
                .classrooms
                .iter()
                .map(|c| Classroom::new(c.ideal, c.min, c.max))
                .collect();
            campus.add_building(building);
        }
        for s in &self.students {
            campus.add_student(Student::new(s.name.clone(), s.x, s.y, s.locality.clone()));
        }
    }

    pub fn into_campus(self) -> Campus {
        let mut campus = Campus::new();
        self.load_into(&mut campus);
        campus
    }
}
