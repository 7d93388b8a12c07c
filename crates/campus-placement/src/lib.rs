//! campus-placement — seats students in classrooms and rebalances buildings.
//!
//! Students are matched to the nearest building in their own locality that
//! still has a free seat, then seated in that building's first classroom
//! with room (greedy, first-fit). An audit drains every building whose
//! seated count falls below a fraction of its ideal capacity and retries
//! the pending list once.
//!
//! # Components
//!
//! - **`geometry`** — Euclidean distance on integer coordinates
//! - **`capacity`** — seat check and first-fit classroom selection
//! - **`matcher`** — nearest eligible building, with optional exclusions
//! - **`assign`** — the assignment operator
//! - **`rebalance`** — intake pass and reassignment driver
//! - **`audit`** — utilization auditor and below-threshold report
//! - **`notice`** / **`report`** — text rendering of outcomes and state
//!
//! # Architecture
//!
//! ```text
//! Campus (students, buildings, intake, pending)
//!   ├── assign_intake ──┐
//!   ├── reassign_pending┴─ find_nearest_building → assign → select_classroom
//!   └── audit
//!       ├── evict_underutilized (drain → pending)
//!       └── reassign_pending (once)
//! ```

pub mod assign;
pub mod audit;
pub mod capacity;
pub mod error;
pub mod geometry;
pub mod matcher;
pub mod notice;
pub mod rebalance;
pub mod report;

pub use assign::{Assignment, assign};
pub use audit::{
    AuditReport, Eviction, Utilization, audit, buildings_below_threshold, evict_underutilized, utilization,
};
pub use capacity::{has_capacity, select_classroom};
pub use error::{PlacementError, PlacementResult};
pub use geometry::distance;
pub use matcher::{BuildingMatch, find_nearest_building};
pub use notice::{Notice, audit_notices, pass_notices};
pub use rebalance::{Outcome, PassKind, PassReport, assign_intake, reassign_pending};
