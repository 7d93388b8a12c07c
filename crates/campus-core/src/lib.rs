//! campus-core — domain types, registry, roster loading, and configuration.

pub mod campus;
pub mod config;
pub mod error;
pub mod roster;
pub mod types;

pub use campus::{Campus, InvariantViolation, Membership};
pub use config::{CampusConfig, RebalanceConfig, DEFAULT_UTILIZATION_THRESHOLD};
pub use error::{CoreError, CoreResult};
pub use roster::{Roster, RosterFormat};
pub use types::*;
