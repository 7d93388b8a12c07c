//! `campus assign | pending | utilization` — one placement cycle per invocation.
//!
//! Nothing persists between runs: every command loads the roster into a
//! fresh campus, runs the requested passes, and prints the result.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::debug;

use campus_core::{Campus, CampusConfig, Roster};
use campus_placement::{
    AuditReport, PassReport, assign_intake, audit, audit_notices, buildings_below_threshold,
    pass_notices, report,
};

/// State after a full intake + audit cycle.
#[derive(Debug, Serialize)]
pub struct Session {
    pub campus: Campus,
    pub intake: PassReport,
    pub audit: Option<AuditReport>,
    #[serde(skip)]
    pub config: CampusConfig,
}

fn load(roster: &str, config: Option<&str>) -> Result<(Campus, CampusConfig)> {
    let config = match config {
        Some(path) => CampusConfig::from_file(Path::new(path))
            .with_context(|| format!("loading config {path}"))?,
        None => CampusConfig::default(),
    };
    let campus = Roster::from_file(Path::new(roster))?.into_campus();
    debug!(
        students = campus.students().len(),
        buildings = campus.buildings().len(),
        "roster loaded"
    );
    Ok((campus, config))
}

/// Load, seat, and optionally audit.
pub fn run_cycle(roster: &str, config: Option<&str>, with_audit: bool) -> Result<Session> {
    let (mut campus, config) = load(roster, config)?;

    let intake = assign_intake(&mut campus)?;
    let audit = if with_audit {
        Some(audit(&mut campus, &config.rebalance)?)
    } else {
        None
    };

    let violations = campus.check_invariants();
    if !violations.is_empty() {
        bail!("campus invariants violated after placement: {violations:?}");
    }

    Ok(Session {
        campus,
        intake,
        audit,
        config,
    })
}

/// Every notice from the cycle, in the order it happened.
pub fn notice_lines(session: &Session) -> Vec<String> {
    let mut lines: Vec<String> = pass_notices(&session.campus, &session.intake)
        .iter()
        .map(ToString::to_string)
        .collect();
    if let Some(report) = &session.audit {
        lines.extend(audit_notices(&session.campus, report).iter().map(ToString::to_string));
    }
    lines
}

pub fn render_assign(session: &Session, format: &str) -> Result<String> {
    match format {
        "json" => Ok(serde_json::to_string_pretty(session)?),
        "text" => {
            let mut out = String::new();
            for line in notice_lines(session) {
                out.push_str(&line);
                out.push('\n');
            }
            out.push('\n');
            out.push_str(&report::format_assignments(&session.campus));
            Ok(out)
        }
        other => bail!("unknown output format: {other} (expected text or json)"),
    }
}

pub fn assign(roster: &str, config: Option<&str>, format: &str) -> Result<()> {
    let session = run_cycle(roster, config, true)?;
    println!("{}", render_assign(&session, format)?);
    Ok(())
}

pub fn pending(roster: &str, config: Option<&str>) -> Result<()> {
    let session = run_cycle(roster, config, true)?;
    println!("{}", report::format_pending(&session.campus));
    Ok(())
}

pub fn render_utilization(session: &Session) -> String {
    let threshold = session.config.rebalance.utilization_threshold;
    let below = buildings_below_threshold(session.campus.buildings(), threshold);
    report::format_utilization(&session.campus, &below, threshold)
}

pub fn utilization(roster: &str, config: Option<&str>) -> Result<()> {
    let session = run_cycle(roster, config, false)?;
    println!("{}", render_utilization(&session));
    Ok(())
}
