use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};

use crate::model::{ScheduleOutcome, ScheduleReport, REPORT_VERSION};

pub fn build_report(outcome: &ScheduleOutcome) -> ScheduleReport {
    ScheduleReport {
        report_version: REPORT_VERSION.to_string(),
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        outcome: outcome.clone(),
        steps: outcome.steps(),
    }
}

pub fn write_report(report: &ScheduleReport, output_path: impl AsRef<Path>) -> Result<()> {
    let path = output_path.as_ref();
    let payload =
        serde_json::to_string_pretty(report).context("failed to serialize schedule report")?;
    fs::write(path, payload)
        .with_context(|| format!("failed to write schedule report to {}", path.display()))?;
    Ok(())
}
