use crate::compare::PolicyComparison;
use crate::model::{ScheduleOutcome, VisitKind};

pub fn render_markdown_summary(outcome: &ScheduleOutcome) -> String {
    let mut out = String::new();
    out.push_str("# Disk Scheduling Summary\n\n");
    out.push_str(&format!(
        "- Policy: `{}`\n- Head position: `{}`\n- Requests: `{}`\n",
        outcome.policy,
        outcome.head,
        join_tracks(&outcome.requests)
    ));
    if let Some(disk_size) = outcome.disk_size {
        out.push_str(&format!("- Disk size: `{}`\n", disk_size));
    }
    out.push_str(&format!(
        "- Total seek time: `{}`\n- Average seek time: `{:.2}`\n\n",
        outcome.total_seek, outcome.avg_seek
    ));

    out.push_str("## Visit Order\n\n");
    out.push_str(&format!("`{}`\n\n", join_tracks(&outcome.order)));

    out.push_str("## Steps\n\n");
    out.push_str("| # | Next Track | Tracks Traversed |\n");
    out.push_str("|---|---|---|\n");
    for step in outcome.steps() {
        let marker = if step.kind == VisitKind::Boundary {
            " (boundary)"
        } else {
            ""
        };
        out.push_str(&format!(
            "| {} | {}{} | {} |\n",
            step.index, step.to, marker, step.distance
        ));
    }

    out
}

pub fn render_comparison_markdown(comparison: &PolicyComparison) -> String {
    let mut out = String::new();
    out.push_str("# Policy Comparison\n\n");
    out.push_str("| Policy | Total Seek | Average Seek | Note |\n");
    out.push_str("|---|---|---|---|\n");
    for entry in &comparison.entries {
        let total = entry
            .total_seek
            .map(|total| total.to_string())
            .unwrap_or_else(|| "-".to_string());
        let average = entry
            .avg_seek
            .map(|avg| format!("{avg:.2}"))
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            entry.policy,
            total,
            average,
            entry.error.as_deref().unwrap_or("")
        ));
    }

    out.push('\n');
    match comparison.best_policy {
        Some(best) => out.push_str(&format!("Lowest total seek: `{}`\n", best)),
        None => out.push_str("No policy could schedule this batch.\n"),
    }
    out
}

fn join_tracks(tracks: &[u64]) -> String {
    tracks
        .iter()
        .map(|track| track.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
