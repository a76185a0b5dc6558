use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::{schedule_policy, validate_tracks};
use crate::error::{ErrorKind, SchedulingError};
use crate::model::{PolicyId, Track};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PolicyComparison {
    pub entries: Vec<PolicyComparisonEntry>,
    pub best_policy: Option<PolicyId>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PolicyComparisonEntry {
    pub policy: PolicyId,
    #[serde(default)]
    pub order: Vec<Track>,
    pub total_seek: Option<u64>,
    pub avg_seek: Option<f64>,
    pub error_kind: Option<ErrorKind>,
    pub error: Option<String>,
}

/// Runs every policy over the same batch.
///
/// Batch-level problems (no requests, negative tracks) fail the whole
/// comparison. Policy-level problems, such as a missing disk bound for the
/// SCAN family, are recorded on that policy's entry.
pub fn compare_policies(
    requests: &[i64],
    head: i64,
    disk_size: Option<i64>,
) -> Result<PolicyComparison, SchedulingError> {
    validate_tracks(requests, head)?;

    let entries = PolicyId::ALL
        .into_iter()
        .map(|policy| match schedule_policy(policy, requests, head, disk_size) {
            Ok(outcome) => PolicyComparisonEntry {
                policy,
                order: outcome.order,
                total_seek: Some(outcome.total_seek),
                avg_seek: Some(outcome.avg_seek),
                error_kind: None,
                error: None,
            },
            Err(err) => {
                debug!(policy = %policy, error = %err, "policy skipped in comparison");
                PolicyComparisonEntry {
                    policy,
                    order: Vec::new(),
                    total_seek: None,
                    avg_seek: None,
                    error_kind: Some(err.kind()),
                    error: Some(err.to_string()),
                }
            }
        })
        .collect::<Vec<_>>();

    let best_policy = entries
        .iter()
        .filter_map(|entry| entry.total_seek.map(|total| (entry.policy, total)))
        .min_by_key(|(_, total)| *total)
        .map(|(policy, _)| policy);

    Ok(PolicyComparison {
        entries,
        best_policy,
    })
}
