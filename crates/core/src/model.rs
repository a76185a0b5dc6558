use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SchedulingError;

pub const REPORT_VERSION: &str = "1.0.0";

/// A position on the medium. Validated inputs are always non-negative.
pub type Track = u64;

/// Highest accepted track. Keeps every hop and any realistic seek total
/// within `u64`.
pub const MAX_TRACK: Track = u32::MAX as Track;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PolicyId {
    #[serde(rename = "FCFS")]
    Fcfs,
    #[serde(rename = "SSTF")]
    Sstf,
    #[serde(rename = "SCAN")]
    Scan,
    #[serde(rename = "C-SCAN")]
    CScan,
    #[serde(rename = "LOOK")]
    Look,
    #[serde(rename = "C-LOOK")]
    CLook,
}

impl PolicyId {
    pub const ALL: [PolicyId; 6] = [
        PolicyId::Fcfs,
        PolicyId::Sstf,
        PolicyId::Scan,
        PolicyId::CScan,
        PolicyId::Look,
        PolicyId::CLook,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PolicyId::Fcfs => "FCFS",
            PolicyId::Sstf => "SSTF",
            PolicyId::Scan => "SCAN",
            PolicyId::CScan => "C-SCAN",
            PolicyId::Look => "LOOK",
            PolicyId::CLook => "C-LOOK",
        }
    }

    /// SCAN and C-SCAN travel to the physical edge and need the disk bound.
    pub fn requires_disk_bound(self) -> bool {
        matches!(self, PolicyId::Scan | PolicyId::CScan)
    }
}

impl fmt::Display for PolicyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyId {
    type Err = SchedulingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        PolicyId::ALL
            .into_iter()
            .find(|policy| policy.as_str() == value)
            .ok_or_else(|| SchedulingError::UnknownPolicy(value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum VisitKind {
    Head,
    Request,
    Boundary,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Visit {
    pub track: Track,
    pub kind: VisitKind,
}

impl Visit {
    pub fn head(track: Track) -> Self {
        Self {
            track,
            kind: VisitKind::Head,
        }
    }

    pub fn request(track: Track) -> Self {
        Self {
            track,
            kind: VisitKind::Request,
        }
    }

    pub fn boundary(track: Track) -> Self {
        Self {
            track,
            kind: VisitKind::Boundary,
        }
    }
}

/// Raw scheduling input as a caller hands it over.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleRequest {
    pub policy: String,
    pub requests: Vec<i64>,
    pub head: i64,
    #[serde(default)]
    pub disk_size: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleOutcome {
    pub policy: PolicyId,
    pub head: Track,
    pub requests: Vec<Track>,
    /// Only recorded for policies that consume it.
    pub disk_size: Option<Track>,
    pub visits: Vec<Visit>,
    pub order: Vec<Track>,
    pub seek_times: Vec<u64>,
    pub total_seek: u64,
    pub avg_seek: f64,
}

/// One transition of the visit sequence, i.e. one row of the results table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleStep {
    pub index: usize,
    pub from: Track,
    pub to: Track,
    pub distance: u64,
    pub kind: VisitKind,
}

impl ScheduleOutcome {
    pub fn steps(&self) -> Vec<ScheduleStep> {
        self.visits
            .windows(2)
            .zip(&self.seek_times)
            .enumerate()
            .map(|(index, (pair, distance))| ScheduleStep {
                index: index + 1,
                from: pair[0].track,
                to: pair[1].track,
                distance: *distance,
                kind: pair[1].kind,
            })
            .collect()
    }

    /// Request tracks in service order, without the head or boundary hops.
    pub fn serviced_requests(&self) -> Vec<Track> {
        self.visits
            .iter()
            .filter(|visit| visit.kind == VisitKind::Request)
            .map(|visit| visit.track)
            .collect()
    }

    pub fn boundary_visits(&self) -> usize {
        self.visits
            .iter()
            .filter(|visit| visit.kind == VisitKind::Boundary)
            .count()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleReport {
    pub report_version: String,
    pub generated_at: String,
    pub outcome: ScheduleOutcome,
    pub steps: Vec<ScheduleStep>,
}

#[cfg(test)]
mod tests {
    use super::PolicyId;
    use crate::error::SchedulingError;

    #[test]
    fn policy_names_round_trip_case_sensitively() {
        for policy in PolicyId::ALL {
            assert_eq!(policy.as_str().parse::<PolicyId>(), Ok(policy));
        }
        assert_eq!(
            "c-scan".parse::<PolicyId>(),
            Err(SchedulingError::UnknownPolicy("c-scan".to_string()))
        );
        assert!("CSCAN".parse::<PolicyId>().is_err());
    }

    #[test]
    fn serde_uses_canonical_names() {
        let payload = serde_json::to_string(&PolicyId::CLook).expect("serializes");
        assert_eq!(payload, "\"C-LOOK\"");
        let parsed: PolicyId = serde_json::from_str("\"C-SCAN\"").expect("parses");
        assert_eq!(parsed, PolicyId::CScan);
    }

    #[test]
    fn only_scan_family_edges_need_a_bound() {
        let bounded = PolicyId::ALL
            .into_iter()
            .filter(|policy| policy.requires_disk_bound())
            .collect::<Vec<_>>();
        assert_eq!(bounded, vec![PolicyId::Scan, PolicyId::CScan]);
    }
}
