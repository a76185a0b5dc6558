use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::Track;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulingError {
    #[error("no track requests were supplied")]
    EmptyRequestSet,
    #[error("invalid track {value}: tracks must be integers between 0 and {}", crate::model::MAX_TRACK)]
    InvalidTrack { value: i64 },
    #[error(
        "disk bound {} does not cover the highest referenced track {}",
        describe_bound(.disk_size),
        .max_track
    )]
    DiskBoundTooSmall {
        disk_size: Option<Track>,
        max_track: Track,
    },
    #[error(
        "unknown scheduling policy {0:?}; expected one of FCFS, SSTF, SCAN, C-SCAN, LOOK, C-LOOK"
    )]
    UnknownPolicy(String),
}

/// Stable, serializable discriminant of [`SchedulingError`], used by fixture suites.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    EmptyRequestSet,
    InvalidTrack,
    DiskBoundTooSmall,
    UnknownPolicy,
}

impl SchedulingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SchedulingError::EmptyRequestSet => ErrorKind::EmptyRequestSet,
            SchedulingError::InvalidTrack { .. } => ErrorKind::InvalidTrack,
            SchedulingError::DiskBoundTooSmall { .. } => ErrorKind::DiskBoundTooSmall,
            SchedulingError::UnknownPolicy(_) => ErrorKind::UnknownPolicy,
        }
    }
}

fn describe_bound(disk_size: &Option<Track>) -> String {
    match disk_size {
        Some(size) => size.to_string(),
        None => "(missing)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{ErrorKind, SchedulingError};

    #[test]
    fn messages_name_the_offending_values() {
        let err = SchedulingError::DiskBoundTooSmall {
            disk_size: Some(200),
            max_track: 250,
        };
        assert_eq!(
            err.to_string(),
            "disk bound 200 does not cover the highest referenced track 250"
        );

        let missing = SchedulingError::DiskBoundTooSmall {
            disk_size: None,
            max_track: 40,
        };
        assert!(missing.to_string().contains("(missing)"));

        let unknown = SchedulingError::UnknownPolicy("XYZZY".to_string());
        assert!(unknown.to_string().contains("\"XYZZY\""));
        assert_eq!(unknown.kind(), ErrorKind::UnknownPolicy);
    }

    #[test]
    fn kind_serializes_as_snake_case() {
        let payload = serde_json::to_string(&ErrorKind::DiskBoundTooSmall).expect("serializes");
        assert_eq!(payload, "\"disk_bound_too_small\"");
    }
}
