use tracing::debug;

use crate::error::SchedulingError;
use crate::model::{PolicyId, ScheduleOutcome, ScheduleRequest, Track, MAX_TRACK};
use crate::policy;
use crate::seek::seek_profile;

/// A request batch that passed the track checks.
#[derive(Debug, Clone)]
pub(crate) struct TrackBatch {
    pub requests: Vec<Track>,
    pub head: Track,
}

/// Runs `policy` (one of the six canonical names) over the batch.
pub fn schedule(
    policy: &str,
    requests: &[i64],
    head: i64,
    disk_size: Option<i64>,
) -> Result<ScheduleOutcome, SchedulingError> {
    let policy = policy.parse::<PolicyId>()?;
    schedule_policy(policy, requests, head, disk_size)
}

pub fn schedule_policy(
    policy: PolicyId,
    requests: &[i64],
    head: i64,
    disk_size: Option<i64>,
) -> Result<ScheduleOutcome, SchedulingError> {
    let batch = validate_tracks(requests, head)?;
    let disk_size = if policy.requires_disk_bound() {
        Some(validate_disk_bound(&batch, disk_size)?)
    } else {
        None
    };

    debug!(
        policy = %policy,
        requests = batch.requests.len(),
        head = batch.head,
        "dispatching schedule"
    );

    let visits = match (policy, disk_size) {
        (PolicyId::Fcfs, _) => policy::fcfs(&batch.requests, batch.head),
        (PolicyId::Sstf, _) => policy::sstf(&batch.requests, batch.head),
        (PolicyId::Look, _) => policy::look(&batch.requests, batch.head),
        (PolicyId::CLook, _) => policy::c_look(&batch.requests, batch.head),
        (PolicyId::Scan, Some(bound)) => policy::scan(&batch.requests, batch.head, bound),
        (PolicyId::CScan, Some(bound)) => policy::c_scan(&batch.requests, batch.head, bound),
        (PolicyId::Scan | PolicyId::CScan, None) => {
            return Err(SchedulingError::DiskBoundTooSmall {
                disk_size: None,
                max_track: batch.max_track(),
            })
        }
    };

    let order = visits.iter().map(|visit| visit.track).collect::<Vec<_>>();
    let profile = seek_profile(&order)?;

    Ok(ScheduleOutcome {
        policy,
        head: batch.head,
        requests: batch.requests,
        disk_size,
        visits,
        order,
        seek_times: profile.seek_times,
        total_seek: profile.total_seek,
        avg_seek: profile.avg_seek,
    })
}

impl ScheduleRequest {
    pub fn run(&self) -> Result<ScheduleOutcome, SchedulingError> {
        schedule(&self.policy, &self.requests, self.head, self.disk_size)
    }
}

impl TrackBatch {
    fn max_track(&self) -> Track {
        self.requests
            .iter()
            .copied()
            .fold(self.head, Track::max)
    }
}

pub(crate) fn validate_tracks(requests: &[i64], head: i64) -> Result<TrackBatch, SchedulingError> {
    if requests.is_empty() {
        return Err(SchedulingError::EmptyRequestSet);
    }

    let head = to_track(head)?;
    let requests = requests
        .iter()
        .map(|value| to_track(*value))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TrackBatch { requests, head })
}

fn validate_disk_bound(
    batch: &TrackBatch,
    disk_size: Option<i64>,
) -> Result<Track, SchedulingError> {
    let max_track = batch.max_track();
    let Some(raw) = disk_size else {
        return Err(SchedulingError::DiskBoundTooSmall {
            disk_size: None,
            max_track,
        });
    };

    let bound = to_track(raw)?;
    if bound < max_track {
        return Err(SchedulingError::DiskBoundTooSmall {
            disk_size: Some(bound),
            max_track,
        });
    }
    Ok(bound)
}

fn to_track(value: i64) -> Result<Track, SchedulingError> {
    match Track::try_from(value) {
        Ok(track) if track <= MAX_TRACK => Ok(track),
        _ => Err(SchedulingError::InvalidTrack { value }),
    }
}
