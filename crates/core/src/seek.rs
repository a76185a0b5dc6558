use serde::{Deserialize, Serialize};

use crate::error::SchedulingError;
use crate::model::{Track, MAX_TRACK};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeekProfile {
    pub seek_times: Vec<u64>,
    pub total_seek: u64,
    pub avg_seek: f64,
}

/// Per-step head movement for a visit sequence, shared by every policy.
///
/// A sequence shorter than two tracks has no transitions and no defined
/// average, so it is rejected as an empty request set. Tracks above
/// [`MAX_TRACK`] are rejected so the total cannot overflow.
pub fn seek_profile(order: &[Track]) -> Result<SeekProfile, SchedulingError> {
    if order.len() < 2 {
        return Err(SchedulingError::EmptyRequestSet);
    }
    if let Some(&track) = order.iter().find(|track| **track > MAX_TRACK) {
        return Err(SchedulingError::InvalidTrack {
            value: i64::try_from(track).unwrap_or(i64::MAX),
        });
    }

    let seek_times = order
        .windows(2)
        .map(|pair| pair[1].abs_diff(pair[0]))
        .collect::<Vec<_>>();
    let total_seek = seek_times.iter().sum::<u64>();
    let avg_seek = total_seek as f64 / seek_times.len() as f64;

    Ok(SeekProfile {
        seek_times,
        total_seek,
        avg_seek,
    })
}
