use serde::{Deserialize, Serialize};

use disk_sched_core::Track;

/// A point of the animated path: x is the track, y the visit index.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PathPoint {
    pub track: Track,
    pub step: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlaybackFrame {
    pub seq: u64,
    pub points: Vec<PathPoint>,
    pub complete: bool,
}

/// One frame per prefix of `order`, the last one carrying the full path.
pub fn build_frames(order: &[Track]) -> Vec<PlaybackFrame> {
    let points = order
        .iter()
        .enumerate()
        .map(|(step, track)| PathPoint {
            track: *track,
            step,
        })
        .collect::<Vec<_>>();

    (1..=points.len())
        .map(|revealed| PlaybackFrame {
            seq: revealed as u64,
            points: points[..revealed].to_vec(),
            complete: revealed == points.len(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{build_frames, PathPoint};

    #[test]
    fn frames_reveal_one_point_at_a_time() {
        let frames = build_frames(&[53, 65, 67]);
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].seq, 1);
        assert_eq!(frames[0].points, vec![PathPoint { track: 53, step: 0 }]);
        assert!(!frames[1].complete);
        assert!(frames[2].complete);
        assert_eq!(frames[2].points[2], PathPoint { track: 67, step: 2 });
    }

    #[test]
    fn empty_order_has_no_frames() {
        assert!(build_frames(&[]).is_empty());
    }
}
