//! Ordering rules for the six scheduling policies.
//!
//! Every function returns the full visit sequence, head first. Inputs are
//! assumed validated by the engine: tracks are non-negative and, for the
//! SCAN family, `disk_size` covers every referenced track.

use crate::model::{Track, Visit};

/// Requests split around the head, each half sorted ascending.
struct Sweep {
    below: Vec<Track>,
    at_or_above: Vec<Track>,
}

impl Sweep {
    fn partition(requests: &[Track], head: Track) -> Self {
        let (mut below, mut at_or_above): (Vec<Track>, Vec<Track>) =
            requests.iter().partition(|track| **track < head);
        below.sort_unstable();
        at_or_above.sort_unstable();
        Self { below, at_or_above }
    }
}

pub fn fcfs(requests: &[Track], head: Track) -> Vec<Visit> {
    let mut visits = Vec::with_capacity(requests.len() + 1);
    visits.push(Visit::head(head));
    visits.extend(requests.iter().copied().map(Visit::request));
    visits
}

/// Greedy nearest-request selection. Ties go to the earliest remaining
/// request in input order. O(n^2): each step scans what is left.
pub fn sstf(requests: &[Track], head: Track) -> Vec<Visit> {
    let mut visits = Vec::with_capacity(requests.len() + 1);
    visits.push(Visit::head(head));

    let mut remaining = requests.to_vec();
    let mut current = head;
    while let Some(index) = nearest_index(&remaining, current) {
        current = remaining.remove(index);
        visits.push(Visit::request(current));
    }
    visits
}

fn nearest_index(remaining: &[Track], current: Track) -> Option<usize> {
    remaining
        .iter()
        .enumerate()
        .min_by_key(|(_, track)| track.abs_diff(current))
        .map(|(index, _)| index)
}

/// Sweeps up to the disk bound, then back down. The lower edge is never
/// visited.
pub fn scan(requests: &[Track], head: Track, disk_size: Track) -> Vec<Visit> {
    let sweep = Sweep::partition(requests, head);
    let mut visits = Vec::with_capacity(requests.len() + 2);
    visits.push(Visit::head(head));
    visits.extend(sweep.at_or_above.iter().copied().map(Visit::request));
    visits.push(Visit::boundary(disk_size));
    visits.extend(sweep.below.iter().rev().copied().map(Visit::request));
    visits
}

/// Sweeps up to the disk bound, wraps to track 0 and sweeps up again.
pub fn c_scan(requests: &[Track], head: Track, disk_size: Track) -> Vec<Visit> {
    let sweep = Sweep::partition(requests, head);
    let mut visits = Vec::with_capacity(requests.len() + 3);
    visits.push(Visit::head(head));
    visits.extend(sweep.at_or_above.iter().copied().map(Visit::request));
    visits.push(Visit::boundary(disk_size));
    visits.push(Visit::boundary(0));
    visits.extend(sweep.below.iter().copied().map(Visit::request));
    visits
}

pub fn look(requests: &[Track], head: Track) -> Vec<Visit> {
    let sweep = Sweep::partition(requests, head);
    let mut visits = Vec::with_capacity(requests.len() + 1);
    visits.push(Visit::head(head));
    visits.extend(sweep.at_or_above.iter().copied().map(Visit::request));
    visits.extend(sweep.below.iter().rev().copied().map(Visit::request));
    visits
}

/// Like LOOK, but jumps from the highest request straight to the lowest one.
pub fn c_look(requests: &[Track], head: Track) -> Vec<Visit> {
    let sweep = Sweep::partition(requests, head);
    let mut visits = Vec::with_capacity(requests.len() + 1);
    visits.push(Visit::head(head));
    visits.extend(sweep.at_or_above.iter().copied().map(Visit::request));
    visits.extend(sweep.below.iter().copied().map(Visit::request));
    visits
}

#[cfg(test)]
mod tests {
    use super::{c_look, c_scan, fcfs, look, scan, sstf};
    use crate::model::{Track, Visit, VisitKind};

    const REQUESTS: [Track; 8] = [98, 183, 37, 122, 14, 124, 65, 67];

    fn tracks(visits: &[Visit]) -> Vec<Track> {
        visits.iter().map(|visit| visit.track).collect()
    }

    #[test]
    fn fcfs_keeps_arrival_order() {
        assert_eq!(
            tracks(&fcfs(&REQUESTS, 53)),
            vec![53, 98, 183, 37, 122, 14, 124, 65, 67]
        );
    }

    #[test]
    fn sstf_follows_nearest_request() {
        assert_eq!(
            tracks(&sstf(&REQUESTS, 53)),
            vec![53, 65, 67, 37, 14, 98, 122, 124, 183]
        );
    }

    #[test]
    fn sstf_breaks_ties_by_input_order() {
        assert_eq!(tracks(&sstf(&[60, 40], 50)), vec![50, 60, 40]);
        assert_eq!(tracks(&sstf(&[40, 60], 50)), vec![50, 40, 60]);
    }

    #[test]
    fn sstf_services_duplicates_once_each() {
        assert_eq!(tracks(&sstf(&[7, 7, 3], 5)), vec![5, 7, 7, 3]);
    }

    #[test]
    fn scan_visits_upper_edge_only() {
        let visits = scan(&REQUESTS, 53, 200);
        assert_eq!(
            tracks(&visits),
            vec![53, 65, 67, 98, 122, 124, 183, 200, 37, 14]
        );
        assert_eq!(visits[7].kind, VisitKind::Boundary);
        assert!(visits.iter().all(|visit| visit.track != 0));
    }

    #[test]
    fn c_scan_wraps_through_both_edges() {
        let visits = c_scan(&REQUESTS, 53, 200);
        assert_eq!(
            tracks(&visits),
            vec![53, 65, 67, 98, 122, 124, 183, 200, 0, 14, 37]
        );
        let boundaries = visits
            .iter()
            .filter(|visit| visit.kind == VisitKind::Boundary)
            .map(|visit| visit.track)
            .collect::<Vec<_>>();
        assert_eq!(boundaries, vec![200, 0]);
    }

    #[test]
    fn look_reverses_without_edges() {
        assert_eq!(
            tracks(&look(&REQUESTS, 53)),
            vec![53, 65, 67, 98, 122, 124, 183, 37, 14]
        );
    }

    #[test]
    fn c_look_jumps_to_lowest_request() {
        assert_eq!(
            tracks(&c_look(&REQUESTS, 53)),
            vec![53, 65, 67, 98, 122, 124, 183, 14, 37]
        );
    }

    #[test]
    fn request_on_head_is_swept_first() {
        assert_eq!(tracks(&look(&[10, 53, 90], 53)), vec![53, 53, 90, 10]);
    }

    #[test]
    fn scan_still_hits_edge_when_nothing_is_above_head() {
        assert_eq!(tracks(&scan(&[5, 20], 30, 99)), vec![30, 99, 20, 5]);
    }

    #[test]
    fn request_on_edge_is_kept_distinct_from_boundary() {
        let visits = c_scan(&[200, 10], 50, 200);
        assert_eq!(tracks(&visits), vec![50, 200, 200, 0, 10]);
        assert_eq!(visits[1].kind, VisitKind::Request);
        assert_eq!(visits[2].kind, VisitKind::Boundary);
    }
}
