use disk_sched_core::{schedule_policy, PolicyId, ScheduleOutcome, Track, VisitKind};
use proptest::prelude::*;

const DISK_SIZE: i64 = 500;

fn batch() -> impl Strategy<Value = (Vec<i64>, i64)> {
    (
        prop::collection::vec(0..=DISK_SIZE, 1..24),
        0..=DISK_SIZE,
    )
}

fn sorted(mut tracks: Vec<Track>) -> Vec<Track> {
    tracks.sort_unstable();
    tracks
}

fn run(policy: PolicyId, requests: &[i64], head: i64) -> ScheduleOutcome {
    schedule_policy(policy, requests, head, Some(DISK_SIZE)).expect("valid batch schedules")
}

proptest! {
    #[test]
    fn prop_every_policy_starts_at_head_and_services_each_request_once(
        (requests, head) in batch()
    ) {
        let expected = sorted(requests.iter().map(|r| *r as Track).collect());
        for policy in PolicyId::ALL {
            let outcome = run(policy, &requests, head);
            prop_assert_eq!(outcome.order[0], head as Track);
            prop_assert_eq!(outcome.visits[0].kind, VisitKind::Head);
            prop_assert_eq!(sorted(outcome.serviced_requests()), expected.clone());
        }
    }

    #[test]
    fn prop_seek_metrics_are_consistent((requests, head) in batch()) {
        for policy in PolicyId::ALL {
            let outcome = run(policy, &requests, head);
            prop_assert_eq!(outcome.seek_times.len(), outcome.order.len() - 1);
            for (i, distance) in outcome.seek_times.iter().enumerate() {
                prop_assert_eq!(*distance, outcome.order[i + 1].abs_diff(outcome.order[i]));
            }
            prop_assert_eq!(outcome.total_seek, outcome.seek_times.iter().sum::<u64>());
            let average = outcome.total_seek as f64 / outcome.seek_times.len() as f64;
            prop_assert!((outcome.avg_seek - average).abs() < 1e-9);
        }
    }

    #[test]
    fn prop_fcfs_preserves_input_order((requests, head) in batch()) {
        let outcome = run(PolicyId::Fcfs, &requests, head);
        let tail = outcome.order[1..].iter().map(|t| *t as i64).collect::<Vec<_>>();
        prop_assert_eq!(tail, requests);
    }

    #[test]
    fn prop_sstf_always_takes_a_nearest_request((requests, head) in batch()) {
        let outcome = run(PolicyId::Sstf, &requests, head);
        let mut remaining = requests.iter().map(|r| *r as Track).collect::<Vec<_>>();
        for pair in outcome.order.windows(2) {
            let (from, chosen) = (pair[0], pair[1]);
            let nearest = remaining.iter().map(|r| r.abs_diff(from)).min().expect("non-empty");
            prop_assert_eq!(chosen.abs_diff(from), nearest);
            let index = remaining.iter().position(|r| *r == chosen).expect("chosen is pending");
            remaining.remove(index);
        }
        prop_assert!(remaining.is_empty());
    }

    #[test]
    fn prop_sweeps_finish_upper_half_before_lower_half((requests, head) in batch()) {
        let head_track = head as Track;
        for policy in [PolicyId::Scan, PolicyId::CScan, PolicyId::Look, PolicyId::CLook] {
            let served = run(policy, &requests, head).serviced_requests();
            let split = served.iter().position(|t| *t < head_track).unwrap_or(served.len());
            let (upper, lower) = served.split_at(split);

            prop_assert!(upper.iter().all(|t| *t >= head_track));
            prop_assert!(lower.iter().all(|t| *t < head_track));
            prop_assert!(upper.windows(2).all(|w| w[0] <= w[1]));
            match policy {
                PolicyId::CScan | PolicyId::CLook => {
                    prop_assert!(lower.windows(2).all(|w| w[0] <= w[1]));
                }
                _ => prop_assert!(lower.windows(2).all(|w| w[0] >= w[1])),
            }
        }
    }
}
