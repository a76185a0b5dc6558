use std::collections::HashMap;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Result};
use disk_sched_core::{compare_policies, schedule, PolicyComparison, ScheduleOutcome, Track};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::input::{parse_optional_track_field, parse_requests, parse_track_field};
use crate::playback::{build_frames, PlaybackFrame};

/// The raw form fields of one simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    #[serde(default = "default_policy")]
    pub policy: String,
    pub requests: String,
    pub head: String,
    #[serde(default)]
    pub disk_size: Option<String>,
}

fn default_policy() -> String {
    "FCFS".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableRow {
    pub next_track: Track,
    pub tracks_traversed: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationView {
    pub outcome: ScheduleOutcome,
    pub summary_label: String,
    pub table: Vec<TableRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackOptions {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

fn default_interval_ms() -> u64 {
    1_000
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackStatus {
    Running,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    pub session_id: String,
    pub status: PlaybackStatus,
    pub revealed_frames: u64,
    pub total_frames: u64,
    pub interval_ms: u64,
}

#[derive(Debug)]
struct PlaybackSession {
    status: PlaybackStatus,
    frames: Vec<PlaybackFrame>,
    revealed: usize,
    interval_ms: u64,
    cancel_flag: Arc<AtomicBool>,
}

static SESSIONS: Lazy<Mutex<HashMap<String, PlaybackSession>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Parses the form fields, runs the engine and shapes the result for display.
///
/// Engine failures keep their [`disk_sched_core::SchedulingError`] type and can be
/// recovered with `downcast_ref`.
pub fn run_simulation(request: &SimulationRequest) -> Result<SimulationView> {
    let requests = parse_requests(&request.requests)?;
    let head = parse_track_field("head position", &request.head)?;
    let disk_size = parse_optional_track_field("disk size", request.disk_size.as_deref())?;

    let outcome = schedule(request.policy.trim(), &requests, head, disk_size)?;
    Ok(simulation_view(outcome))
}

pub fn simulation_view(outcome: ScheduleOutcome) -> SimulationView {
    let summary_label = format!(
        "Total Seek Time: {}\nAverage Seek Time: {:.2}",
        outcome.total_seek, outcome.avg_seek
    );
    let table = outcome
        .order
        .iter()
        .skip(1)
        .zip(&outcome.seek_times)
        .map(|(next_track, tracks_traversed)| TableRow {
            next_track: *next_track,
            tracks_traversed: *tracks_traversed,
        })
        .collect();

    SimulationView {
        outcome,
        summary_label,
        table,
    }
}

pub fn run_comparison(
    requests: &str,
    head: &str,
    disk_size: Option<&str>,
) -> Result<PolicyComparison> {
    let requests = parse_requests(requests)?;
    let head = parse_track_field("head position", head)?;
    let disk_size = parse_optional_track_field("disk size", disk_size)?;
    Ok(compare_policies(&requests, head, disk_size)?)
}

pub fn start_playback(outcome: &ScheduleOutcome, options: PlaybackOptions) -> Result<String> {
    let session_id = Uuid::new_v4().to_string();
    let cancel_flag = Arc::new(AtomicBool::new(false));
    let frames = build_frames(&outcome.order);

    {
        let mut sessions = lock_sessions()?;
        sessions.insert(
            session_id.clone(),
            PlaybackSession {
                status: PlaybackStatus::Running,
                frames,
                revealed: 0,
                interval_ms: options.interval_ms,
                cancel_flag: Arc::clone(&cancel_flag),
            },
        );
    }

    info!(
        session = %session_id,
        policy = %outcome.policy,
        points = outcome.order.len(),
        "playback started"
    );
    spawn_reveal_worker(session_id.clone(), cancel_flag, options.interval_ms);
    Ok(session_id)
}

pub fn poll_playback_frames(session_id: &str, from_seq: u64) -> Result<Vec<PlaybackFrame>> {
    let sessions = lock_sessions()?;
    let session = sessions
        .get(session_id)
        .ok_or_else(|| anyhow!("playback session not found: {session_id}"))?;

    Ok(session.frames[..session.revealed]
        .iter()
        .filter(|frame| frame.seq > from_seq)
        .cloned()
        .collect())
}

pub fn get_playback_session(session_id: &str) -> Result<PlaybackSnapshot> {
    let sessions = lock_sessions()?;
    let session = sessions
        .get(session_id)
        .ok_or_else(|| anyhow!("playback session not found: {session_id}"))?;

    Ok(PlaybackSnapshot {
        session_id: session_id.to_string(),
        status: session.status.clone(),
        revealed_frames: session.revealed as u64,
        total_frames: session.frames.len() as u64,
        interval_ms: session.interval_ms,
    })
}

pub fn cancel_playback(session_id: &str) -> Result<PlaybackSnapshot> {
    {
        let mut sessions = lock_sessions()?;
        let session = sessions
            .get_mut(session_id)
            .ok_or_else(|| anyhow!("playback session not found: {session_id}"))?;

        session.cancel_flag.store(true, Ordering::Relaxed);
        if session.status == PlaybackStatus::Running {
            session.status = PlaybackStatus::Cancelled;
        }
    }
    get_playback_session(session_id)
}

/// Drops a session from the registry, stopping its worker. Callers that
/// are done with a playback use this so sessions do not pile up.
pub fn forget_playback(session_id: &str) -> Result<PlaybackSnapshot> {
    let snapshot = get_playback_session(session_id)?;
    let mut sessions = lock_sessions()?;
    let session = sessions
        .remove(session_id)
        .ok_or_else(|| anyhow!("playback session not found: {session_id}"))?;
    session.cancel_flag.store(true, Ordering::Relaxed);
    info!(session = %session_id, "playback session released");
    Ok(snapshot)
}

/// Replays the same precomputed frames from the start. Any worker still
/// revealing the previous run is told to stop.
pub fn restart_playback(session_id: &str) -> Result<PlaybackSnapshot> {
    let (cancel_flag, interval_ms) = {
        let mut sessions = lock_sessions()?;
        let session = sessions
            .get_mut(session_id)
            .ok_or_else(|| anyhow!("playback session not found: {session_id}"))?;

        session.cancel_flag.store(true, Ordering::Relaxed);
        let cancel_flag = Arc::new(AtomicBool::new(false));
        session.cancel_flag = Arc::clone(&cancel_flag);
        session.revealed = 0;
        session.status = PlaybackStatus::Running;
        (cancel_flag, session.interval_ms)
    };

    info!(session = %session_id, "playback restarted");
    spawn_reveal_worker(session_id.to_string(), cancel_flag, interval_ms);
    get_playback_session(session_id)
}

fn spawn_reveal_worker(session_id: String, cancel_flag: Arc<AtomicBool>, interval_ms: u64) {
    thread::spawn(move || loop {
        let finished = match lock_sessions() {
            Ok(mut sessions) => match sessions.get_mut(&session_id) {
                // The flag is only flipped under the registry lock, so a
                // stale worker cannot publish after a restart.
                Some(session) if !cancel_flag.load(Ordering::Relaxed) => {
                    if session.revealed < session.frames.len() {
                        session.revealed += 1;
                    }
                    if session.revealed == session.frames.len() {
                        session.status = PlaybackStatus::Completed;
                        true
                    } else {
                        false
                    }
                }
                _ => true,
            },
            Err(_) => true,
        };

        if finished {
            break;
        }
        thread::sleep(Duration::from_millis(interval_ms));
    });
}

fn lock_sessions() -> Result<std::sync::MutexGuard<'static, HashMap<String, PlaybackSession>>> {
    SESSIONS
        .lock()
        .map_err(|_| anyhow!("playback session registry lock poisoned"))
}
