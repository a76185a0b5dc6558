pub mod input;
pub mod playback;
pub mod service;

pub use input::{parse_optional_track_field, parse_requests, parse_track_field};
pub use playback::{build_frames, PathPoint, PlaybackFrame};
pub use service::{
    cancel_playback, forget_playback, get_playback_session, poll_playback_frames,
    restart_playback, run_comparison, run_simulation, simulation_view, start_playback,
    PlaybackOptions, PlaybackSnapshot, PlaybackStatus, SimulationRequest, SimulationView,
    TableRow,
};
