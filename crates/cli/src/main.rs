use std::fs;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use disk_sched_core::{
    build_report, evaluate_suite_file, render_comparison_markdown, render_markdown_summary,
    write_report, PolicyId, Track,
};
use disk_sched_service::{
    forget_playback, get_playback_session, poll_playback_frames, run_comparison, run_simulation,
    start_playback, PlaybackFrame, PlaybackOptions, PlaybackStatus, SimulationRequest,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "disk-sched",
    version,
    about = "Compute disk-scheduling visit orders and seek distances for a batch of track requests."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Schedule one batch with one policy and print the results table.
    Run(RunArgs),
    /// Schedule one batch with every policy and rank them by total seek.
    Compare(CompareArgs),
    /// Reveal the head path one point at a time.
    Animate(AnimateArgs),
    /// Check the engine against a JSON fixture suite.
    Eval(EvalArgs),
    /// List the supported policy identifiers.
    Policies,
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum CliPolicy {
    #[value(name = "FCFS")]
    Fcfs,
    #[value(name = "SSTF")]
    Sstf,
    #[value(name = "SCAN")]
    Scan,
    #[value(name = "C-SCAN")]
    CScan,
    #[value(name = "LOOK")]
    Look,
    #[value(name = "C-LOOK")]
    CLook,
}

impl From<CliPolicy> for PolicyId {
    fn from(value: CliPolicy) -> Self {
        match value {
            CliPolicy::Fcfs => PolicyId::Fcfs,
            CliPolicy::Sstf => PolicyId::Sstf,
            CliPolicy::Scan => PolicyId::Scan,
            CliPolicy::CScan => PolicyId::CScan,
            CliPolicy::Look => PolicyId::Look,
            CliPolicy::CLook => PolicyId::CLook,
        }
    }
}

#[derive(Debug, Args)]
struct BatchArgs {
    /// Pending track requests, comma-separated (e.g. "98,183,37").
    #[arg(long, value_name = "TRACKS", allow_hyphen_values = true)]
    requests: String,

    /// Starting head position.
    #[arg(long, value_name = "TRACK", allow_hyphen_values = true)]
    head: String,

    /// Highest addressable track. Required by SCAN and C-SCAN.
    #[arg(long, value_name = "TRACK", allow_hyphen_values = true)]
    disk_size: Option<String>,
}

impl BatchArgs {
    fn simulation_request(&self, policy: CliPolicy) -> SimulationRequest {
        SimulationRequest {
            policy: PolicyId::from(policy).to_string(),
            requests: self.requests.clone(),
            head: self.head.clone(),
            disk_size: self.disk_size.clone(),
        }
    }
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Scheduling policy.
    #[arg(long, default_value = "FCFS")]
    policy: CliPolicy,

    #[command(flatten)]
    batch: BatchArgs,

    /// Optional JSON report output file.
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Optional markdown summary output file.
    #[arg(long, value_name = "FILE")]
    md: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct CompareArgs {
    #[command(flatten)]
    batch: BatchArgs,

    /// Optional JSON output file for the comparison.
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Optional markdown output file for the comparison.
    #[arg(long, value_name = "FILE")]
    md: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct AnimateArgs {
    /// Scheduling policy.
    #[arg(long, default_value = "FCFS")]
    policy: CliPolicy,

    #[command(flatten)]
    batch: BatchArgs,

    /// Delay between revealed points.
    #[arg(long, default_value_t = 1_000, value_name = "MS")]
    interval_ms: u64,

    /// Width of the rendered track axis in characters.
    #[arg(long, default_value_t = 60)]
    width: usize,
}

#[derive(Debug, Args)]
struct EvalArgs {
    /// Evaluation suite JSON file.
    #[arg(long, value_name = "FILE", default_value = "fixtures/eval-suite.json")]
    suite: PathBuf,

    /// Optional JSON output file for evaluation result.
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => run_schedule_command(args),
        Commands::Compare(args) => run_compare_command(args),
        Commands::Animate(args) => run_animate_command(args),
        Commands::Eval(args) => run_eval_command(args),
        Commands::Policies => {
            run_policies_command();
            Ok(())
        }
    }
}

fn run_schedule_command(args: RunArgs) -> Result<()> {
    let view = run_simulation(&args.batch.simulation_request(args.policy))?;

    println!("Policy: {}", view.outcome.policy);
    println!("{}", view.summary_label);
    println!();
    println!("{:>4}  {:>10}  {:>16}", "#", "Next Track", "Tracks Traversed");
    for (index, row) in view.table.iter().enumerate() {
        println!(
            "{:>4}  {:>10}  {:>16}",
            index + 1,
            row.next_track,
            row.tracks_traversed
        );
    }

    if let Some(output) = args.output {
        let report = build_report(&view.outcome);
        write_report(&report, &output)?;
        println!("Report written to {}", output.display());
    }

    if let Some(md_path) = args.md {
        let markdown = render_markdown_summary(&view.outcome);
        fs::write(&md_path, markdown).with_context(|| {
            format!("failed to write markdown summary to {}", md_path.display())
        })?;
        println!("Markdown summary written to {}", md_path.display());
    }

    Ok(())
}

fn run_compare_command(args: CompareArgs) -> Result<()> {
    let comparison = run_comparison(
        &args.batch.requests,
        &args.batch.head,
        args.batch.disk_size.as_deref(),
    )?;

    for entry in &comparison.entries {
        match (entry.total_seek, entry.avg_seek) {
            (Some(total), Some(avg)) => println!(
                "- {:<7} total {:>6} | avg {:>8.2}",
                entry.policy.as_str(),
                total,
                avg
            ),
            _ => println!(
                "- {:<7} skipped: {}",
                entry.policy.as_str(),
                entry.error.as_deref().unwrap_or("no result")
            ),
        }
    }
    match comparison.best_policy {
        Some(best) => println!("Lowest total seek: {}", best),
        None => println!("No policy could schedule this batch."),
    }

    if let Some(output) = args.output {
        let payload = serde_json::to_string_pretty(&comparison)
            .context("failed to serialize comparison")?;
        fs::write(&output, payload)
            .with_context(|| format!("failed to write comparison to {}", output.display()))?;
        println!("Comparison JSON written to {}", output.display());
    }

    if let Some(md_path) = args.md {
        fs::write(&md_path, render_comparison_markdown(&comparison)).with_context(|| {
            format!("failed to write comparison markdown to {}", md_path.display())
        })?;
        println!("Comparison markdown written to {}", md_path.display());
    }

    Ok(())
}

fn run_animate_command(args: AnimateArgs) -> Result<()> {
    let view = run_simulation(&args.batch.simulation_request(args.policy))?;
    let axis_max = view.outcome.order.iter().copied().max().unwrap_or(0);
    let session_id = start_playback(
        &view.outcome,
        PlaybackOptions {
            interval_ms: args.interval_ms,
        },
    )?;

    println!(
        "Animating {} over tracks 0..={} ({} point(s))",
        view.outcome.policy,
        axis_max,
        view.outcome.order.len()
    );

    let mut last_seq = 0_u64;
    let poll_every = Duration::from_millis((args.interval_ms / 4).clamp(5, 250));
    loop {
        for frame in poll_playback_frames(&session_id, last_seq)? {
            println!("{}", render_frame(&frame, axis_max, args.width));
            last_seq = frame.seq;
        }

        let snapshot = get_playback_session(&session_id)?;
        if snapshot.status != PlaybackStatus::Running && last_seq >= snapshot.revealed_frames {
            break;
        }
        thread::sleep(poll_every);
    }
    forget_playback(&session_id)?;

    println!("{}", view.summary_label);
    Ok(())
}

/// One text line per frame: the newest point on a scaled track axis.
fn render_frame(frame: &PlaybackFrame, axis_max: Track, width: usize) -> String {
    let width = width.max(2);
    let mut axis = vec!['.'; width];
    for point in &frame.points {
        axis[scale(point.track, axis_max, width)] = 'o';
    }
    if let Some(latest) = frame.points.last() {
        axis[scale(latest.track, axis_max, width)] = '@';
    }

    let path = frame
        .points
        .iter()
        .map(|point| point.track.to_string())
        .collect::<Vec<_>>()
        .join(" -> ");
    format!(
        "{:>3} |{}| {}",
        frame.seq,
        axis.into_iter().collect::<String>(),
        path
    )
}

fn scale(track: Track, axis_max: Track, width: usize) -> usize {
    if axis_max == 0 {
        return 0;
    }
    let position = (track as f64 / axis_max as f64) * (width - 1) as f64;
    (position.round() as usize).min(width - 1)
}

fn run_eval_command(args: EvalArgs) -> Result<()> {
    let result = evaluate_suite_file(&args.suite)?;
    println!(
        "Eval: {}/{} cases passed",
        result.passed_cases, result.total_cases
    );

    for case in &result.case_results {
        println!(
            "- [{}] {} | {}",
            if case.passed { "PASS" } else { "FAIL" },
            case.name,
            if case.mismatches.is_empty() {
                "ok".to_string()
            } else {
                case.mismatches.join("; ")
            }
        );
    }

    if let Some(output) = args.output {
        let payload = serde_json::to_string_pretty(&result).context("failed to serialize eval")?;
        fs::write(&output, payload)
            .with_context(|| format!("failed to write eval output {}", output.display()))?;
        println!("Evaluation JSON written to {}", output.display());
    }

    if result.passed_cases != result.total_cases {
        anyhow::bail!(
            "{} evaluation case(s) failed",
            result.total_cases - result.passed_cases
        );
    }
    Ok(())
}

fn run_policies_command() {
    for policy in PolicyId::ALL {
        let note = if policy.requires_disk_bound() {
            " (needs --disk-size)"
        } else {
            ""
        };
        println!("{}{}", policy, note);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
