pub mod compare;
pub mod engine;
pub mod error;
pub mod eval;
pub mod markdown;
pub mod model;
pub mod policy;
pub mod report;
pub mod seek;

pub use compare::{compare_policies, PolicyComparison, PolicyComparisonEntry};
pub use engine::{schedule, schedule_policy};
pub use error::{ErrorKind, SchedulingError};
pub use eval::{
    evaluate_suite, evaluate_suite_file, EvaluationCase, EvaluationCaseResult, EvaluationResult,
    EvaluationSuite,
};
pub use markdown::{render_comparison_markdown, render_markdown_summary};
pub use model::{
    PolicyId, ScheduleOutcome, ScheduleReport, ScheduleRequest, ScheduleStep, Track, Visit,
    VisitKind, MAX_TRACK, REPORT_VERSION,
};
pub use report::{build_report, write_report};
pub use seek::{seek_profile, SeekProfile};
