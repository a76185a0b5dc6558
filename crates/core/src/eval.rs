use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::engine::schedule;
use crate::error::ErrorKind;
use crate::model::Track;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationSuite {
    pub cases: Vec<EvaluationCase>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationCase {
    pub name: String,
    pub policy: String,
    #[serde(default)]
    pub requests: Vec<i64>,
    pub head: i64,
    #[serde(default)]
    pub disk_size: Option<i64>,
    #[serde(default)]
    pub expected_order: Option<Vec<Track>>,
    #[serde(default)]
    pub expected_total_seek: Option<u64>,
    #[serde(default)]
    pub expected_error: Option<ErrorKind>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub total_cases: usize,
    pub passed_cases: usize,
    pub case_results: Vec<EvaluationCaseResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationCaseResult {
    pub name: String,
    pub passed: bool,
    pub observed_order: Vec<Track>,
    pub observed_total_seek: Option<u64>,
    pub observed_error: Option<ErrorKind>,
    pub mismatches: Vec<String>,
}

pub fn evaluate_suite_file(path: &Path) -> Result<EvaluationResult> {
    let suite_text = fs::read_to_string(path)
        .with_context(|| format!("failed to read evaluation suite {}", path.display()))?;
    let suite: EvaluationSuite =
        serde_json::from_str(&suite_text).context("failed to parse evaluation suite JSON")?;
    Ok(evaluate_suite(&suite))
}

pub fn evaluate_suite(suite: &EvaluationSuite) -> EvaluationResult {
    let case_results = suite.cases.iter().map(evaluate_case).collect::<Vec<_>>();
    let passed_cases = case_results.iter().filter(|case| case.passed).count();

    info!(
        total = case_results.len(),
        passed = passed_cases,
        "evaluation suite finished"
    );

    EvaluationResult {
        total_cases: suite.cases.len(),
        passed_cases,
        case_results,
    }
}

fn evaluate_case(case: &EvaluationCase) -> EvaluationCaseResult {
    let mut mismatches = Vec::new();
    let (observed_order, observed_total_seek, observed_error) =
        match schedule(&case.policy, &case.requests, case.head, case.disk_size) {
            Ok(outcome) => (outcome.order, Some(outcome.total_seek), None),
            Err(err) => (Vec::new(), None, Some(err.kind())),
        };

    if observed_error != case.expected_error {
        mismatches.push(format!(
            "expected error {:?}, observed {:?}",
            case.expected_error, observed_error
        ));
    }
    if let Some(expected) = &case.expected_order {
        if expected != &observed_order {
            mismatches.push(format!(
                "expected order {:?}, observed {:?}",
                expected, observed_order
            ));
        }
    }
    if let Some(expected) = case.expected_total_seek {
        if Some(expected) != observed_total_seek {
            mismatches.push(format!(
                "expected total seek {}, observed {:?}",
                expected, observed_total_seek
            ));
        }
    }

    EvaluationCaseResult {
        name: case.name.clone(),
        passed: mismatches.is_empty(),
        observed_order,
        observed_total_seek,
        observed_error,
        mismatches,
    }
}
