//! Report - シナリオ実行結果のビュー

use serde::Serialize;

use crate::config::SkipReason;
use crate::domain::{JobDescriptor, Verdict};

/// Result of verifying one row.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub label: String,
    pub job: JobDescriptor,
    pub verdict: Verdict,
    pub expected: String,
    pub log: String,
    pub passed: bool,
}

/// What happened to one row of a table.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RowResult {
    Passed(ScenarioReport),
    Failed(ScenarioReport),
    Skipped { label: String, reason: SkipReason },
    Errored { label: String, error: String },
}

impl From<ScenarioReport> for RowResult {
    fn from(report: ScenarioReport) -> Self {
        if report.passed {
            RowResult::Passed(report)
        } else {
            RowResult::Failed(report)
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportCounts {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub errored: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableReport {
    pub table: &'static str,
    pub results: Vec<RowResult>,
}

impl TableReport {
    pub fn counts(&self) -> ReportCounts {
        let mut counts = ReportCounts::default();
        for result in &self.results {
            match result {
                RowResult::Passed(_) => counts.passed += 1,
                RowResult::Failed(_) => counts.failed += 1,
                RowResult::Skipped { .. } => counts.skipped += 1,
                RowResult::Errored { .. } => counts.errored += 1,
            }
        }
        counts
    }

    /// No row failed or errored. Skipped rows do not count against it.
    pub fn is_success(&self) -> bool {
        let counts = self.counts();
        counts.failed == 0 && counts.errored == 0
    }
}
