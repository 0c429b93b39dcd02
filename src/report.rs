//! Summary table printed after a run

use crate::orchestrator::{PageResult, StepTiming};
use std::fmt;

const RULE_WIDTH: usize = 74;

/// Totals and per-page averages over a run.
///
/// Only successful steps contribute time. Averages divide by the number of
/// pages in the plan, not by the number of successes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total_creation_ms: u64,
    pub total_export_ms: u64,
    pub total_elements: usize,
    pub avg_creation_ms: u64,
    pub avg_export_ms: u64,
    pub avg_elements: usize,
}

impl Summary {
    pub fn from_results(results: &[PageResult], page_count: usize) -> Self {
        let total_creation_ms: u64 = results.iter().filter_map(|r| r.creation.succeeded_ms()).sum();
        let total_export_ms: u64 = results.iter().filter_map(|r| r.export.succeeded_ms()).sum();
        let total_elements: usize = results.iter().map(|r| r.num_elements).sum();
        let divisor = page_count.max(1);
        Self {
            total_creation_ms,
            total_export_ms,
            total_elements,
            avg_creation_ms: total_creation_ms / divisor as u64,
            avg_export_ms: total_export_ms / divisor as u64,
            avg_elements: total_elements / divisor,
        }
    }

    pub fn grand_total_ms(&self) -> u64 {
        self.total_creation_ms + self.total_export_ms
    }
}

/// Renders the results table, totals, screen ids and preview hint
pub struct Report<'a> {
    pub title: &'a str,
    pub results: &'a [PageResult],
    pub page_count: usize,
    pub project_id: &'a str,
    pub preview_url: Option<&'a str>,
}

impl Report<'_> {
    pub fn summary(&self) -> Summary {
        Summary::from_results(self.results, self.page_count)
    }
}

fn cell(timing: &StepTiming) -> String {
    match timing {
        StepTiming::Succeeded { elapsed_ms } => elapsed_ms.to_string(),
        StepTiming::Failed { .. } => "FAIL".to_string(),
        StepTiming::Skipped => "-".to_string(),
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);
        let summary = self.summary();

        writeln!(f, "{}", heavy)?;
        writeln!(f, "RESULTS: {}", self.title)?;
        writeln!(f, "{}", heavy)?;
        writeln!(f, "{:<3} {:<14} {:<17} {:<11} {}", "#", "Page", "Create (ms)", "Elements", "Export PNG (ms)")?;
        writeln!(f, "{}", light)?;
        for r in self.results {
            writeln!(
                f,
                "{:<3} {:<14} {:<17} {:<11} {}",
                r.index,
                r.name,
                cell(&r.creation),
                r.num_elements,
                cell(&r.export)
            )?;
        }
        writeln!(f, "{}", light)?;
        writeln!(
            f,
            "{:<3} {:<14} {:<17} {:<11} {}",
            "TOT", "", summary.total_creation_ms, summary.total_elements, summary.total_export_ms
        )?;
        writeln!(
            f,
            "{:<3} {:<14} {:<17} {:<11} {}",
            "AVG", "", summary.avg_creation_ms, summary.avg_elements, summary.avg_export_ms
        )?;

        let grand = summary.grand_total_ms();
        writeln!(f, "\nGrand total: {} ms  ({:.2} s)", grand, grand as f64 / 1000.0)?;

        writeln!(f, "\nScreen IDs:")?;
        for r in self.results {
            writeln!(f, "  {}: {}", r.name, r.screen_id.as_deref().unwrap_or("-"))?;
            for artifact in &r.artifacts {
                match &artifact.path {
                    Some(path) => writeln!(f, "    {} sha256:{}", path.display(), artifact.sha256)?,
                    None => writeln!(f, "    {} bytes sha256:{}", artifact.bytes, artifact.sha256)?,
                }
            }
        }
        writeln!(f, "{}", heavy)?;

        if let Some(url) = self.preview_url {
            writeln!(f, "\nPreview: {}", url)?;
        }
        write!(f, "Project ID: {}", self.project_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(index: usize, name: &str, creation: StepTiming, n: usize, export: StepTiming) -> PageResult {
        PageResult {
            index,
            name: name.to_string(),
            screen_id: Some(format!("scr_{}", index)),
            creation,
            num_elements: n,
            export,
            artifacts: Vec::new(),
        }
    }

    fn ok(ms: u64) -> StepTiming {
        StepTiming::Succeeded { elapsed_ms: ms }
    }

    fn sample() -> Vec<PageResult> {
        vec![
            row(1, "Home", ok(40), 38, ok(1200)),
            row(
                2,
                "About",
                ok(90),
                37,
                StepTiming::Failed {
                    elapsed_ms: 300_000,
                    reason: "timed out".into(),
                },
            ),
            row(3, "Services", StepTiming::Skipped, 46, ok(800)),
        ]
    }

    #[test]
    fn totals_skip_failures_and_divide_by_page_count() {
        let s = Summary::from_results(&sample(), 5);
        assert_eq!(s.total_creation_ms, 130);
        assert_eq!(s.total_export_ms, 2000);
        assert_eq!(s.total_elements, 121);
        assert_eq!(s.avg_creation_ms, 26);
        assert_eq!(s.avg_export_ms, 400);
        assert_eq!(s.avg_elements, 24);
        assert_eq!(s.grand_total_ms(), 2130);
    }

    #[test]
    fn empty_plan_does_not_divide_by_zero() {
        let s = Summary::from_results(&[], 0);
        assert_eq!(s.avg_creation_ms, 0);
    }

    #[test]
    fn table_marks_failures_and_skips() {
        let results = sample();
        let report = Report {
            title: "Corporate Website Mockup",
            results: &results,
            page_count: 3,
            project_id: "proj_x",
            preview_url: Some("http://localhost:3100"),
        };
        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines.contains(&"RESULTS: Corporate Website Mockup"));
        assert!(text.is_ascii());
        assert!(lines.contains(&"1   Home           40                38          1200"));
        assert!(lines.contains(&"2   About          90                37          FAIL"));
        assert!(lines.contains(&"3   Services       -                 46          800"));
        assert!(lines.contains(&"TOT                130               121         2000"));
        assert!(text.contains("Grand total: 2130 ms  (2.13 s)"));
        assert!(text.contains("  About: scr_2"));
        assert!(text.contains("Preview: http://localhost:3100"));
        assert!(text.ends_with("Project ID: proj_x"));
    }
}
