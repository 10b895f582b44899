use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::cli::OutputFormat;
use crate::registry::StatusCategory;
use crate::stage_labels::{stage_labels, STAGE_PREFIX};

/// Check command validating the declared tables before provisioning
pub struct CheckCommand {
    format: OutputFormat,
    verbose: bool,
}

/// Result of a single data check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub details: Option<String>,
}

/// Status of a data check
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CheckStatus {
    Pass,
    Fail,
}

/// Report containing all check results
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckReport {
    pub summary: CheckSummary,
    pub checks: Vec<CheckResult>,
}

/// Summary of check results
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckSummary {
    pub total_checks: usize,
    pub passed: usize,
    pub failed: usize,
}

impl CheckCommand {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    pub fn execute(&self) -> Result<()> {
        let report = run_checks();
        self.output_report(&report)?;

        if report.summary.failed > 0 {
            bail!("{} data check(s) failed", report.summary.failed);
        }
        Ok(())
    }

    fn output_report(&self, report: &CheckReport) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(report)?);
            }
            OutputFormat::Text => {
                self.output_text_report(report);
            }
        }
        Ok(())
    }

    fn output_text_report(&self, report: &CheckReport) {
        println!("🩺 FACTORY BOARD CHECK - Data Consistency");
        println!("=========================================");
        println!();

        println!("📊 CHECK SUMMARY:");
        println!("─────────────────");
        println!("Total checks: {}", report.summary.total_checks);
        if report.summary.passed > 0 {
            println!("✅ Passed: {}", report.summary.passed);
        }
        if report.summary.failed > 0 {
            println!("❌ Failed: {}", report.summary.failed);
        }
        println!();

        println!("🔍 DETAILED RESULTS:");
        println!("──────────────────");
        for result in &report.checks {
            let status_icon = match result.status {
                CheckStatus::Pass => "✅",
                CheckStatus::Fail => "❌",
            };
            println!("{} {}: {}", status_icon, result.name, result.message);

            if self.verbose || result.status == CheckStatus::Fail {
                if let Some(details) = &result.details {
                    println!("   Details: {}", details);
                }
            }
        }
        println!();

        if report.summary.failed == 0 {
            println!("✅ Board data is consistent and ready to provision!");
        } else {
            println!(
                "❌ Board data has {} issue(s) that must be resolved before provisioning.",
                report.summary.failed
            );
        }
    }
}

/// Run every data check over the declared tables
pub fn run_checks() -> CheckReport {
    let checks = vec![
        check_tables_not_empty(),
        check_unique_status_names(),
        check_well_formed_status_names(),
        check_distinct_colors_per_category(),
        check_stage_label_names(),
        check_stage_labels_match_stages(),
    ];

    let passed = checks
        .iter()
        .filter(|c| c.status == CheckStatus::Pass)
        .count();
    let summary = CheckSummary {
        total_checks: checks.len(),
        passed,
        failed: checks.len() - passed,
    };

    CheckReport { summary, checks }
}

fn pass(name: &str, message: &str) -> CheckResult {
    CheckResult {
        name: name.to_string(),
        status: CheckStatus::Pass,
        message: message.to_string(),
        details: None,
    }
}

fn fail(name: &str, message: &str, details: Vec<String>) -> CheckResult {
    CheckResult {
        name: name.to_string(),
        status: CheckStatus::Fail,
        message: message.to_string(),
        details: Some(details.join("; ")),
    }
}

fn check_tables_not_empty() -> CheckResult {
    let empty: Vec<String> = StatusCategory::ALL
        .iter()
        .filter(|category| category.statuses().is_empty())
        .map(|category| category.key().to_string())
        .collect();

    if empty.is_empty() {
        pass(
            "status_tables_not_empty",
            "Every category declares at least one status",
        )
    } else {
        fail(
            "status_tables_not_empty",
            "Some categories declare no statuses",
            empty,
        )
    }
}

fn check_unique_status_names() -> CheckResult {
    let mut duplicates = Vec::new();
    for category in StatusCategory::ALL {
        let mut seen = HashSet::new();
        for (name, _) in category.statuses() {
            if !seen.insert(*name) {
                duplicates.push(format!("{}: {}", category.key(), name));
            }
        }
    }

    if duplicates.is_empty() {
        pass(
            "unique_status_names",
            "Status names are unique within each category",
        )
    } else {
        fail(
            "unique_status_names",
            "Duplicate status names found",
            duplicates,
        )
    }
}

fn check_well_formed_status_names() -> CheckResult {
    let mut malformed = Vec::new();
    for category in StatusCategory::ALL {
        for (name, _) in category.statuses() {
            if name.is_empty() || name.trim() != *name {
                malformed.push(format!("{}: {:?}", category.key(), name));
            }
        }
    }

    if malformed.is_empty() {
        pass(
            "well_formed_status_names",
            "Status names are non-empty with no leading or trailing whitespace",
        )
    } else {
        fail(
            "well_formed_status_names",
            "Malformed status names found",
            malformed,
        )
    }
}

fn check_distinct_colors_per_category() -> CheckResult {
    let mut repeats = Vec::new();
    for category in StatusCategory::ALL {
        let mut seen = HashSet::new();
        for (name, color) in category.statuses() {
            if !seen.insert(*color) {
                repeats.push(format!("{}: {} reused on {}", category.key(), color, name));
            }
        }
    }

    if repeats.is_empty() {
        pass(
            "distinct_colors_per_category",
            "No color token repeats within a category",
        )
    } else {
        fail(
            "distinct_colors_per_category",
            "Color tokens reused within a category",
            repeats,
        )
    }
}

fn check_stage_label_names() -> CheckResult {
    let mut problems = Vec::new();
    let mut seen = HashSet::new();
    for entry in stage_labels() {
        if !entry.label.starts_with(STAGE_PREFIX) {
            problems.push(format!("missing prefix: {}", entry.label));
        }
        if !seen.insert(entry.label) {
            problems.push(format!("duplicate label: {}", entry.label));
        }
    }

    if problems.is_empty() {
        pass(
            "stage_label_names",
            "Stage labels carry the stage: prefix and are unique",
        )
    } else {
        fail("stage_label_names", "Malformed stage labels found", problems)
    }
}

fn check_stage_labels_match_stages() -> CheckResult {
    let stages = StatusCategory::StudyStage.statuses();
    let unmatched: Vec<String> = stage_labels()
        .iter()
        .filter(|entry| {
            !stages
                .iter()
                .any(|(name, _)| name.eq_ignore_ascii_case(entry.stage))
        })
        .map(|entry| format!("{} -> {}", entry.label, entry.stage))
        .collect();

    if unmatched.is_empty() {
        pass(
            "stage_labels_match_stages",
            "Every stage label maps to a declared study stage",
        )
    } else {
        fail(
            "stage_labels_match_stages",
            "Stage labels that match no declared study stage",
            unmatched,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_data_passes_all_checks() {
        let report = run_checks();
        assert_eq!(report.summary.failed, 0);
        assert_eq!(report.summary.passed, report.summary.total_checks);
        assert_eq!(report.summary.total_checks, 6);
    }

    #[test]
    fn test_report_serializes() {
        let report = run_checks();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["summary"]["failed"], 0);
        assert!(json["checks"].as_array().unwrap().len() == 6);
    }
}
