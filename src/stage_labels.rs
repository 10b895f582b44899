//! Stage label directory
//!
//! Issue labels that announce a study's current stage. The board's Stage
//! field and these labels describe the same progression; the label side is
//! what the webhook traffic carries.

use serde::Serialize;

/// Prefix marking a label as a stage announcement
pub const STAGE_PREFIX: &str = "stage:";

/// A `stage:*` issue label and the stage display name it announces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageLabel {
    pub label: &'static str,
    pub stage: &'static str,
}

/// Labels tracked on study issues, in workflow order
const STAGE_LABELS: &[StageLabel] = &[
    StageLabel {
        label: "stage:initiation",
        stage: "Initiation",
    },
    StageLabel {
        label: "stage:protocol-development",
        stage: "Protocol Development",
    },
    StageLabel {
        label: "stage:phenotype-development",
        stage: "Phenotype Development",
    },
    StageLabel {
        label: "stage:analysis-specifications",
        stage: "Analysis Specifications",
    },
    StageLabel {
        label: "stage:network-execution",
        stage: "Network Execution",
    },
    StageLabel {
        label: "stage:results-evaluation",
        stage: "Results Evaluation",
    },
];

/// The stage label directory, in workflow order
pub fn stage_labels() -> &'static [StageLabel] {
    STAGE_LABELS
}

/// Whether a label name is a stage marker
pub fn is_stage_label(label: &str) -> bool {
    label.starts_with(STAGE_PREFIX)
}

/// Stage display name for a label, if the label is in the directory.
/// Callers decide what to do with unlisted `stage:*` labels.
pub fn stage_for_label(label: &str) -> Option<&'static str> {
    STAGE_LABELS
        .iter()
        .find(|entry| entry.label == label)
        .map(|entry| entry.stage)
}
