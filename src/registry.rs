//! Status color registry
//!
//! The three fixed status vocabularies of the factory board, each an ordered
//! mapping from status name to color token. Declaration order is the order
//! options appear on the board, so the tables are explicit pair slices
//! rather than maps.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

use crate::fields::FieldOption;
use crate::palette::ColorToken;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Unknown status category: {key} (expected FACTORY_STATUS, STUDY_STAGE, or PARTNER_STATUS)")]
    UnknownCategory { key: String },
}

/// High-level study lifecycle, shown as the board's "Status" field
const FACTORY_STATUS: &[(&str, ColorToken)] = &[
    ("Initiation", ColorToken::Red),
    ("Todo", ColorToken::Orange),
    ("In Progress", ColorToken::Yellow),
    ("Review", ColorToken::Green),
    ("Network Execution", ColorToken::Blue),
    ("Analysis", ColorToken::Indigo),
    ("Complete", ColorToken::Purple),
    ("Blocked", ColorToken::Gray),
];

/// Detailed research phases, shown as the board's "Stage" field
const STUDY_STAGE: &[(&str, ColorToken)] = &[
    ("Initiation", ColorToken::Red),
    ("Protocol development", ColorToken::Orange),
    ("Data diagnostics", ColorToken::Yellow),
    ("Phenotype development", ColorToken::Green),
    ("Phenotype evaluation", ColorToken::Blue),
    ("Analysis specifications", ColorToken::Indigo),
    ("Network execution", ColorToken::Purple),
    ("Study diagnostics", ColorToken::Pink),
    ("Evidence synthesis", ColorToken::Gray),
    ("Results evaluation", ColorToken::DarkGray),
];

/// Data partner engagement lifecycle, shown as the board's "Site Status" field
const PARTNER_STATUS: &[(&str, ColorToken)] = &[
    ("Potential", ColorToken::Red),
    ("Invited", ColorToken::Orange),
    ("Committed", ColorToken::Yellow),
    ("Diagnostics Sent", ColorToken::Green),
    ("Diagnostics Returned", ColorToken::Blue),
    ("Package Executed", ColorToken::Indigo),
    ("Results Uploaded", ColorToken::Purple),
    ("Complete", ColorToken::Pink),
    ("Withdrawn", ColorToken::Gray),
    ("Blocked", ColorToken::DarkGray),
];

/// The three single-select vocabularies on the factory board.
/// Fixed at build time; adding a category means adding a variant here
/// and its table above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusCategory {
    /// High-level study lifecycle
    FactoryStatus,
    /// Detailed research phases
    StudyStage,
    /// Data partner engagement lifecycle
    PartnerStatus,
}

impl StatusCategory {
    /// All categories, in board order
    pub const ALL: [StatusCategory; 3] = [
        StatusCategory::FactoryStatus,
        StatusCategory::StudyStage,
        StatusCategory::PartnerStatus,
    ];

    /// Canonical registry key (`FACTORY_STATUS`, `STUDY_STAGE`, `PARTNER_STATUS`)
    pub fn key(self) -> &'static str {
        match self {
            StatusCategory::FactoryStatus => "FACTORY_STATUS",
            StatusCategory::StudyStage => "STUDY_STAGE",
            StatusCategory::PartnerStatus => "PARTNER_STATUS",
        }
    }

    /// Key used in the exported field config document (`factoryStatus`, ...)
    pub fn export_key(self) -> &'static str {
        match self {
            StatusCategory::FactoryStatus => "factoryStatus",
            StatusCategory::StudyStage => "studyStage",
            StatusCategory::PartnerStatus => "partnerStatus",
        }
    }

    /// Display name of the project field backed by this category
    pub fn field_name(self) -> &'static str {
        match self {
            StatusCategory::FactoryStatus => "Status",
            StatusCategory::StudyStage => "Stage",
            StatusCategory::PartnerStatus => "Site Status",
        }
    }

    /// The declared status table for this category, in declaration order
    pub fn statuses(self) -> &'static [(&'static str, ColorToken)] {
        match self {
            StatusCategory::FactoryStatus => FACTORY_STATUS,
            StatusCategory::StudyStage => STUDY_STAGE,
            StatusCategory::PartnerStatus => PARTNER_STATUS,
        }
    }

    /// Resolve a category from its key.
    ///
    /// Accepts the canonical key (`STUDY_STAGE`), the export key
    /// (`studyStage`), and hyphenated or case-shifted spellings of either.
    /// Anything else is an error; there is no fallback category.
    pub fn from_key(key: &str) -> Result<Self, RegistryError> {
        let normalized: String = key
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let category = match normalized.as_str() {
            "factorystatus" => StatusCategory::FactoryStatus,
            "studystage" => StatusCategory::StudyStage,
            "partnerstatus" => StatusCategory::PartnerStatus,
            _ => {
                return Err(RegistryError::UnknownCategory {
                    key: key.to_string(),
                })
            }
        };

        debug!(key, category = %category, "resolved status category");
        Ok(category)
    }
}

impl FromStr for StatusCategory {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatusCategory::from_key(s)
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Build the ordered field options for a category.
///
/// One option per declared status, in declaration order, with the
/// description derived from the status name and the category key
/// (e.g. `"Potential status in partner_status workflow"`).
pub fn options_for(category: StatusCategory) -> Vec<FieldOption> {
    let workflow = category.key().to_ascii_lowercase();
    category
        .statuses()
        .iter()
        .map(|&(name, color)| FieldOption {
            name: name.to_string(),
            color,
            description: format!("{} status in {} workflow", name, workflow),
        })
        .collect()
}

/// `options_for` for callers holding a category key string.
/// Unknown keys fail with `RegistryError::UnknownCategory`; there is no
/// partial output.
pub fn options_for_key(key: &str) -> Result<Vec<FieldOption>, RegistryError> {
    let category = StatusCategory::from_key(key)?;
    Ok(options_for(category))
}
