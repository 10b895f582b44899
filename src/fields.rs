//! Project field configurations
//!
//! The wire types consumed by the provisioning script that creates the
//! board's single-select fields. Field names and option keys serialize
//! exactly as the script expects (`name` / `dataType` / `options`).

use serde::{Deserialize, Serialize};

use crate::palette::ColorToken;
use crate::registry::{options_for, StatusCategory};

/// A single-select option: status name, color token, derived description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub name: String,
    pub color: ColorToken,
    pub description: String,
}

/// Data type of a provisioned project field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldDataType {
    SingleSelect,
}

impl FieldDataType {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldDataType::SingleSelect => "SINGLE_SELECT",
        }
    }
}

/// One project field definition: display name, data type, ordered options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfig {
    pub name: String,
    pub data_type: FieldDataType,
    pub options: Vec<FieldOption>,
}

impl FieldConfig {
    fn for_category(category: StatusCategory) -> Self {
        FieldConfig {
            name: category.field_name().to_string(),
            data_type: FieldDataType::SingleSelect,
            options: options_for(category),
        }
    }
}

/// The full set of field definitions for a factory project board,
/// keyed the way the provisioning script expects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFieldConfigs {
    pub factory_status: FieldConfig,
    pub study_stage: FieldConfig,
    pub partner_status: FieldConfig,
}

impl ProjectFieldConfigs {
    /// Entries paired with their category, in board order
    pub fn entries(&self) -> [(StatusCategory, &FieldConfig); 3] {
        [
            (StatusCategory::FactoryStatus, &self.factory_status),
            (StatusCategory::StudyStage, &self.study_stage),
            (StatusCategory::PartnerStatus, &self.partner_status),
        ]
    }
}

/// Build the complete field configuration document: one single-select
/// field per status category
pub fn field_configs() -> ProjectFieldConfigs {
    ProjectFieldConfigs {
        factory_status: FieldConfig::for_category(StatusCategory::FactoryStatus),
        study_stage: FieldConfig::for_category(StatusCategory::StudyStage),
        partner_status: FieldConfig::for_category(StatusCategory::PartnerStatus),
    }
}
