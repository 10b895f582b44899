// Factory Board Library - Status color registry for the study factory board
// This exposes the registry data for the provisioning workflow and tests

pub mod cli;
pub mod fields;
pub mod palette;
pub mod registry;
pub mod stage_labels;
pub mod telemetry;

// Re-export key types for easy access
pub use fields::{field_configs, FieldConfig, FieldDataType, FieldOption, ProjectFieldConfigs};
pub use palette::ColorToken;
pub use registry::{options_for, options_for_key, RegistryError, StatusCategory};
pub use stage_labels::{is_stage_label, stage_for_label, stage_labels, StageLabel, STAGE_PREFIX};
pub use telemetry::init_telemetry;
