use anyhow::{Context, Result};
use std::fs;

use crate::cli::OutputFormat;
use crate::fields::{field_configs, ProjectFieldConfigs};

pub struct FieldsCommand {
    pub format: OutputFormat,
    pub output: Option<String>,
}

impl FieldsCommand {
    pub fn new(format: OutputFormat, output: Option<String>) -> Self {
        Self { format, output }
    }

    pub fn execute(&self) -> Result<()> {
        let configs = field_configs();

        if let Some(path) = &self.output {
            let json = serde_json::to_string_pretty(&configs)?;
            fs::write(path, json)
                .with_context(|| format!("Failed to write field configurations to {}", path))?;
            println!("📁 Wrote field configurations to {}", path);
            return Ok(());
        }

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&configs)?),
            OutputFormat::Text => print_text(&configs),
        }
        Ok(())
    }
}

fn print_text(configs: &ProjectFieldConfigs) {
    println!("🏭 FACTORY BOARD FIELDS");
    println!("=======================");
    println!();

    for (category, config) in configs.entries() {
        println!(
            "📋 {} ({} field \"{}\", {})",
            category.key(),
            category.export_key(),
            config.name,
            config.data_type.as_str()
        );
        for option in &config.options {
            println!("   • {:<24} [{}]", option.name, option.color);
        }
        println!();
    }

    println!("💡 Use --format json (or --output) for the provisioning document");
}
