use anyhow::Result;

use crate::cli::OutputFormat;
use crate::registry::{options_for, StatusCategory};

pub struct OptionsCommand {
    pub category: String,
    pub format: OutputFormat,
}

impl OptionsCommand {
    pub fn new(category: String, format: OutputFormat) -> Self {
        Self { category, format }
    }

    pub fn execute(&self) -> Result<()> {
        // Unknown keys fail here, before any output
        let category = StatusCategory::from_key(&self.category)?;
        let options = options_for(category);

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&options)?),
            OutputFormat::Text => {
                println!(
                    "🎨 {} OPTIONS ({} field \"{}\")",
                    category.key(),
                    category.export_key(),
                    category.field_name()
                );
                println!();
                for (position, option) in options.iter().enumerate() {
                    println!(
                        "   {}. {:<24} [{}]",
                        position + 1,
                        option.name,
                        option.color
                    );
                    println!("      {}", option.description);
                }
                println!();
                println!("📈 {} options, in workflow order", options.len());
            }
        }
        Ok(())
    }
}
