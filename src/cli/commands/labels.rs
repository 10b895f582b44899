use anyhow::Result;

use crate::cli::OutputFormat;
use crate::stage_labels::stage_labels;

pub struct LabelsCommand {
    pub format: OutputFormat,
}

impl LabelsCommand {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn execute(&self) -> Result<()> {
        let labels = stage_labels();

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(labels)?),
            OutputFormat::Text => {
                println!("🏷️  STAGE LABELS");
                println!("===============");
                println!();
                for entry in labels {
                    println!("   {:<32} {}", entry.label, entry.stage);
                }
                println!();
                println!("📈 {} stage labels tracked on study issues", labels.len());
            }
        }
        Ok(())
    }
}
