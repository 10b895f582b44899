use anyhow::Result;

use crate::registry::StatusCategory;

pub struct StatusesCommand {
    pub category: Option<String>,
}

impl StatusesCommand {
    pub fn new(category: Option<String>) -> Self {
        Self { category }
    }

    pub fn execute(&self) -> Result<()> {
        let categories: Vec<StatusCategory> = match &self.category {
            Some(key) => vec![StatusCategory::from_key(key)?],
            None => StatusCategory::ALL.to_vec(),
        };

        println!("🌈 STATUS COLOR TABLES");
        println!("======================");
        println!();

        for category in categories {
            println!(
                "📋 {} ({} statuses)",
                category.key(),
                category.statuses().len()
            );
            for (name, color) in category.statuses() {
                println!("   {:<24} {}", name, color);
            }
            println!();
        }

        Ok(())
    }
}
