use anyhow::Result;

pub mod check;
pub mod fields;
pub mod labels;
pub mod options;
pub mod statuses;

pub fn show_export_overview() -> Result<()> {
    println!("🏭 Factory Board - Status Color Registry");
    println!();
    println!("To get started:");
    println!("  📋 factory-board fields     # Export the project field configurations");
    println!("  🎨 factory-board options    # List options for one status category");
    println!("  🌈 factory-board statuses   # Show the raw status-to-color tables");
    println!("  🏷️  factory-board labels     # List the stage issue labels");
    println!("  🩺 factory-board check      # Validate the declared tables");
    println!();
    println!("💡 Run 'factory-board fields --format json' to feed the provisioning script!");
    Ok(())
}
