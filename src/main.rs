use anyhow::Result;
use clap::Parser;

use factory_board::cli::commands::check::CheckCommand;
use factory_board::cli::commands::fields::FieldsCommand;
use factory_board::cli::commands::labels::LabelsCommand;
use factory_board::cli::commands::options::OptionsCommand;
use factory_board::cli::commands::statuses::StatusesCommand;
use factory_board::cli::commands::show_export_overview;
use factory_board::cli::{Cli, Commands};
use factory_board::telemetry::init_telemetry;

fn main() -> Result<()> {
    init_telemetry()?;
    let cli = Cli::parse();

    match cli.command {
        // Default behavior: no subcommand - explain how to get the export
        None => show_export_overview(),
        Some(Commands::Fields { format, output }) => FieldsCommand::new(format, output).execute(),
        Some(Commands::Options { category, format }) => {
            OptionsCommand::new(category, format).execute()
        }
        Some(Commands::Statuses { category }) => StatusesCommand::new(category).execute(),
        Some(Commands::Labels { format }) => LabelsCommand::new(format).execute(),
        Some(Commands::Check { format, verbose }) => CheckCommand::new(format, verbose).execute(),
    }
}
