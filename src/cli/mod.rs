use clap::{Parser, Subcommand, ValueEnum};

pub mod commands;

/// Output format for export commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "factory-board")]
#[command(about = "Status color registry for the study factory project board")]
#[command(long_about = "Factory-board is the canonical source of the board's workflow vocabulary: \
                       the status-to-color tables for each single-select field, the derived field \
                       configurations the provisioning script submits to GitHub, and the stage \
                       issue-label directory. Start with 'factory-board fields' to see the export.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export the project field configurations for all three board fields
    Fields {
        /// Output format
        #[arg(long, value_enum, default_value = "text", help = "Output format: text or json")]
        format: OutputFormat,
        /// Output file path (default: stdout)
        #[arg(
            long,
            help = "File path to write the JSON document (prints to stdout if not specified)"
        )]
        output: Option<String>,
    },
    /// List the ordered field options for one status category
    Options {
        /// Category key: FACTORY_STATUS, STUDY_STAGE, or PARTNER_STATUS
        category: String,
        /// Output format
        #[arg(long, value_enum, default_value = "text", help = "Output format: text or json")]
        format: OutputFormat,
    },
    /// Show the raw status-to-color tables
    Statuses {
        /// Restrict output to one category key
        category: Option<String>,
    },
    /// List the stage issue labels and the stages they announce
    Labels {
        /// Output format
        #[arg(long, value_enum, default_value = "text", help = "Output format: text or json")]
        format: OutputFormat,
    },
    /// Validate the declared tables for internal consistency
    Check {
        /// Output format
        #[arg(long, value_enum, default_value = "text", help = "Output format: text or json")]
        format: OutputFormat,
        /// Show details for passing checks too
        #[arg(long, short = 'v', help = "Show details for passing checks as well")]
        verbose: bool,
    },
}
