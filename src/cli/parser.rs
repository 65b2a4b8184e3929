use crate::export::ExportFormat;
use crate::models::OvertimeMultiplier;
use clap::{ArgGroup, Parser, Subcommand};

/// Command-line interface definition for rOvertime
#[derive(Parser)]
#[command(
    name = "rovertime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record overtime hours, derive pay rates from your monthly salary and export an XLSX report",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (useful for tests or a second ledger)
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the data files
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show or set the monthly salary
    Salary {
        /// New monthly salary; omit to print the current one
        value: Option<String>,
    },

    /// Show daily and hourly rate for the current month
    Rates {
        #[arg(long, short = 'm', value_enum, help = "Overtime multiplier (x1, x1.5, x2, x3)")]
        multiplier: Option<OvertimeMultiplier>,
    },

    /// Add an overtime entry
    Add {
        /// Overtime hours (positive number)
        #[arg(allow_negative_numbers = true)]
        hours: String,

        /// Task description
        task: String,

        /// Date of the overtime (DD-MM-YYYY, default: today)
        #[arg(long, short = 'd')]
        date: Option<String>,
    },

    /// Edit one field of an entry (index as shown by `list`)
    #[command(group(
        ArgGroup::new("field")
            .required(true)
            .args(["hours", "date", "task"])
    ))]
    Edit {
        /// Entry number (1-based, as shown by `list`)
        index: usize,

        #[arg(long, allow_negative_numbers = true, help = "New hours (number ≥ 0)")]
        hours: Option<String>,

        #[arg(long, help = "New date (DD-MM-YYYY)")]
        date: Option<String>,

        #[arg(long, help = "New task description")]
        task: Option<String>,
    },

    /// Delete an entry (index as shown by `list`)
    Del {
        /// Entry number (1-based, as shown by `list`)
        index: usize,

        #[arg(long, short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// List entries with totals
    List {
        #[arg(long, short = 'm', value_enum, help = "Overtime multiplier (x1, x1.5, x2, x3)")]
        multiplier: Option<OvertimeMultiplier>,
    },

    /// Reset salary and delete every entry
    Reset {
        #[arg(long, short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Generate the overtime report (overtime-report-DD-MM-YYYY.<ext>)
    Report {
        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(
            long,
            value_name = "DIR",
            help = "Output directory (default: report_dir from config)"
        )]
        dir: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing report without asking")]
        force: bool,

        #[arg(long, help = "Open the report once written")]
        open: bool,
    },

    /// Print the internal log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log")]
        print: bool,
    },
}
