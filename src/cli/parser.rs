use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rAttendance
/// CLI application turning raw terminal logs into daily attendance reports
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn raw attendance terminal logs into daily first-in / last-out reports",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Parse a raw log and report malformed lines, without writing anything
    Check {
        /// Raw attendance log (text file, or '-' for stdin)
        input: String,
    },

    /// Convert a raw log into a sheet of parsed clock events
    Convert {
        /// Raw attendance log (text file, or '-' for stdin)
        input: String,

        #[arg(long, value_name = "FILE", help = "Output file path")]
        file: String,

        #[arg(long, value_enum, help = "Output format (default from config)")]
        format: Option<ExportFormat>,

        #[arg(long, short = 'f', help = "Overwrite output file without confirmation")]
        force: bool,

        #[arg(long, help = "Fail on the first malformed line instead of skipping it")]
        strict: bool,
    },

    /// Build the daily first-in / last-out attendance report
    Report {
        /// Raw attendance log (text file, or '-' for stdin)
        input: String,

        /// Output file; when omitted the report is printed as a table
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, value_enum, help = "Output format (default from config)")]
        format: Option<ExportFormat>,

        /// Date range to keep.
        ///
        /// Supported formats:
        /// - YYYY                  → entire year (e.g. "2025")
        /// - YYYY-MM              → entire month (e.g. "2025-06")
        /// - YYYY-MM-DD           → specific day  (e.g. "2025-06-18")
        ///
        /// Ranges (start:end) in the same format:
        /// - YYYY:YYYY            → year range           (e.g. "2024:2025")
        /// - YYYY-MM:YYYY-MM      → month range          (e.g. "2025-06:2025-08")
        /// - YYYY-MM-DD:YYYY-MM-DD→ day range           (e.g. "2025-06-01:2025-06-30")
        ///
        /// Special value:
        /// - all                   → keep every day
        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter report by year/month/day or a custom range"
        )]
        range: Option<String>,

        /// Last hour (0-23) whose events count as clock-in candidates
        #[arg(long, value_name = "HOUR", value_parser = clap::value_parser!(u32).range(0..=23))]
        cutoff: Option<u32>,

        #[arg(long, short = 'f', help = "Overwrite output file without confirmation")]
        force: bool,

        #[arg(long, help = "Fail on the first malformed line instead of skipping it")]
        strict: bool,
    },
}
