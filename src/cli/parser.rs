use crate::core::dashboard::RangeKind;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for serenitylog
/// CLI application to log anxiety moments and review counts with SQLite
#[derive(Parser)]
#[command(
    name = "serenitylog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple anxiety-moment logging CLI: record moments with one command and review day/week/month trends using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or validate)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for problems")]
        check: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record one anxiety moment (defaults to now)
    Add {
        #[arg(
            long = "at",
            value_name = "TIMESTAMP",
            help = "Backfill timestamp (\"YYYY-MM-DD HH:MM\" or with seconds)"
        )]
        at: Option<String>,
    },

    /// Show today / this-week / this-month counts
    Stats {
        #[arg(
            long = "at",
            value_name = "TIMESTAMP",
            help = "Compute counts as of this timestamp instead of now"
        )]
        at: Option<String>,
    },

    /// Render a per-day bar chart and trend summary for a range
    Dashboard {
        #[arg(long, value_enum, default_value = "week")]
        range: RangeKind,

        #[arg(
            long,
            value_name = "DATE",
            help = "Anchor date (YYYY-MM-DD) for day/week/month ranges, default today"
        )]
        date: Option<String>,

        #[arg(long, value_name = "DATE", help = "Custom range start (YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long, value_name = "DATE", help = "Custom range end (YYYY-MM-DD)")]
        to: Option<String>,
    },

    /// List recorded moments
    List {
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (e.g. 2024, 2024-02, 2024-01:2024-03)"
        )]
        period: Option<String>,

        #[arg(long = "today", help = "Show only today's moments")]
        now: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export recorded moments
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
