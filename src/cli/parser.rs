use crate::export::{ExportFormat, ExportTarget};
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for staffmetrics
/// HR employee metrics on top of a local SQLite store
#[derive(Parser, Debug)]
#[command(
    name = "staffmetrics",
    version = env!("CARGO_PKG_VERSION"),
    about = "Employee metrics CLI: working hours, work patterns, compliance, leave and records",
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

/// Employee, range and reference date shared by the report commands.
#[derive(Args, Debug, Clone)]
pub struct Scope {
    #[arg(long, short = 'e', default_value_t = 1, help = "Employee id")]
    pub employee: i64,

    #[arg(
        long,
        short = 'r',
        value_name = "RANGE",
        help = "YYYY, YYYY-MM, YYYY-MM-DD or A:B (default: month of the reference date)"
    )]
    pub range: Option<String>,

    #[arg(
        long = "today",
        value_name = "DATE",
        help = "Reference date (YYYY-MM-DD) used instead of the current date"
    )]
    pub today: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
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
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
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

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing backup file")]
        force: bool,
    },

    /// Store a time entry, leave request or record
    Add {
        #[command(subcommand)]
        what: AddCommand,
    },

    /// Delete a stored item by id
    Del {
        #[arg(long, short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,

        #[command(subcommand)]
        what: DelCommand,
    },

    /// Approve or reject a leave request
    Review {
        /// Leave request id
        id: i64,

        #[arg(long, help = "New status: pending, approved, rejected")]
        status: String,
    },

    /// Daily hours, period totals and per-project hours
    Hours {
        #[command(flatten)]
        scope: Scope,
    },

    /// Work-pattern classification over the range
    Pattern {
        #[command(flatten)]
        scope: Scope,
    },

    /// Working-time rule violations over the range
    Compliance {
        #[command(flatten)]
        scope: Scope,
    },

    /// Approved leave per type and remaining vacation days
    Leave {
        #[command(flatten)]
        scope: Scope,
    },

    /// Records grouped by category, with expiry state
    Records {
        #[arg(long, short = 'e', default_value_t = 1, help = "Employee id")]
        employee: i64,

        #[arg(long, help = "Only this kind: document, certificate, note, award")]
        kind: Option<String>,

        #[arg(long = "today", value_name = "DATE", help = "Reference date for expiry (YYYY-MM-DD)")]
        today: Option<String>,
    },

    /// Complete employee overview
    Summary {
        #[command(flatten)]
        scope: Scope,

        #[arg(long, help = "Print the summary as JSON")]
        json: bool,
    },

    /// Export stored data
    Export {
        #[arg(long, value_enum, default_value = "time")]
        what: ExportTarget,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'e', help = "Only this employee (default: all)")]
        employee: Option<i64>,

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

#[derive(Subcommand, Debug)]
pub enum AddCommand {
    /// Add a work session
    Time {
        #[arg(long, short = 'e', default_value_t = 1)]
        employee: i64,

        /// Clock-in, local time (YYYY-MM-DD HH:MM)
        #[arg(long = "start")]
        start: String,

        /// Clock-out, local time (YYYY-MM-DD HH:MM); omit for an open session
        #[arg(long = "end")]
        end: Option<String>,

        #[arg(long = "break", default_value_t = 0, help = "Break duration in minutes")]
        break_minutes: u32,

        #[arg(long)]
        project: Option<String>,
    },

    /// Add a leave request
    Leave {
        #[arg(long, short = 'e', default_value_t = 1)]
        employee: i64,

        /// First day (YYYY-MM-DD)
        #[arg(long = "from")]
        start: String,

        /// Last day (YYYY-MM-DD), defaults to the first day
        #[arg(long = "to")]
        end: Option<String>,

        #[arg(
            long = "type",
            default_value = "vacation",
            help = "vacation, sick, personal, training, other"
        )]
        leave_type: String,

        #[arg(long = "half-day")]
        half_day: bool,

        #[arg(long, default_value = "pending", help = "pending, approved, rejected")]
        status: String,
    },

    /// Add a document, certificate, note or award
    Record {
        #[arg(long, short = 'e', default_value_t = 1)]
        employee: i64,

        #[arg(long, help = "document, certificate, note, award")]
        kind: String,

        #[arg(long)]
        title: String,

        #[arg(long)]
        category: Option<String>,

        #[arg(long = "issued", value_name = "DATE")]
        issued_on: Option<String>,

        #[arg(long = "expires", value_name = "DATE")]
        expires_on: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum DelCommand {
    /// Delete a time entry
    Time { id: i64 },
    /// Delete a leave request
    Leave { id: i64 },
    /// Delete a record
    Record { id: i64 },
}
