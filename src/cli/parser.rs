use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for scpayroll
#[derive(Parser)]
#[command(
    name = "scpayroll",
    version = env!("CARGO_PKG_VERSION"),
    about = "Half-month payroll timesheets: log hours, submit, approve",
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

/// Employee + period addressing shared by period commands.
#[derive(Args, Debug, Clone)]
pub struct PeriodArgs {
    /// Employee id (e.g. emp_001)
    pub employee: String,

    /// Period key: YYYY-M-1st|2nd, month 0-based (e.g. 2026-0-1st)
    #[arg(long = "period", short = 'p')]
    pub period: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "edit", help = "Edit the configuration file")]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use (default: $EDITOR or nano)")]
        editor: Option<String>,
    },

    /// Manage the staff roster (admin)
    Staff {
        #[command(subcommand)]
        action: StaffAction,
    },

    /// Log or change one day (acts as the owning staff member)
    Entry {
        /// Employee id
        employee: String,

        /// Day (YYYY-MM-DD)
        date: String,

        #[arg(long = "in", help = "Start time (HH:MM); empty string clears it")]
        start: Option<String>,

        #[arg(long = "out", help = "End time (HH:MM); empty string clears it")]
        end: Option<String>,

        #[arg(long = "lunch", help = "Lunch break in hours (e.g. 0.5)")]
        lunch: Option<f64>,

        #[arg(long = "notes")]
        notes: Option<String>,

        #[arg(long = "sick", conflicts_with = "not_sick", help = "Mark as sick day (7.5h)")]
        sick: bool,

        #[arg(long = "not-sick", help = "Clear the sick day flag")]
        not_sick: bool,

        #[arg(
            long = "set",
            value_name = "FIELD=VALUE",
            help = "Set a field by name: startTime, endTime, lunchBreakHours, notes, isSickDay"
        )]
        set: Vec<String>,

        #[arg(long = "patch", value_name = "JSON", help = "JSON partial update")]
        patch: Option<String>,
    },

    /// Show a period: days, holidays, entries and totals
    Show {
        #[command(flatten)]
        target: PeriodArgs,
    },

    /// Submit a Draft period for review (staff)
    Submit {
        #[command(flatten)]
        target: PeriodArgs,
    },

    /// Approve a submitted period (admin)
    Approve {
        #[command(flatten)]
        target: PeriodArgs,
    },

    /// Return a submitted period to Draft (admin)
    Return {
        #[command(flatten)]
        target: PeriodArgs,
    },

    /// Revoke an approval, unlocking the period (admin)
    Revoke {
        #[command(flatten)]
        target: PeriodArgs,
    },

    /// Overview of every employee for one period (admin)
    Review {
        #[arg(long = "period", short = 'p')]
        period: String,
    },

    /// List BC statutory holidays of a year
    Holidays { year: i32 },

    /// Print the audit log
    Log {
        #[arg(long = "staff", conflicts_with = "admin", help = "Only staff actions")]
        staff: bool,

        #[arg(long = "admin", help = "Only admin actions")]
        admin: bool,
    },

    /// Export one employee's period
    Export {
        #[command(flatten)]
        target: PeriodArgs,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the shareable deep link query for an employee's period
    Link {
        #[command(flatten)]
        target: PeriodArgs,
    },

    /// Write or restore a JSON snapshot of the whole state
    Snapshot {
        #[arg(long, value_name = "FILE", conflicts_with = "restore")]
        out: Option<String>,

        #[arg(long, value_name = "FILE")]
        restore: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum StaffAction {
    /// Add a new employee
    Add { name: String },

    /// List employees
    List {
        #[arg(long = "all", help = "Include inactive employees")]
        all: bool,
    },

    /// Hide an employee from submission flows (history is kept)
    Deactivate { employee: String },

    /// Re-enable a deactivated employee
    Restore { employee: String },
}
