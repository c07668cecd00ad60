use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftwatch
/// CLI application to evaluate work shifts against labor-law limits
#[derive(Parser)]
#[command(
    name = "shiftwatch",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track a day's work shift: worked time, exit window, overtime and lunch compliance",
    long_about = None
)]
pub struct Cli {
    /// Override config file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file with the default profile catalog
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file location")]
        path: bool,
    },

    /// List the shift profile catalog
    Profiles,

    /// Evaluate a day's recorded times
    Eval {
        /// Date of the record (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,

        /// Entry time (HH:MM)
        #[arg(long, value_name = "HH:MM")]
        entry: Option<String>,

        /// Lunch departure time (HH:MM)
        #[arg(long = "lunch-out", value_name = "HH:MM")]
        lunch_out: Option<String>,

        /// Lunch return time (HH:MM)
        #[arg(long = "lunch-in", value_name = "HH:MM")]
        lunch_in: Option<String>,

        /// Hypothetical exit time: evaluate "what if I leave then"
        /// instead of using the live clock
        #[arg(long, value_name = "HH:MM")]
        exit: Option<String>,

        /// Evaluate at this fixed clock instant instead of now
        #[arg(long, value_name = "HH:MM")]
        now: Option<String>,

        /// Shift profile name (default: the configured default_profile)
        #[arg(long)]
        profile: Option<String>,

        /// Emit the result as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Validate a lunch departure/return pair before recording it
    Lunch {
        /// Lunch departure time (HH:MM)
        lunch_out: String,

        /// Lunch return time (HH:MM)
        lunch_in: String,

        #[arg(long)]
        profile: Option<String>,
    },

    /// Re-evaluate today's times on a periodic tick, reporting each alert
    /// and notification trigger once
    Watch {
        /// Entry time (HH:MM)
        #[arg(long, value_name = "HH:MM")]
        entry: Option<String>,

        #[arg(long = "lunch-out", value_name = "HH:MM")]
        lunch_out: Option<String>,

        #[arg(long = "lunch-in", value_name = "HH:MM")]
        lunch_in: Option<String>,

        #[arg(long)]
        profile: Option<String>,

        /// Stop after N ticks instead of running until interrupted
        #[arg(long, hide = true)]
        ticks: Option<u64>,
    },
}
