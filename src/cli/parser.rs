use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rlapdelta
/// CLI application to post-process F1 lap timing data
#[derive(Parser)]
#[command(
    name = "rlapdelta",
    version = env!("CARGO_PKG_VERSION"),
    about = "Post-process F1 timing data: gaps to the car ahead, ideal laps, fuel-corrected pace",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Disable coloured output
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Lap dataset to analyse (CSV with FastF1 column names)
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    #[arg(long, short = 'i', value_name = "FILE")]
    pub input: String,
}

/// Optional export of the result table
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[arg(long = "export", short = 'o', value_name = "FILE", help = "Write the result table to FILE")]
    pub export: Option<String>,

    #[arg(long, value_enum, help = "Export format (default from config)")]
    pub format: Option<ExportFormat>,

    #[arg(long, short = 'f', help = "Overwrite the export file without asking")]
    pub force: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Show the configuration in use
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file path")]
        path: bool,
    },

    /// Gap to the car ahead at the start of every lap
    Gaps {
        #[command(flatten)]
        input: InputArgs,

        #[arg(long, help = "Show only this lap")]
        lap: Option<u32>,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Best sectors, ideal lap and time left on the table per driver
    Ideal {
        #[command(flatten)]
        input: InputArgs,

        #[arg(long, short = 'd', help = "Single driver code (e.g. VER)")]
        driver: Option<String>,

        #[arg(long, help = "Show the N drivers with the best laps")]
        top: Option<usize>,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Fuel-corrected lap times and stint summary for one driver
    Stints {
        #[command(flatten)]
        input: InputArgs,

        #[arg(long, short = 'd', help = "Driver code (e.g. VER)")]
        driver: String,

        #[arg(long = "fuel-coeff", help = "Seconds per lap of fuel effect (default from config)")]
        fuel_coeff: Option<f64>,

        #[arg(long = "green-only", help = "Only laps run under green flag (TrackStatus 1)")]
        green_only: bool,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Delta of each driver's fastest lap to the fastest lap of the session
    Delta {
        #[command(flatten)]
        input: InputArgs,

        #[arg(long, help = "Show the first N drivers")]
        top: Option<usize>,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Highest speed-trap reading per driver
    Speed {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        export: ExportArgs,
    },
}
