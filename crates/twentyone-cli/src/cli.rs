use crate::utils::parser;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use twentyonestep::core::units::{Pressure, Temperature, Time};

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan",
    version,
    about = "twentyone - plan and rehearse the 21-step molecular dynamics equilibration protocol for amorphous polymers (Larsen et al., 2011).",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the 21 stages with their targets and step counts.
    Schedule(ScheduleArgs),
    /// Dry-run the full protocol against an in-memory context and report what each stage did.
    Rehearse(RehearseArgs),
}

/// Options shared by every command that generates a schedule.
#[derive(Args, Debug, Clone, Default)]
pub struct ProtocolArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the peak pressure of the ramp (e.g., '50000 bar', '5 GPa').
    #[arg(long, value_name = "QUANTITY", value_parser = parser::parse_pressure)]
    pub max_pressure: Option<Pressure>,

    /// Override the temperature of the high-temperature stages (e.g., '600 K').
    #[arg(long, value_name = "QUANTITY", value_parser = parser::parse_temperature)]
    pub max_temperature: Option<Temperature>,

    /// Override the integrator step size used for step counts (e.g., '2 fs').
    #[arg(long, value_name = "QUANTITY", value_parser = parser::parse_time)]
    pub timestep: Option<Time>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S protocol.max-pressure="20000 bar"
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable aligned table.
    #[default]
    Table,
    /// TOML document with one `[[stages]]` table per stage.
    Toml,
}

/// Arguments for the `schedule` subcommand.
#[derive(Args, Debug)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub protocol: ProtocolArgs,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Arguments for the `rehearse` subcommand.
#[derive(Args, Debug)]
pub struct RehearseArgs {
    #[command(flatten)]
    pub protocol: ProtocolArgs,

    /// Override the number of steps between Monte Carlo barostat moves.
    #[arg(long, value_name = "STEPS", allow_negative_numbers = true)]
    pub barostat_frequency: Option<i64>,

    /// Write the rehearsal report to a TOML file.
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,
}
