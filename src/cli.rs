use clap::{Parser, Subcommand};

/// Evaluate calendar offsets and const arithmetic helpers.
#[derive(Debug, Parser)]
#[command(
    name = "const-date",
    version,
    about = "Self-normalizing calendar dates and const arithmetic"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shift a date by a number of days.
    Offset(OffsetArgs),
    /// Normalize a raw day/month/year triple.
    Normalize(NormalizeArgs),
    /// Compute n! for a positive integer.
    Factorial(FactorialArgs),
    /// Raise a base to an integer exponent.
    Power(PowerArgs),
    /// Sum a list of numbers.
    Sum(SumArgs),
}

/// Arguments for the `offset` subcommand.
#[derive(Debug, clap::Args)]
pub struct OffsetArgs {
    /// Start date as YYYY-MM-DD.
    #[arg(allow_hyphen_values = true)]
    pub date: String,

    /// Days to add; negative values go backwards.
    #[arg(allow_negative_numbers = true)]
    pub days: i32,
}

/// Arguments for the `normalize` subcommand.
#[derive(Debug, clap::Args)]
pub struct NormalizeArgs {
    /// Day of month, may be out of range.
    #[arg(allow_negative_numbers = true)]
    pub day: i32,

    /// Month, may be out of range.
    #[arg(allow_negative_numbers = true)]
    pub month: i32,

    /// Year.
    #[arg(allow_negative_numbers = true)]
    pub year: i32,
}

/// Arguments for the `factorial` subcommand.
#[derive(Debug, clap::Args)]
pub struct FactorialArgs {
    /// Input value.
    #[arg(allow_negative_numbers = true)]
    pub n: i64,
}

/// Arguments for the `power` subcommand.
#[derive(Debug, clap::Args)]
pub struct PowerArgs {
    /// Base.
    #[arg(allow_negative_numbers = true)]
    pub base: f64,

    /// Integer exponent.
    #[arg(allow_negative_numbers = true)]
    pub exponent: i32,
}

/// Arguments for the `sum` subcommand.
#[derive(Debug, clap::Args)]
pub struct SumArgs {
    /// Values to add.
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<f64>,
}
