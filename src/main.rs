mod cli;
mod logging;

use std::process;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use const_date::{CalendarDate, factorial, power, sum};
use tracing::{debug, info};

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli.command) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

fn run(command: Command) -> Result<String> {
    match command {
        Command::Offset(args) => {
            let date: CalendarDate = args
                .date
                .parse()
                .with_context(|| format!("parsing start date {:?}", args.date))?;
            info!(%date, days = args.days, "offsetting date");
            Ok(timed("offset", || date.offset(args.days)).to_string())
        }
        Command::Normalize(args) => {
            info!(day = args.day, month = args.month, year = args.year, "normalizing");
            let date = timed("normalize", || {
                CalendarDate::new(args.day, args.month, args.year)
            });
            Ok(date.to_string())
        }
        Command::Factorial(args) => {
            let value = timed("factorial", || factorial(args.n))
                .with_context(|| format!("computing {}!", args.n))?;
            Ok(value.to_string())
        }
        Command::Power(args) => {
            Ok(timed("power", || power(args.base, args.exponent)).to_string())
        }
        Command::Sum(args) => {
            info!(count = args.values.len(), "summing");
            Ok(timed("sum", || sum(&args.values)).to_string())
        }
    }
}

/// Runs `f` and logs how long it took in nanoseconds.
fn timed<T, F: FnOnce() -> T>(operation: &str, f: F) -> T {
    let start = Instant::now();
    let result = f();
    let elapsed_ns = u64::try_from(start.elapsed().as_nanos()).unwrap_or(u64::MAX);
    debug!(operation, elapsed_ns, "evaluated");
    result
}
