//! staffgen: staffing windows and a simulated worker pool for one date.
//!
//! Usage:
//!   staffgen 2023-11-15 < forecast.json
//!   staffgen 2023-11-15 --seed 12345 --input forecast.json --output workers.json
//!   staffgen 2023-11-15 --config generator.json

use anyhow::{Context, Result};
use staffgen_core::{
    config::GeneratorConfig, forecast::ForecastDocument, generator::GeneratorContext,
};
use std::env;
use std::fs::File;
use std::io::{self, BufReader, Write};

const FLAGS: [&str; 4] = ["--seed", "--input", "--output", "--config"];
const USAGE: &str =
    "usage: staffgen <YYYY-MM-DD> [--seed N] [--input PATH] [--output PATH] [--config PATH]";

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let date = positional_date(&args).context(USAGE)?;
    let seed = parse_arg(&args, "--seed")?.unwrap_or_else(clock_seed);
    let input = flag_value(&args, "--input");
    let output = flag_value(&args, "--output");

    let config = match flag_value(&args, "--config") {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    log::info!("staffgen date={date} seed={seed} trials={}", config.trial_count);

    let document = match input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("Cannot open {path}"))?;
            ForecastDocument::from_reader(BufReader::new(file))?
        }
        None => ForecastDocument::from_reader(io::stdin().lock())?,
    };

    let mut ctx = GeneratorContext::seeded(config, seed)?;
    let result = ctx.generate(&document, date)?;
    let content = result.to_json_pretty()?;

    match output {
        Some(path) => {
            let mut file = File::create(path).with_context(|| format!("Cannot create {path}"))?;
            writeln!(file, "{content}")?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{content}")?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// First argument that is neither a flag nor a flag's value.
fn positional_date(args: &[String]) -> Option<&str> {
    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        if FLAGS.contains(&arg.as_str()) {
            rest.next();
            continue;
        }
        return Some(arg.as_str());
    }
    None
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

/// `None` when the flag is absent; an error when its value does not parse.
fn parse_arg<T>(args: &[String], flag: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    flag_value(args, flag)
        .map(|v| v.parse().with_context(|| format!("{flag} expects a number, got '{v}'")))
        .transpose()
}

/// Non-fixed production seed. Logged so a run can be replayed with --seed.
fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
