use std::fs;
use std::io::stdout;
use std::path::PathBuf;
use anyhow::{bail, Context};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use crate::input::read_problem_bytes;
use crate::validator::{validate, CheckerConfig, DEFAULT_MAX_CIRCLES};
use crate::verdict::Verdict;

mod coverage;
mod geometry;
mod input;
mod models;
mod rejection;
mod score;
mod submission;
mod tokens;
mod validator;
mod verdict;

/// Checks a parasol placement against the official input and prints the verdict.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Official input: N followed by N coordinate pairs
  input: PathBuf,
  /// Contestant output to check
  output: PathBuf,
  /// Largest parasol count accepted before reading any parasol
  #[arg(long, env = "PARASOL_MAX_CIRCLES", default_value_t = DEFAULT_MAX_CIRCLES)]
  max_circles: usize,
  /// Print the verdict as a JSON object instead of the judge line
  #[arg(long, env = "PARASOL_JSON")]
  json: bool,
}

fn check(input: &[u8], output: &str, config: &CheckerConfig) -> Verdict {
  let problem = match read_problem_bytes(input) {
    Ok(problem) => problem,
    Err(err) => {
      error!(%err, "official input rejected");
      return Verdict::TestDataError;
    }
  };

  let verdict = Verdict::from(validate(&problem, output, config));
  info!(accepted = verdict.is_accepted(), %verdict, "checked");
  verdict
}

fn main() -> Result<(), anyhow::Error> {
  dotenvy::dotenv().ok();

  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(std::io::stderr)
    .init();

  let cli: Cli = Cli::parse();
  let config = CheckerConfig { max_circles: cli.max_circles };

  let input = fs::read(&cli.input)
    .with_context(|| format!("reading official input {}", cli.input.display()))?;
  let output = fs::read(&cli.output)
    .with_context(|| format!("reading contestant output {}", cli.output.display()))?;

  let verdict = check(&input, &String::from_utf8_lossy(&output), &config);
  verdict.report(&mut stdout().lock(), cli.json)?;

  if verdict == Verdict::TestDataError {
    bail!("official input {} is malformed", cli.input.display());
  }

  Ok(())
}
