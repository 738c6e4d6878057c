use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use genmatch::{
    config::RunConfig, Alphabet, EvolutionLauncher, EvolutionOutcome, GeneticError, RandomSource,
    Target,
};

const EXIT_MATCH: u8 = 0;
const EXIT_NO_MATCH: u8 = 1;
const EXIT_STARTUP_ERROR: u8 = 2;
const EXIT_RUNTIME_ERROR: u8 = 3;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the TOML run configuration
    config: PathBuf,
    /// The sequence to evolve toward
    target: String,
    /// Search for a digit sequence instead of an alphanumeric string
    #[arg(long)]
    digits: bool,
    /// Seed for a reproducible run, overriding `seed` from the configuration
    #[arg(long)]
    seed: Option<u64>,
    /// Maximum number of concurrent evaluation workers, overriding `max-workers`
    #[arg(long)]
    workers: Option<usize>,
}

fn run(args: &Args) -> Result<EvolutionOutcome, GeneticError> {
    let config = RunConfig::load(&args.config)?;

    let alphabet = if args.digits {
        Alphabet::Digits
    } else {
        Alphabet::Alphanumeric
    };
    let target = Target::parse(&args.target, alphabet)?;

    let mut options = config.to_options();
    if args.workers.is_some() {
        options.set_max_workers(args.workers);
        options.validate()?;
    }

    let mut rng = match args.seed.or(config.seed) {
        Some(seed) => RandomSource::from_seed(seed),
        None => RandomSource::new(),
    };

    let launcher = EvolutionLauncher::for_options(&options)?;
    launcher.evolve(&options, &target, &mut rng)
}

fn exit_code(result: &Result<EvolutionOutcome, GeneticError>) -> u8 {
    match result {
        Ok(outcome) if outcome.is_converged() => EXIT_MATCH,
        Ok(_) => EXIT_NO_MATCH,
        Err(e) if e.is_startup_error() => EXIT_STARTUP_ERROR,
        Err(_) => EXIT_RUNTIME_ERROR,
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();

    let args = Args::parse();
    let result = run(&args);
    match &result {
        Ok(outcome) => println!("{}", outcome),
        Err(e) => eprintln!("Fatal error: {}", e),
    }
    ExitCode::from(exit_code(&result))
}
