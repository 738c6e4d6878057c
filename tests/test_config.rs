use std::fs;
use std::path::PathBuf;

use genmatch::{
    alphabet::{Alphabet, Target},
    config::RunConfig,
    error::GeneticError,
    evolution::{EvolutionLauncher, LogLevel},
    rng::RandomSource,
};

fn write_config(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("genmatch-{}-{}.toml", name, std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_and_run_from_file() {
    let path = write_config(
        "run",
        "max-generations = 500\n\
         population-size = 50\n\
         mutation-rate = 0.05\n\
         number-parents = 2\n\
         crossover-points = 1\n\
         verbose = 0\n\
         crossover-rate = 0.8\n\
         max-workers = 2\n\
         seed = 11\n",
    );

    let config = RunConfig::load(&path).unwrap();
    fs::remove_file(&path).unwrap();

    let options = config.to_options();
    assert_eq!(options.get_log_level(), LogLevel::None);
    assert_eq!(options.get_max_workers(), Some(2));

    let target = Target::parse("42", Alphabet::Digits).unwrap();
    let launcher = EvolutionLauncher::for_options(&options).unwrap();
    let mut rng = RandomSource::from_seed(config.seed.unwrap());
    let outcome = launcher.evolve(&options, &target, &mut rng).unwrap();

    // 500 generations of 50 guesses leave no realistic way to miss a two-digit target.
    assert!(outcome.is_converged());
    assert_eq!(outcome.text(), "42");
}

#[test]
fn test_incomplete_file_is_a_startup_error() {
    let path = write_config("incomplete", "max-generations = 10\npopulation-size = 5\n");

    let err = RunConfig::load(&path).unwrap_err();
    fs::remove_file(&path).unwrap();

    assert!(matches!(err, GeneticError::ConfigParse(_)));
    assert!(err.is_startup_error());
}

#[test]
fn test_target_outside_alphabet_is_a_startup_error() {
    let err = Target::parse("4two", Alphabet::Digits).unwrap_err();
    assert!(matches!(err, GeneticError::InvalidTarget(_)));
    assert!(err.is_startup_error());
}
