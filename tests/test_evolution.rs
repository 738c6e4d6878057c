use genmatch::{
    alphabet::{Alphabet, Target},
    evolution::{EvolutionLauncher, EvolutionOptions, EvolutionOutcome, LogLevel, MutationTarget},
    rng::RandomSource,
};

fn digit_options() -> EvolutionOptions {
    EvolutionOptions::builder()
        .max_generations(500)
        .population_size(50)
        .mutation_rate(0.05)
        .number_parents(2)
        .crossover_points(1)
        .crossover_rate(0.8)
        .log_level(LogLevel::None)
        .max_workers(2)
        .build()
}

fn converged_runs(
    options: &EvolutionOptions,
    target: &Target,
    seeds: std::ops::Range<u64>,
) -> usize {
    let launcher = EvolutionLauncher::for_options(options).unwrap();
    seeds
        .filter(|&seed| {
            let outcome = launcher
                .evolve(options, target, &mut RandomSource::from_seed(seed))
                .unwrap();
            match outcome {
                EvolutionOutcome::Converged { ref text, generation, .. } => {
                    assert_eq!(text, &target.to_string());
                    assert!(generation < options.get_max_generations());
                    true
                }
                EvolutionOutcome::Exhausted { .. } => false,
            }
        })
        .count()
}

#[test]
fn test_digit_target_converges() {
    let target = Target::parse("42", Alphabet::Digits).unwrap();
    let options = digit_options();

    let successes = converged_runs(&options, &target, 0..20);
    assert!(successes >= 19, "only {} of 20 runs converged", successes);
}

#[test]
fn test_single_letter_target_converges_within_two_generations() {
    // 1000 random symbols miss "Z" with probability (61/62)^1000, about 1e-7.
    let target = Target::parse("Z", Alphabet::Alphanumeric).unwrap();
    let options = EvolutionOptions::builder()
        .max_generations(2)
        .population_size(1000)
        .mutation_rate(0.05)
        .number_parents(2)
        .crossover_points(1)
        .crossover_rate(0.8)
        .max_workers(3)
        .build();

    let successes = converged_runs(&options, &target, 100..110);
    assert_eq!(successes, 10, "only {} of 10 runs converged", successes);
}

#[test]
fn test_single_letter_target_converges_in_small_population() {
    let target = Target::parse("Z", Alphabet::Alphanumeric).unwrap();
    let options = EvolutionOptions::builder()
        .max_generations(200)
        .population_size(100)
        .mutation_rate(0.05)
        .number_parents(2)
        .crossover_points(1)
        .crossover_rate(0.8)
        .max_workers(3)
        .build();

    let successes = converged_runs(&options, &target, 100..110);
    assert!(successes >= 9, "only {} of 10 runs converged", successes);
}

#[test]
fn test_parents_mutation_target_still_finds_initial_match() {
    // With fifty random single digits the target is almost always present at start.
    let target = Target::parse("7", Alphabet::Digits).unwrap();
    let mut options = digit_options();
    options.set_mutation_target(MutationTarget::Parents);

    let successes = converged_runs(&options, &target, 0..10);
    assert!(successes >= 9, "only {} of 10 runs converged", successes);
}

#[test]
fn test_exhaustion_after_single_generation() {
    let target = Target::parse("abcdefgh", Alphabet::Alphanumeric).unwrap();
    let options = EvolutionOptions::builder()
        .max_generations(1)
        .population_size(1)
        .mutation_rate(0.0)
        .crossover_rate(0.0)
        .max_workers(1)
        .build();
    let launcher = EvolutionLauncher::for_options(&options).unwrap();

    let outcome = launcher
        .evolve(&options, &target, &mut RandomSource::from_seed(31))
        .unwrap();

    match outcome {
        EvolutionOutcome::Exhausted {
            generations,
            best_text,
            best_fitness,
        } => {
            assert_eq!(generations, 1);
            assert_eq!(best_text.len(), 8);
            assert!(best_fitness < target.max_fitness());
        }
        EvolutionOutcome::Converged { .. } => panic!("a random 8-symbol guess matched"),
    }
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let target = Target::parse("Seed1", Alphabet::Alphanumeric).unwrap();
    let options = EvolutionOptions::builder()
        .max_generations(30)
        .population_size(40)
        .max_workers(3)
        .build();
    let launcher = EvolutionLauncher::for_options(&options).unwrap();

    let first = launcher
        .evolve(&options, &target, &mut RandomSource::from_seed(2024))
        .unwrap();
    let second = launcher
        .evolve(&options, &target, &mut RandomSource::from_seed(2024))
        .unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_verbose_logging_does_not_change_outcome() {
    let target = Target::parse("123", Alphabet::Digits).unwrap();
    let mut quiet = digit_options();
    quiet.set_max_generations(20);
    let mut loud = quiet.clone();
    loud.set_log_level(LogLevel::Verbose);
    let launcher = EvolutionLauncher::for_options(&quiet).unwrap();

    let a = launcher
        .evolve(&quiet, &target, &mut RandomSource::from_seed(5))
        .unwrap();
    let b = launcher
        .evolve(&loud, &target, &mut RandomSource::from_seed(5))
        .unwrap();

    assert_eq!(a, b);
}
