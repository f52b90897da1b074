use regression_ga::prelude::*;

fn linear_config(chrom_len: usize) -> RunConfig {
    RunConfigBuilder::new()
        .with_population_size(120)
        .with_max_generations(250)
        .with_bounds(Bounds::uniform(-10.0, 10.0))
        .with_function_mask(FunctionMask::all())
        .with_operator_mask(OperatorMask::all())
        .with_chrom_len(chrom_len)
        .with_crossover_scheme(CrossoverScheme::BlxAlpha { alpha: 0.5 })
        .with_mutation_scheme(MutationScheme::Gaussian { scale: 6.0 })
        .with_selection_scheme(SelectionScheme::Tournament { size: 3 })
        .try_into()
        .unwrap()
}

#[test]
fn run_converges_on_a_noiseless_linear_sample() {
    let fitness_fn = FitnessFunction::new(
        vec![0.0, 1.0, 2.0, 3.0, 4.0],
        vec![3.0, 5.0, 7.0, 9.0, 11.0],
        ErrorMetric::LeastSquares,
    )
    .unwrap();

    let mut ga: Ga = Ga::builder()
        .with_config(linear_config(1))
        .with_fitness_function(fitness_fn)
        .with_rng(GaRng::from_seed_u64(2024))
        .try_into()
        .unwrap();

    let ranked = ga.run();
    let best = &ranked[0];
    assert!(best.is_evaluated());

    let predicted = decode(&best.chromosome.genes, &[0.0, 1.0, 2.0, 3.0, 4.0]);
    let targets = [3.0, 5.0, 7.0, 9.0, 11.0];
    for (p, t) in predicted.iter().zip(targets) {
        assert!((p - t).abs() < 0.5, "predicted {p} too far from target {t}");
    }
}

#[test]
fn determinism_end_to_end() {
    let make = || {
        let fitness_fn = FitnessFunction::new(
            vec![0.0, 1.0, 2.0],
            vec![1.0, 4.0, 9.0],
            ErrorMetric::LeastSquares,
        )
        .unwrap();
        let ga: Ga = Ga::builder()
            .with_config(linear_config(2))
            .with_fitness_function(fitness_fn)
            .with_rng(GaRng::from_seed_u64(99))
            .try_into()
            .unwrap();
        ga
    };

    let mut a = make();
    let mut b = make();
    let ranked_a = a.run().to_vec();
    let ranked_b = b.run().to_vec();

    for (ca, cb) in ranked_a.iter().zip(&ranked_b) {
        assert_eq!(ca.chromosome, cb.chromosome);
        assert_eq!(ca.fitness_value(), cb.fitness_value());
    }
}

#[test]
fn preset_form_run_keeps_the_pattern_fixed() {
    let config: RunConfig = RunConfigBuilder::new()
        .with_population_size(40)
        .with_max_generations(20)
        .with_bounds(Bounds::uniform(-5.0, 5.0))
        .with_function_mask(FunctionMask::all())
        .with_operator_mask(OperatorMask::all())
        .with_preset_form("2+1")
        .unwrap()
        .try_into()
        .unwrap();

    let fitness_fn = FitnessFunction::new(
        vec![0.0, 1.0, 2.0],
        vec![3.0, 4.0, 7.0],
        ErrorMetric::LeastSquares,
    )
    .unwrap();

    let mut ga: Ga = Ga::builder()
        .with_config(config)
        .with_fitness_function(fitness_fn)
        .with_rng(GaRng::from_seed_u64(5))
        .try_into()
        .unwrap();

    let ranked = ga.run();
    for cand in ranked {
        // preset "2+1" -> fid[0]=1 (lin), fid[1]=0 (c)
        assert_eq!(cand.chromosome.genes[0].fid, 1);
        assert_eq!(cand.chromosome.genes[1].fid, 0);
    }
}

#[test]
fn error_metric_identities_hold() {
    let x = vec![0.0, 1.0, 2.0];
    let y = vec![3.0, 5.0, 7.0];
    let candidate = Candidate::new(Chromosome::new(vec![Gene::new(
        1,
        [2.0, 0.0, 0.0, 3.0, 0.0],
        Operator::Add,
    )]));

    let ls = FitnessFunction::new(x.clone(), y.clone(), ErrorMetric::LeastSquares).unwrap();
    let lad = FitnessFunction::new(x.clone(), y.clone(), ErrorMetric::LeastAbsoluteDeviation).unwrap();
    let rmse = FitnessFunction::new(x.clone(), y.clone(), ErrorMetric::RootMeanSquare).unwrap();
    let minmax = FitnessFunction::new(x, y, ErrorMetric::MinMax).unwrap();

    assert_eq!(ls.error(&candidate), 0.0);
    assert_eq!(lad.error(&candidate), 0.0);
    assert_eq!(minmax.error(&candidate), 0.0);
    assert_eq!(rmse.error(&candidate), ls.error(&candidate).sqrt());
}
