use std::time::Duration;

use rstest::rstest;

use super::*;
use crate::{error::BenchmarkErrorCode, generator::LatticeKind};

fn small() -> BenchmarkBuilder {
    BenchmarkBuilder::new()
        .with_vertex_step(8)
        .with_max_vertices(16)
        .with_trials_per_step(5)
}

#[test]
fn builder_defaults() {
    let builder = BenchmarkBuilder::default();
    assert_eq!(builder.vertex_step(), DEFAULT_VERTEX_STEP);
    assert_eq!(builder.max_vertices(), DEFAULT_MAX_VERTICES);
    assert_eq!(builder.trials_per_step(), DEFAULT_TRIALS_PER_STEP);
    assert_eq!(builder.strategy(), MstStrategy::Kruskal);
    assert_eq!(builder.seed(), DEFAULT_SEED);
}

#[rstest]
#[case::zero_step(BenchmarkBuilder::new().with_vertex_step(0), BenchmarkErrorCode::ZeroVertexStep)]
#[case::single_vertex_step(
    BenchmarkBuilder::new().with_vertex_step(1).with_max_vertices(3).with_trials_per_step(2),
    BenchmarkErrorCode::StepBelowTwo
)]
#[case::zero_trials(
    BenchmarkBuilder::new().with_trials_per_step(0),
    BenchmarkErrorCode::ZeroTrials
)]
#[case::max_below_step(
    BenchmarkBuilder::new().with_vertex_step(10).with_max_vertices(9),
    BenchmarkErrorCode::EmptySchedule
)]
#[case::bad_generator(
    BenchmarkBuilder::new().with_generator_config(GeneratorConfig {
        oversize_factor: 0.9,
        lattice: LatticeKind::Crossed,
    }),
    BenchmarkErrorCode::Generator
)]
fn build_rejects_invalid_configuration(
    #[case] builder: BenchmarkBuilder,
    #[case] expected: BenchmarkErrorCode,
) {
    let err = builder.build().expect_err("configuration must be rejected");
    assert_eq!(err.code(), expected);
}

#[test]
fn smallest_accepted_step_runs_to_completion() {
    let report = BenchmarkBuilder::new()
        .with_vertex_step(2)
        .with_max_vertices(4)
        .with_trials_per_step(2)
        .build()
        .expect("step of two is valid")
        .run()
        .expect("every size has at least one edge");
    let sizes: Vec<usize> = report.steps().iter().map(SizeResult::vertex_count).collect();
    assert_eq!(sizes, vec![2, 4]);
}

#[test]
fn step_below_two_reports_the_rejected_step() {
    let err = BenchmarkBuilder::new()
        .with_vertex_step(1)
        .build()
        .expect_err("step of one must be rejected");
    assert_eq!(err, BenchmarkError::StepBelowTwo { vertex_step: 1 });
    assert_eq!(err.code().as_str(), "BENCHMARK_STEP_BELOW_TWO");
    assert_eq!(err.trial_code(), None);
}

#[cfg(target_pointer_width = "64")]
#[test]
fn build_rejects_trial_counts_beyond_u32() {
    let trials = u32::MAX as usize + 1;
    let err = BenchmarkBuilder::new()
        .with_trials_per_step(trials)
        .build()
        .expect_err("trial count must be rejected");
    assert_eq!(err, BenchmarkError::TooManyTrials { trials });
}

#[rstest]
#[case(8, 64, vec![8, 16, 24, 32, 40, 48, 56, 64])]
#[case(8, 70, vec![8, 16, 24, 32, 40, 48, 56, 64])]
#[case(5, 5, vec![5])]
#[case(3, 10, vec![3, 6, 9])]
fn sizes_follow_the_step(#[case] step: usize, #[case] max: usize, #[case] expected: Vec<usize>) {
    let benchmark = BenchmarkBuilder::new()
        .with_vertex_step(step)
        .with_max_vertices(max)
        .build()
        .expect("configuration is valid");
    assert_eq!(benchmark.sizes().collect::<Vec<_>>(), expected);
}

#[rstest]
#[case::kruskal(MstStrategy::Kruskal)]
#[case::prim(MstStrategy::Prim)]
fn run_reports_one_entry_per_size(#[case] strategy: MstStrategy) {
    let report = small()
        .with_strategy(strategy)
        .build()
        .expect("configuration is valid")
        .run()
        .expect("run must succeed");

    assert_eq!(report.strategy(), strategy);
    let sizes: Vec<usize> = report.steps().iter().map(SizeResult::vertex_count).collect();
    assert_eq!(sizes, vec![8, 16]);
    for step in report.steps() {
        assert_eq!(step.trials().len(), 5);
        assert!(step.mean_millis() >= 0.0);
    }
}

#[test]
fn sequential_and_parallel_generation_agree() {
    let run = |parallel: bool| {
        small()
            .with_seed(7)
            .with_parallel_generation(parallel)
            .build()
            .expect("configuration is valid")
    };
    let parallel = run(true);
    let sequential = run(false);
    for size in parallel.sizes() {
        let left = parallel.generate_trials(size).expect("generation succeeds");
        let right = sequential.generate_trials(size).expect("generation succeeds");
        assert_eq!(left.len(), right.len());
        for (a, b) in left.iter().zip(&right) {
            assert_eq!(a.vertices().collect::<Vec<_>>(), b.vertices().collect::<Vec<_>>());
            assert_eq!(a.edge_count(), b.edge_count());
        }
    }
}

#[test]
fn mean_is_the_average_of_trials() {
    let step = SizeResult::new(
        8,
        vec![
            Duration::from_millis(1),
            Duration::from_millis(2),
            Duration::from_millis(6),
        ],
    );
    assert_eq!(step.total(), Duration::from_millis(9));
    assert_eq!(step.mean(), Duration::from_millis(3));
    assert!((step.mean_millis() - 3.0).abs() < 1e-9);
}

#[test]
fn empty_step_has_zero_mean() {
    let step = SizeResult::new(8, Vec::new());
    assert_eq!(step.mean(), Duration::ZERO);
    assert_eq!(step.mean_millis(), 0.0);
}

#[test]
fn pairs_follow_step_order() {
    let report = BenchmarkReport::new(
        MstStrategy::Prim,
        1,
        vec![
            SizeResult::new(8, vec![Duration::from_millis(2)]),
            SizeResult::new(16, vec![Duration::from_millis(4)]),
        ],
    );
    let pairs: Vec<(usize, f64)> = report.pairs().collect();
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].0, 8);
    assert!((pairs[0].1 - 2.0).abs() < 1e-9);
    assert_eq!(pairs[1].0, 16);
    assert!((pairs[1].1 - 4.0).abs() < 1e-9);
    assert_eq!(report.seed(), 1);
}
