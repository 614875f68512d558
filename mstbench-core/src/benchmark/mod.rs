//! Multi-trial MST timing harness.
//!
//! For every size step the harness first generates all trial graphs, then
//! computes one MST per trial and records the time spent inside the strategy.
//! Generation never falls inside a measured window.

mod report;
mod seed;

use rand::{SeedableRng, rngs::SmallRng};
use tracing::{Span, debug, field, info, instrument};

use crate::{
    error::BenchmarkError,
    generator::{GeneratorConfig, GraphGenerator},
    graph::Graph,
    mst::{MstEngine, MstStrategy},
};

pub use self::report::{BenchmarkReport, SizeResult};
use self::seed::{SeedStream, trial_seed};

/// Default vertex count increment between size steps.
pub const DEFAULT_VERTEX_STEP: usize = 8;
/// Default largest vertex count.
pub const DEFAULT_MAX_VERTICES: usize = 64;
/// Default number of trials per size step.
pub const DEFAULT_TRIALS_PER_STEP: usize = 5;
/// Default base seed.
pub const DEFAULT_SEED: u64 = 42;

/// Configures and constructs [`Benchmark`] instances.
///
/// # Examples
/// ```
/// use mstbench_core::{BenchmarkBuilder, MstStrategy};
///
/// let benchmark = BenchmarkBuilder::new()
///     .with_vertex_step(8)
///     .with_max_vertices(16)
///     .with_trials_per_step(5)
///     .with_strategy(MstStrategy::Prim)
///     .build()
///     .expect("configuration is valid");
/// assert_eq!(benchmark.sizes().collect::<Vec<_>>(), vec![8, 16]);
/// ```
#[derive(Clone, Debug)]
pub struct BenchmarkBuilder {
    vertex_step: usize,
    max_vertices: usize,
    trials_per_step: usize,
    strategy: MstStrategy,
    seed: u64,
    generator: GeneratorConfig,
    parallel_generation: bool,
}

impl Default for BenchmarkBuilder {
    fn default() -> Self {
        Self {
            vertex_step: DEFAULT_VERTEX_STEP,
            max_vertices: DEFAULT_MAX_VERTICES,
            trials_per_step: DEFAULT_TRIALS_PER_STEP,
            strategy: MstStrategy::default(),
            seed: DEFAULT_SEED,
            generator: GeneratorConfig::default(),
            parallel_generation: true,
        }
    }
}

impl BenchmarkBuilder {
    /// Creates a builder populated with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the vertex count increment between size steps.
    #[must_use]
    pub fn with_vertex_step(mut self, step: usize) -> Self {
        self.vertex_step = step;
        self
    }

    /// Returns the configured vertex step.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_step(&self) -> usize { self.vertex_step }

    /// Overrides the largest vertex count (inclusive).
    #[must_use]
    pub fn with_max_vertices(mut self, max: usize) -> Self {
        self.max_vertices = max;
        self
    }

    /// Returns the configured maximum vertex count.
    #[must_use]
    #[rustfmt::skip]
    pub fn max_vertices(&self) -> usize { self.max_vertices }

    /// Overrides the number of trials averaged per size step.
    #[must_use]
    pub fn with_trials_per_step(mut self, trials: usize) -> Self {
        self.trials_per_step = trials;
        self
    }

    /// Returns the configured number of trials per step.
    #[must_use]
    #[rustfmt::skip]
    pub fn trials_per_step(&self) -> usize { self.trials_per_step }

    /// Selects the MST strategy to time.
    #[must_use]
    pub fn with_strategy(mut self, strategy: MstStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the configured strategy.
    #[must_use]
    #[rustfmt::skip]
    pub fn strategy(&self) -> MstStrategy { self.strategy }

    /// Sets the base seed all trial streams derive from.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the configured seed.
    #[must_use]
    #[rustfmt::skip]
    pub fn seed(&self) -> u64 { self.seed }

    /// Overrides the generator configuration.
    #[must_use]
    pub fn with_generator_config(mut self, config: GeneratorConfig) -> Self {
        self.generator = config;
        self
    }

    /// Enables or disables generating the trials of a step on worker threads.
    ///
    /// Without the `parallel` feature generation is always sequential.
    #[must_use]
    pub fn with_parallel_generation(mut self, enabled: bool) -> Self {
        self.parallel_generation = enabled;
        self
    }

    /// Validates the configuration and constructs a [`Benchmark`].
    ///
    /// # Errors
    /// Returns [`BenchmarkError::ZeroVertexStep`], [`BenchmarkError::StepBelowTwo`],
    /// [`BenchmarkError::ZeroTrials`], [`BenchmarkError::TooManyTrials`] or
    /// [`BenchmarkError::EmptySchedule`] for an unusable schedule and
    /// [`BenchmarkError::Generator`] when the generator configuration is
    /// rejected.
    pub fn build(self) -> Result<Benchmark, BenchmarkError> {
        if self.vertex_step == 0 {
            return Err(BenchmarkError::ZeroVertexStep);
        }
        // The first size equals the step; a lone vertex has no critical link.
        if self.vertex_step < 2 {
            return Err(BenchmarkError::StepBelowTwo {
                vertex_step: self.vertex_step,
            });
        }
        if self.trials_per_step == 0 {
            return Err(BenchmarkError::ZeroTrials);
        }
        if u32::try_from(self.trials_per_step).is_err() {
            return Err(BenchmarkError::TooManyTrials {
                trials: self.trials_per_step,
            });
        }
        if self.max_vertices < self.vertex_step {
            return Err(BenchmarkError::EmptySchedule {
                vertex_step: self.vertex_step,
                max_vertices: self.max_vertices,
            });
        }
        let generator = GraphGenerator::new(self.generator)
            .map_err(|source| BenchmarkError::Generator { source })?;

        Ok(Benchmark {
            vertex_step: self.vertex_step,
            max_vertices: self.max_vertices,
            trials_per_step: self.trials_per_step,
            engine: MstEngine::new(self.strategy),
            seed: self.seed,
            generator,
            parallel_generation: self.parallel_generation,
        })
    }
}

/// A validated benchmark schedule.
#[derive(Clone, Debug)]
pub struct Benchmark {
    vertex_step: usize,
    max_vertices: usize,
    trials_per_step: usize,
    engine: MstEngine,
    seed: u64,
    generator: GraphGenerator,
    parallel_generation: bool,
}

impl Benchmark {
    /// Target vertex counts in run order: `step, 2 * step, ..` up to the maximum.
    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        (1..=self.max_vertices / self.vertex_step).map(move |index| index * self.vertex_step)
    }

    /// Number of trials averaged per size step.
    #[must_use]
    #[rustfmt::skip]
    pub fn trials_per_step(&self) -> usize { self.trials_per_step }

    /// Strategy being timed.
    #[must_use]
    pub fn strategy(&self) -> MstStrategy {
        self.engine.strategy()
    }

    /// Base seed of the run.
    #[must_use]
    #[rustfmt::skip]
    pub fn seed(&self) -> u64 { self.seed }

    /// Generator used for every trial.
    #[must_use]
    #[rustfmt::skip]
    pub fn generator(&self) -> &GraphGenerator { &self.generator }

    /// Runs every size step and returns the averaged timings.
    ///
    /// The first failing trial aborts the run; no partial report is returned.
    ///
    /// # Errors
    /// Returns [`BenchmarkError::Generation`] or [`BenchmarkError::Mst`]
    /// identifying the failing size and trial.
    #[instrument(
        name = "core.benchmark",
        err,
        skip(self),
        fields(
            step = self.vertex_step,
            max = self.max_vertices,
            trials = self.trials_per_step,
            strategy = self.engine.strategy().as_str(),
            seed = self.seed,
        ),
    )]
    pub fn run(&self) -> Result<BenchmarkReport, BenchmarkError> {
        let steps = self
            .sizes()
            .map(|vertex_count| self.run_step(vertex_count))
            .collect::<Result<Vec<_>, _>>()?;
        info!(steps = steps.len(), "benchmark completed");
        Ok(BenchmarkReport::new(self.strategy(), self.seed, steps))
    }

    #[instrument(
        name = "core.benchmark.step",
        err,
        skip(self),
        fields(mean_ms = field::Empty),
    )]
    fn run_step(&self, vertex_count: usize) -> Result<SizeResult, BenchmarkError> {
        let graphs = self.generate_trials(vertex_count)?;
        let mut timings = Vec::with_capacity(graphs.len());
        for (trial, graph) in graphs.iter().enumerate() {
            let mut rng = SmallRng::seed_from_u64(trial_seed(
                self.seed,
                vertex_count,
                trial,
                SeedStream::Weights,
            ));
            let result = self
                .engine
                .compute(graph, &mut rng)
                .map_err(|source| BenchmarkError::Mst {
                    vertex_count,
                    trial,
                    source,
                })?;
            record_trial_metrics(&result);
            debug!(trial, elapsed = ?result.elapsed(), "trial completed");
            timings.push(result.elapsed());
        }

        let step = SizeResult::new(vertex_count, timings);
        Span::current().record("mean_ms", step.mean_millis());
        Ok(step)
    }

    fn generate_trials(&self, vertex_count: usize) -> Result<Vec<Graph>, BenchmarkError> {
        let generate = |trial: usize| {
            let mut rng = SmallRng::seed_from_u64(trial_seed(
                self.seed,
                vertex_count,
                trial,
                SeedStream::Generation,
            ));
            self.generator
                .generate(vertex_count, &mut rng)
                .map_err(|source| BenchmarkError::Generation {
                    vertex_count,
                    trial,
                    source,
                })
        };
        collect_trials(self.parallel_generation, self.trials_per_step, generate)
    }
}

#[cfg(feature = "parallel")]
fn collect_trials<T, F>(parallel: bool, trials: usize, job: F) -> Result<Vec<T>, BenchmarkError>
where
    T: Send,
    F: Fn(usize) -> Result<T, BenchmarkError> + Send + Sync,
{
    use rayon::prelude::*;

    if parallel {
        (0..trials).into_par_iter().map(job).collect()
    } else {
        (0..trials).map(job).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn collect_trials<T, F>(_parallel: bool, trials: usize, job: F) -> Result<Vec<T>, BenchmarkError>
where
    F: Fn(usize) -> Result<T, BenchmarkError>,
{
    (0..trials).map(job).collect()
}

#[cfg(feature = "metrics")]
fn record_trial_metrics(result: &crate::mst::MstResult) {
    metrics::counter!("mstbench_trials_total", "strategy" => result.strategy().as_str())
        .increment(1);
    metrics::histogram!("mstbench_mst_seconds", "strategy" => result.strategy().as_str())
        .record(result.elapsed().as_secs_f64());
}

#[cfg(not(feature = "metrics"))]
fn record_trial_metrics(_result: &crate::mst::MstResult) {}

#[cfg(test)]
mod tests;
