//! Aggregated benchmark output.

use std::time::Duration;

use crate::mst::MstStrategy;

/// Timings collected for one target vertex count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SizeResult {
    vertex_count: usize,
    trials: Vec<Duration>,
}

impl SizeResult {
    pub(super) fn new(vertex_count: usize, trials: Vec<Duration>) -> Self {
        Self {
            vertex_count,
            trials,
        }
    }

    /// Target vertex count of this step.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Per-trial MST timings in trial order.
    #[must_use]
    #[rustfmt::skip]
    pub fn trials(&self) -> &[Duration] { &self.trials }

    /// Sum of all trial timings.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.trials.iter().sum()
    }

    /// Arithmetic mean of the trial timings, truncated to whole nanoseconds.
    #[must_use]
    pub fn mean(&self) -> Duration {
        u32::try_from(self.trials.len())
            .ok()
            .and_then(|count| self.total().checked_div(count))
            .unwrap_or_default()
    }

    /// Arithmetic mean of the trial timings in milliseconds.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        clippy::float_arithmetic,
        reason = "millisecond means are reported as floating-point values"
    )]
    pub fn mean_millis(&self) -> f64 {
        if self.trials.is_empty() {
            return 0.0;
        }
        self.total().as_secs_f64() * 1_000.0 / self.trials.len() as f64
    }
}

/// Ordered per-size results of a [`crate::Benchmark`] run.
///
/// # Examples
/// ```
/// use mstbench_core::BenchmarkBuilder;
///
/// let benchmark = BenchmarkBuilder::new()
///     .with_vertex_step(4)
///     .with_max_vertices(8)
///     .with_trials_per_step(2)
///     .build()?;
/// let report = benchmark.run()?;
/// let sizes: Vec<usize> = report.pairs().map(|(size, _)| size).collect();
/// assert_eq!(sizes, vec![4, 8]);
/// # Ok::<(), mstbench_core::BenchmarkError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BenchmarkReport {
    strategy: MstStrategy,
    seed: u64,
    steps: Vec<SizeResult>,
}

impl BenchmarkReport {
    pub(super) fn new(strategy: MstStrategy, seed: u64, steps: Vec<SizeResult>) -> Self {
        Self {
            strategy,
            seed,
            steps,
        }
    }

    /// Strategy that was timed.
    #[must_use]
    #[rustfmt::skip]
    pub fn strategy(&self) -> MstStrategy { self.strategy }

    /// Base seed the trials were derived from.
    #[must_use]
    #[rustfmt::skip]
    pub fn seed(&self) -> u64 { self.seed }

    /// Per-size results in ascending size order.
    #[must_use]
    #[rustfmt::skip]
    pub fn steps(&self) -> &[SizeResult] { &self.steps }

    /// `(vertex count, mean milliseconds)` pairs in ascending size order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.steps
            .iter()
            .map(|step| (step.vertex_count(), step.mean_millis()))
    }
}
