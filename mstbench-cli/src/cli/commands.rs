//! Command implementations and argument parsing for the mstbench CLI.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand, ValueEnum};
use mstbench_core::{
    BenchmarkBuilder, BenchmarkError, BenchmarkReport, DEFAULT_MAX_VERTICES,
    DEFAULT_OVERSIZE_FACTOR, DEFAULT_SEED, DEFAULT_TRIALS_PER_STEP, DEFAULT_VERTEX_STEP,
    GenerateError, GeneratorConfig, Graph, GraphGenerator, LatticeKind, MstEngine, MstError,
    MstResult, MstStrategy,
};
use rand::{SeedableRng, rngs::SmallRng};
use serde::Serialize;
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "mstbench",
    about = "Generate connected random graphs and benchmark MST strategies."
)]
pub struct Cli {
    /// Output format for the command summary.
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate one connected graph and describe it.
    Generate(GenerateCommand),
    /// Generate one graph and compute its MST with a random critical link.
    Mst(MstCommand),
    /// Time an MST strategy across increasing graph sizes.
    Bench(BenchCommand),
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Exact number of vertices to produce.
    #[arg(long)]
    pub vertices: usize,

    /// Seed for the random number generator.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Lattice grown before trimming.
    #[arg(long, value_enum, default_value_t = LatticeArg::Crossed)]
    pub lattice: LatticeArg,

    /// Factor applied to the vertex count when sizing the lattice.
    #[arg(long, default_value_t = DEFAULT_OVERSIZE_FACTOR)]
    pub oversize: f64,
}

/// Options accepted by the `mst` command.
#[derive(Debug, Args, Clone)]
pub struct MstCommand {
    /// Exact number of vertices in the generated graph.
    #[arg(long)]
    pub vertices: usize,

    /// Algorithm used to build the tree.
    #[arg(long, value_enum, default_value_t = StrategyArg::Kruskal)]
    pub strategy: StrategyArg,

    /// Seed for generation, weights, and the critical link.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}

/// Options accepted by the `bench` command.
#[derive(Debug, Args, Clone)]
pub struct BenchCommand {
    /// Vertex count increment between sizes.
    #[arg(long, default_value_t = DEFAULT_VERTEX_STEP)]
    pub step: usize,

    /// Largest vertex count (inclusive).
    #[arg(long, default_value_t = DEFAULT_MAX_VERTICES)]
    pub max: usize,

    /// Trials averaged per size.
    #[arg(long, default_value_t = DEFAULT_TRIALS_PER_STEP)]
    pub trials: usize,

    /// Algorithm to time.
    #[arg(long, value_enum, default_value_t = StrategyArg::Kruskal)]
    pub strategy: StrategyArg,

    /// Base seed for every trial.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Generate trial graphs on the calling thread only.
    #[arg(long)]
    pub sequential: bool,
}

/// Rendering formats for command summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Line-oriented, human-readable text.
    #[default]
    Text,
    /// A single pretty-printed JSON document.
    Json,
}

/// MST strategies selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Kruskal's algorithm.
    Kruskal,
    /// Prim's algorithm.
    Prim,
}

impl From<StrategyArg> for MstStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Kruskal => Self::Kruskal,
            StrategyArg::Prim => Self::Prim,
        }
    }
}

/// Lattice shapes selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LatticeArg {
    /// Grid with both diagonals in every cell.
    Crossed,
    /// Grid with horizontal and vertical edges only.
    Orthogonal,
}

impl From<LatticeArg> for LatticeKind {
    fn from(value: LatticeArg) -> Self {
        match value {
            LatticeArg::Crossed => Self::Crossed,
            LatticeArg::Orthogonal => Self::Orthogonal,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Graph generation failed.
    #[error(transparent)]
    Generate(#[from] GenerateError),
    /// MST computation failed.
    #[error(transparent)]
    Mst(#[from] MstError),
    /// Benchmark configuration or execution failed.
    #[error(transparent)]
    Benchmark(#[from] BenchmarkError),
}

impl CliError {
    /// Stable code of the underlying core error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Generate(err) => err.code().as_str(),
            Self::Mst(err) => err.code().as_str(),
            Self::Benchmark(err) => err.code().as_str(),
        }
    }

    /// Code of the stage error that aborted a benchmark trial, if any.
    #[must_use]
    pub const fn trial_code(&self) -> Option<&'static str> {
        match self {
            Self::Benchmark(err) => err.trial_code(),
            _ => None,
        }
    }
}

/// Outcome of one CLI command, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Summary {
    /// Produced by `generate`.
    Generate(GraphSummary),
    /// Produced by `mst`.
    Mst(MstSummary),
    /// Produced by `bench`.
    Bench(BenchSummary),
}

/// Shape of a generated graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    /// Seed the graph was generated from.
    pub seed: u64,
    /// Lattice label.
    pub lattice: &'static str,
    /// Live vertex count.
    pub vertices: usize,
    /// Live edge count.
    pub edges: usize,
    /// Number of articulation points in the result.
    pub articulation_points: usize,
}

impl GraphSummary {
    fn describe(graph: &Graph, seed: u64, lattice: LatticeKind) -> Self {
        Self {
            seed,
            lattice: lattice.as_str(),
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            articulation_points: graph.articulation_points().len(),
        }
    }
}

/// One accepted tree edge, identified by its endpoint ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TreeEdge {
    /// Smaller endpoint id.
    pub source: usize,
    /// Larger endpoint id.
    pub target: usize,
    /// True edge weight.
    pub weight: u32,
}

/// Result of the `mst` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MstSummary {
    /// Strategy label.
    pub strategy: &'static str,
    /// Seed the run was derived from.
    pub seed: u64,
    /// Graph vertex count.
    pub vertices: usize,
    /// Graph edge count.
    pub edges: usize,
    /// The forced critical link with its restored weight.
    pub critical_link: TreeEdge,
    /// Sum of the accepted edge weights.
    pub total_weight: u64,
    /// Nanoseconds spent inside the strategy.
    pub elapsed_ns: u64,
    /// Accepted edges in acceptance order.
    pub tree: Vec<TreeEdge>,
}

impl MstSummary {
    fn describe(result: &MstResult, seed: u64) -> Self {
        let critical = result.critical_link();
        Self {
            strategy: result.strategy().as_str(),
            seed,
            vertices: result.graph().vertex_count(),
            edges: result.graph().edge_count(),
            critical_link: TreeEdge {
                source: critical.source().index(),
                target: critical.target().index(),
                weight: critical.original_weight(),
            },
            total_weight: result.total_weight(),
            elapsed_ns: u64::try_from(result.elapsed().as_nanos()).unwrap_or(u64::MAX),
            tree: result
                .edges()
                .iter()
                .map(|edge| TreeEdge {
                    source: edge.source().index(),
                    target: edge.target().index(),
                    weight: edge.weight(),
                })
                .collect(),
        }
    }
}

/// Mean timing for one benchmarked size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepTiming {
    /// Target vertex count.
    pub vertices: usize,
    /// Mean MST time in milliseconds.
    pub mean_ms: f64,
}

/// Result of the `bench` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchSummary {
    /// Strategy label.
    pub strategy: &'static str,
    /// Base seed.
    pub seed: u64,
    /// Trials averaged per size.
    pub trials: usize,
    /// Per-size means in ascending size order.
    pub steps: Vec<StepTiming>,
}

impl BenchSummary {
    fn describe(report: &BenchmarkReport, trials: usize) -> Self {
        Self {
            strategy: report.strategy().as_str(),
            seed: report.seed(),
            trials,
            steps: report
                .pairs()
                .map(|(vertices, mean_ms)| StepTiming { vertices, mean_ms })
                .collect(),
        }
    }
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when generation, MST computation, or benchmarking
/// fails.
///
/// # Examples
/// ```
/// use mstbench_cli::cli::{
///     Cli, Command, GenerateCommand, LatticeArg, OutputFormat, Summary, run_cli,
/// };
///
/// let cli = Cli {
///     format: OutputFormat::Text,
///     command: Command::Generate(GenerateCommand {
///         vertices: 10,
///         seed: 1,
///         lattice: LatticeArg::Crossed,
///         oversize: 1.2,
///     }),
/// };
/// let Summary::Generate(graph) = run_cli(cli)? else {
///     panic!("generate yields a graph summary");
/// };
/// assert_eq!(graph.vertices, 10);
/// # Ok::<(), mstbench_cli::cli::CliError>(())
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<Summary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Generate(command) => {
            span.record("command", field::display("generate"));
            run_generate(command)
        }
        Command::Mst(command) => {
            span.record("command", field::display("mst"));
            run_mst(command)
        }
        Command::Bench(command) => {
            span.record("command", field::display("bench"));
            run_bench(command)
        }
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(vertices = command.vertices, seed = command.seed),
)]
pub(super) fn run_generate(command: GenerateCommand) -> Result<Summary, CliError> {
    let lattice = LatticeKind::from(command.lattice);
    let generator = GraphGenerator::new(GeneratorConfig {
        oversize_factor: command.oversize,
        lattice,
    })?;
    let mut rng = SmallRng::seed_from_u64(command.seed);
    let graph = generator.generate(command.vertices, &mut rng)?;
    let summary = GraphSummary::describe(&graph, command.seed, lattice);
    info!(
        vertices = summary.vertices,
        edges = summary.edges,
        "graph generated"
    );
    Ok(Summary::Generate(summary))
}

#[instrument(
    name = "cli.mst",
    err,
    skip(command),
    fields(vertices = command.vertices, strategy = field::Empty, seed = command.seed),
)]
pub(super) fn run_mst(command: MstCommand) -> Result<Summary, CliError> {
    let strategy = MstStrategy::from(command.strategy);
    Span::current().record("strategy", field::display(strategy));
    let mut rng = SmallRng::seed_from_u64(command.seed);
    let graph = GraphGenerator::default().generate(command.vertices, &mut rng)?;
    let result = MstEngine::new(strategy).compute(&graph, &mut rng)?;
    let summary = MstSummary::describe(&result, command.seed);
    info!(
        total_weight = summary.total_weight,
        elapsed_ns = summary.elapsed_ns,
        "spanning tree computed"
    );
    Ok(Summary::Mst(summary))
}

#[instrument(
    name = "cli.bench",
    err,
    skip(command),
    fields(step = command.step, max = command.max, trials = command.trials),
)]
pub(super) fn run_bench(command: BenchCommand) -> Result<Summary, CliError> {
    let report = BenchmarkBuilder::new()
        .with_vertex_step(command.step)
        .with_max_vertices(command.max)
        .with_trials_per_step(command.trials)
        .with_strategy(command.strategy.into())
        .with_seed(command.seed)
        .with_parallel_generation(!command.sequential)
        .build()?
        .run()?;
    let summary = BenchSummary::describe(&report, command.trials);
    info!(sizes = summary.steps.len(), "benchmark completed");
    Ok(Summary::Bench(summary))
}

/// Renders `summary` to `writer` in the requested format.
///
/// # Errors
/// Returns [`io::Error`] if writing or JSON encoding fails.
///
/// # Examples
/// ```
/// use mstbench_cli::cli::{BenchSummary, OutputFormat, StepTiming, Summary, render_summary};
///
/// let summary = Summary::Bench(BenchSummary {
///     strategy: "kruskal",
///     seed: 42,
///     trials: 5,
///     steps: vec![StepTiming { vertices: 8, mean_ms: 0.5 }],
/// });
/// let mut buffer = Vec::new();
/// render_summary(&summary, OutputFormat::Text, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer).expect("utf-8"),
///     "strategy: kruskal\nseed: 42\ntrials: 5\nvertices\tmean_ms\n8\t0.500000\n"
/// );
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn render_summary(
    summary: &Summary,
    format: OutputFormat,
    mut writer: impl Write,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, summary).map_err(io::Error::from)?;
            writeln!(writer)
        }
        OutputFormat::Text => render_text(summary, writer),
    }
}

fn render_text(summary: &Summary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        Summary::Generate(graph) => {
            writeln!(writer, "lattice: {}", graph.lattice)?;
            writeln!(writer, "seed: {}", graph.seed)?;
            writeln!(writer, "vertices: {}", graph.vertices)?;
            writeln!(writer, "edges: {}", graph.edges)?;
            writeln!(writer, "articulation points: {}", graph.articulation_points)
        }
        Summary::Mst(mst) => {
            writeln!(writer, "strategy: {}", mst.strategy)?;
            writeln!(writer, "seed: {}", mst.seed)?;
            writeln!(writer, "vertices: {}", mst.vertices)?;
            writeln!(writer, "edges: {}", mst.edges)?;
            let critical = mst.critical_link;
            writeln!(
                writer,
                "critical link: {} - {} ({})",
                critical.source, critical.target, critical.weight
            )?;
            writeln!(writer, "total weight: {}", mst.total_weight)?;
            writeln!(writer, "elapsed ns: {}", mst.elapsed_ns)?;
            for edge in &mst.tree {
                writeln!(writer, "{}\t{}\t{}", edge.source, edge.target, edge.weight)?;
            }
            Ok(())
        }
        Summary::Bench(bench) => {
            writeln!(writer, "strategy: {}", bench.strategy)?;
            writeln!(writer, "seed: {}", bench.seed)?;
            writeln!(writer, "trials: {}", bench.trials)?;
            writeln!(writer, "vertices\tmean_ms")?;
            for step in &bench.steps {
                writeln!(writer, "{}\t{:.6}", step.vertices, step.mean_ms)?;
            }
            Ok(())
        }
    }
}
