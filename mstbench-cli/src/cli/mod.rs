//! Command-line interface orchestration for mstbench.
//!
//! Offers `generate`, `mst`, and `bench` commands over the core library and
//! renders their summaries as text or JSON.

mod commands;

pub use commands::{
    BenchCommand, BenchSummary, Cli, CliError, Command, GenerateCommand, GraphSummary,
    LatticeArg, MstCommand, MstSummary, OutputFormat, StepTiming, StrategyArg, Summary, TreeEdge,
    render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
