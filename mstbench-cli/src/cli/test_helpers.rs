//! Small helpers shared across CLI tests.

use tracing_subscriber::layer::SubscriberExt;

use mstbench_test_support::tracing::RecordingLayer;

use super::{Cli, CliError, Command, OutputFormat, Summary, render_summary, run_cli};

pub(super) fn cli(command: Command) -> Cli {
    Cli {
        format: OutputFormat::Text,
        command,
    }
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

/// Runs `cli` with a recording subscriber installed for the current thread.
pub(super) fn run_recorded(cli: Cli) -> (Result<Summary, CliError>, RecordingLayer) {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let outcome = tracing::subscriber::with_default(subscriber, || run_cli(cli));
    (outcome, layer)
}

pub(super) fn render_to_string(summary: &Summary, format: OutputFormat) -> String {
    let mut buffer = Vec::new();
    render_summary(summary, format, &mut buffer).expect("rendering into memory succeeds");
    String::from_utf8(buffer).expect("rendered output is UTF-8")
}
