//! `tsunagi` binary: reads an edge list, prints its minimum spanning forest.
//!
//! The forest report is the only output on `stdout`. Failures are logged on
//! `stderr` together with the stable error codes from `tsunagi-core` so that
//! scripts can match on `MST_*` and `DISJOINT_SET_*` rather than on prose.

use std::{
    io::{self, BufWriter, Write},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;
use tsunagi_cli::{
    cli::{Cli, CliError, render_report, run_cli},
    logging::{self, LoggingError},
};
use tsunagi_core::{DisjointSetErrorCode, MstErrorCode};

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.format;
    let report = run_cli(cli).context("failed to compute the spanning forest")?;

    let mut out = BufWriter::new(io::stdout().lock());
    render_report(&report, format, &mut out).context("failed to write the forest report")?;
    out.flush().context("failed to flush stdout")
}

/// Stable codes carried by an MST failure, if `err` wraps one.
fn core_codes(err: &anyhow::Error) -> (Option<MstErrorCode>, Option<DisjointSetErrorCode>) {
    match err.downcast_ref::<CliError>() {
        Some(CliError::Core(core)) => (Some(core.code()), core.disjoint_set_code()),
        _ => (None, None),
    }
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    let Err(err) = try_main() else {
        return ExitCode::SUCCESS;
    };
    let (code, disjoint_set_code) = core_codes(&err);
    error!(
        error = format_args!("{err:#}"),
        code = code.map(MstErrorCode::as_str),
        disjoint_set_code = disjoint_set_code.map(DisjointSetErrorCode::as_str),
        "tsunagi failed"
    );
    ExitCode::FAILURE
}

#[expect(
    clippy::print_stderr,
    reason = "no subscriber exists to carry this message"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("tsunagi: cannot set up diagnostics: {err}");
}
