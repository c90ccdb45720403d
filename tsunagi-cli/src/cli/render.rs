//! Report rendering for stdout.

use std::io::{self, Write};

use super::commands::{MstReport, OutputFormat, RankReport, Report};

/// Renders `report` to `writer` in the requested format.
///
/// # Errors
/// Returns [`io::Error`] if writing or JSON serialisation fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use tsunagi_cli::cli::{Cli, Command, OutputFormat, render_report, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let report = run_cli(Cli {
///     format: OutputFormat::Text,
///     command: Command::Demo,
/// })?;
/// let mut buffer = Vec::new();
/// render_report(&report, OutputFormat::Text, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.ends_with("total weight: 7\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_report(
    report: &Report,
    format: OutputFormat,
    mut writer: impl Write,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, report)?;
            writeln!(writer)
        }
        OutputFormat::Text => match report {
            Report::Mst(mst) => render_mst_text(mst, writer),
            Report::Rank(rank) => render_rank_text(rank, writer),
        },
    }
}

fn render_mst_text(report: &MstReport, mut writer: impl Write) -> io::Result<()> {
    let result = &report.result;
    writeln!(writer, "source: {}", report.source)?;
    writeln!(
        writer,
        "nodes: {} ({}), components: {}",
        result.node_count(),
        report.indexing,
        result.component_count()
    )?;
    for edge in result.edges() {
        writeln!(writer, "{}\t{}\t{}", edge.u(), edge.v(), edge.weight())?;
    }
    writeln!(writer, "total weight: {}", result.total_weight())
}

fn render_rank_text(report: &RankReport, mut writer: impl Write) -> io::Result<()> {
    let count = report.count;
    writeln!(writer, "source: {}", report.source)?;
    writeln!(writer, "sorted: {}", join(&report.ranked))?;
    writeln!(writer, "top {count}: {}", join(&report.top))?;
    writeln!(writer, "bottom {count}: {}", join(&report.bottom))?;
    writeln!(
        writer,
        "without bottom {count}: {}",
        join(&report.remaining)
    )
}

fn join(values: &[f64]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
