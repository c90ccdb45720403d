//! Command implementations and argument parsing for the tsunagi CLI.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use thiserror::Error;
use tracing::{Span, field, info, instrument};
use tsunagi_core::{Edge, MstBuilder, MstError, MstResult, NodeIndexing, ranking::rank_values};

use super::input::{InputError, parse_edge_list, parse_values};

/// Number of values reported at each end of a ranking by default.
pub const DEFAULT_RANK_COUNT: usize = 2;

/// Source name reported for the built-in demo graph.
const DEMO_SOURCE: &str = "demo";

/// The four-node graph run by `tsunagi demo`.
const DEMO_EDGES: [(usize, usize, f64); 5] = [
    (1, 2, 1.0),
    (2, 3, 2.0),
    (2, 4, 4.0),
    (1, 4, 5.0),
    (1, 3, 3.0),
];

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "tsunagi",
    about = "Compute minimum spanning trees with Kruskal's algorithm."
)]
pub struct Cli {
    /// Output format for the report written to stdout.
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute the minimum spanning forest of an edge-list file.
    Mst(MstCommand),
    /// Compute the minimum spanning tree of a built-in four-node graph.
    Demo,
    /// Rank the numbers in a file from largest to smallest.
    Rank(RankCommand),
}

/// Options accepted by the `mst` command.
#[derive(Debug, Args, Clone)]
pub struct MstCommand {
    /// Path to a file with one `u v weight` edge per line.
    pub path: PathBuf,

    /// Labelling convention used by the file.
    #[arg(long, value_enum, default_value_t = IndexingArg::One)]
    pub indexing: IndexingArg,

    /// Number of nodes in the graph (defaults to the highest label seen).
    #[arg(long)]
    pub nodes: Option<usize>,
}

/// Options accepted by the `rank` command.
#[derive(Debug, Args, Clone)]
pub struct RankCommand {
    /// Path to a file with one number per line.
    pub path: PathBuf,

    /// How many values to report at each end of the ranking.
    #[arg(long, default_value_t = DEFAULT_RANK_COUNT)]
    pub count: usize,
}

/// Node labelling conventions selectable on the command line.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum IndexingArg {
    /// Labels run from `1` to `n`.
    One,
    /// Labels run from `0` to `n - 1`.
    Zero,
}

impl From<IndexingArg> for NodeIndexing {
    fn from(value: IndexingArg) -> Self {
        match value {
            IndexingArg::One => Self::OneBased,
            IndexingArg::Zero => Self::ZeroBased,
        }
    }
}

/// Report formats written to stdout.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one edge or value group per line.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Opening an input file failed.
    #[error("failed to open `{}`: {source}", .path.display())]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// An input file could not be parsed.
    #[error("invalid input in `{}`: {source}", .path.display())]
    Input {
        /// Path of the malformed file.
        path: PathBuf,
        /// Parse failure with its line number.
        #[source]
        source: InputError,
    },
    /// The MST computation rejected the graph.
    #[error(transparent)]
    Core(#[from] MstError),
}

/// Minimum spanning forest computed for one input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MstReport {
    /// Where the edges came from.
    pub source: String,
    /// Labelling convention the edges were read with.
    pub indexing: NodeIndexing,
    /// Forest computed from the edges.
    pub result: MstResult<f64>,
}

/// Ranking of the values read from one input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankReport {
    /// Where the values came from.
    pub source: String,
    /// Number of values reported at each end.
    pub count: usize,
    /// All values, largest first.
    pub ranked: Vec<f64>,
    /// The `count` largest values.
    pub top: Vec<f64>,
    /// The `count` smallest values.
    pub bottom: Vec<f64>,
    /// Every value except the `count` smallest.
    pub remaining: Vec<f64>,
}

/// Outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    /// Produced by `mst` and `demo`.
    Mst(MstReport),
    /// Produced by `rank`.
    Rank(RankReport),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when an input cannot be read or parsed, or when the
/// graph references labels outside its node range.
///
/// # Examples
/// ```
/// use tsunagi_cli::cli::{Cli, Command, OutputFormat, Report, run_cli};
///
/// let cli = Cli {
///     format: OutputFormat::Text,
///     command: Command::Demo,
/// };
/// let Report::Mst(report) = run_cli(cli)? else {
///     panic!("demo produces an MST report");
/// };
/// assert_eq!(report.result.total_weight(), 7.0);
/// # Ok::<(), tsunagi_cli::cli::CliError>(())
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<Report, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Mst(command) => {
            span.record("command", field::display("mst"));
            run_mst(command).map(Report::Mst)
        }
        Command::Demo => {
            span.record("command", field::display("demo"));
            run_demo().map(Report::Mst)
        }
        Command::Rank(command) => {
            span.record("command", field::display("rank"));
            run_rank(command).map(Report::Rank)
        }
    }
}

#[instrument(
    name = "cli.mst",
    err,
    skip(command),
    fields(path = field::Empty, indexing = field::Empty, nodes = field::Empty),
)]
pub(super) fn run_mst(command: MstCommand) -> Result<MstReport, CliError> {
    let MstCommand {
        path,
        indexing: indexing_arg,
        nodes,
    } = command;
    let indexing = NodeIndexing::from(indexing_arg);
    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record("indexing", field::display(indexing));

    let reader = open_reader(&path)?;
    let list = parse_edge_list(reader, indexing).map_err(|source| CliError::Input {
        path: path.clone(),
        source,
    })?;
    let node_count = nodes.unwrap_or(list.node_count);
    span.record("nodes", node_count);

    let result = MstBuilder::new()
        .with_indexing(indexing)
        .build(node_count, &list.edges)?;
    info!(
        edges = result.edges().len(),
        components = result.component_count(),
        "minimum spanning forest computed"
    );
    Ok(MstReport {
        source: path.display().to_string(),
        indexing,
        result,
    })
}

#[instrument(name = "cli.demo", err)]
pub(super) fn run_demo() -> Result<MstReport, CliError> {
    let edges: Vec<Edge<f64>> = DEMO_EDGES.into_iter().map(Edge::from).collect();
    let builder = MstBuilder::new();
    let result = builder.build(4, &edges)?;
    info!(total_weight = result.total_weight(), "demo completed");
    Ok(MstReport {
        source: DEMO_SOURCE.to_owned(),
        indexing: builder.indexing(),
        result,
    })
}

#[instrument(
    name = "cli.rank",
    err,
    skip(command),
    fields(path = field::Empty, count = command.count),
)]
pub(super) fn run_rank(command: RankCommand) -> Result<RankReport, CliError> {
    let RankCommand { path, count } = command;
    Span::current().record("path", field::display(path.display()));

    let reader = open_reader(&path)?;
    let values = parse_values(reader).map_err(|source| CliError::Input {
        path: path.clone(),
        source,
    })?;
    let ranked = rank_values(values);
    info!(values = ranked.len(), "values ranked");
    Ok(RankReport {
        source: path.display().to_string(),
        count,
        top: ranked.top(count).to_vec(),
        bottom: ranked.bottom(count).to_vec(),
        remaining: ranked.without_bottom(count).to_vec(),
        ranked: ranked.into_vec(),
    })
}

#[instrument(name = "cli.open_reader", err, fields(path = field::Empty))]
pub(super) fn open_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}
