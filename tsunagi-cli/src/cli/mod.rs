//! Command-line interface orchestration for tsunagi.
//!
//! `mst` loads an edge list and prints its minimum spanning forest, `demo`
//! runs a built-in four-node graph and `rank` orders a column of numbers.

mod commands;
mod input;
mod render;

pub use commands::{
    Cli, CliError, Command, DEFAULT_RANK_COUNT, IndexingArg, MstCommand, MstReport,
    OutputFormat, RankCommand, RankReport, Report, run_cli,
};
pub use input::{EdgeList, InputError, parse_edge_list, parse_values};
pub use render::render_report;

#[cfg(test)]
mod test_helpers;
