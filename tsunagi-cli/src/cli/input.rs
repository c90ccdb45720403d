//! Line-oriented parsers for edge lists and value columns.
//!
//! Blank lines and lines starting with `#` are skipped. Fields may be
//! separated by whitespace, commas or both.

use std::io::{self, BufRead};

use thiserror::Error;
use tsunagi_core::{Edge, NodeIndexing};

/// Errors raised while parsing an input stream.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum InputError {
    /// Reading the underlying stream failed.
    #[error("failed to read line {line}: {source}")]
    Read {
        /// One-based line number.
        line: usize,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// A line did not contain the expected number of fields.
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        /// One-based line number.
        line: usize,
        /// Number of fields each line must carry.
        expected: usize,
        /// Number of fields present.
        found: usize,
    },
    /// A node label was not a non-negative integer.
    #[error("line {line}: invalid node label `{value}`")]
    InvalidLabel {
        /// One-based line number.
        line: usize,
        /// Offending field.
        value: String,
    },
    /// A weight or value was not a number.
    #[error("line {line}: invalid number `{value}`")]
    InvalidNumber {
        /// One-based line number.
        line: usize,
        /// Offending field.
        value: String,
    },
}

/// Edges read from an edge list, with the node count they imply.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeList {
    /// Edges in file order.
    pub edges: Vec<Edge<f64>>,
    /// Smallest node count that covers every label under the requested
    /// convention.
    pub node_count: usize,
}

/// Parses `u v weight` triples, one per line.
///
/// # Errors
/// Returns [`InputError`] when a line cannot be read or parsed.
///
/// # Examples
/// ```
/// use tsunagi_cli::cli::parse_edge_list;
/// use tsunagi_core::NodeIndexing;
///
/// let input = "# u v w\n1 2 0.5\n2,3,1\n\n";
/// let list = parse_edge_list(input.as_bytes(), NodeIndexing::OneBased)?;
/// assert_eq!(list.edges.len(), 2);
/// assert_eq!(list.node_count, 3);
/// # Ok::<(), tsunagi_cli::cli::InputError>(())
/// ```
pub fn parse_edge_list(
    reader: impl BufRead,
    indexing: NodeIndexing,
) -> Result<EdgeList, InputError> {
    let mut edges = Vec::new();
    let mut highest_label = None;
    for record in records(reader) {
        let (line, fields) = record?;
        let [raw_u, raw_v, raw_weight] = fields.as_slice() else {
            return Err(InputError::FieldCount {
                line,
                expected: 3,
                found: fields.len(),
            });
        };
        let u = parse_label(line, raw_u)?;
        let v = parse_label(line, raw_v)?;
        let weight = parse_number(line, raw_weight)?;
        highest_label = highest_label.max(Some(u.max(v)));
        edges.push(Edge::new(u, v, weight));
    }
    let node_count = highest_label.map_or(0, |label: usize| {
        label.saturating_add(1).saturating_sub(indexing.base())
    });
    Ok(EdgeList { edges, node_count })
}

/// Parses one number per line.
///
/// # Errors
/// Returns [`InputError`] when a line cannot be read or parsed.
pub fn parse_values(reader: impl BufRead) -> Result<Vec<f64>, InputError> {
    let mut values = Vec::new();
    for record in records(reader) {
        let (line, fields) = record?;
        let [value] = fields.as_slice() else {
            return Err(InputError::FieldCount {
                line,
                expected: 1,
                found: fields.len(),
            });
        };
        values.push(parse_number(line, value)?);
    }
    Ok(values)
}

/// Yields `(line number, fields)` for each non-blank, non-comment line.
fn records(
    reader: impl BufRead,
) -> impl Iterator<Item = Result<(usize, Vec<String>), InputError>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let line_number = index + 1;
            match line {
                Err(source) => Some(Err(InputError::Read {
                    line: line_number,
                    source,
                })),
                Ok(text) => {
                    let trimmed = text.trim();
                    if trimmed.is_empty() || trimmed.starts_with('#') {
                        return None;
                    }
                    let fields = trimmed
                        .split(|c: char| c == ',' || c.is_whitespace())
                        .filter(|field| !field.is_empty())
                        .map(ToOwned::to_owned)
                        .collect();
                    Some(Ok((line_number, fields)))
                }
            }
        })
}

fn parse_label(line: usize, raw: &str) -> Result<usize, InputError> {
    raw.parse().map_err(|_| InputError::InvalidLabel {
        line,
        value: raw.to_owned(),
    })
}

fn parse_number(line: usize, raw: &str) -> Result<f64, InputError> {
    raw.parse().map_err(|_| InputError::InvalidNumber {
        line,
        value: raw.to_owned(),
    })
}
