//! Diagnostics for the `tsunagi` binary.
//!
//! Forest reports are the only thing written to `stdout`; every `tracing`
//! event, including the closing record of each `mst.build` span with its
//! timing, goes to `stderr`. The layout of those diagnostics is selected with
//! `TSUNAGI_LOG_FORMAT` and the verbosity with `RUST_LOG`. Records emitted
//! through the `log` facade are forwarded into the same subscriber.

use std::{env, io, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Environment variable naming the diagnostic layout.
pub const LOG_FORMAT_ENV: &str = "TSUNAGI_LOG_FORMAT";

/// Filter applied when `RUST_LOG` is unset or unparsable.
///
/// Keeps the binary and the MST engine at `info` while quieting dependencies.
pub const DEFAULT_DIRECTIVE: &str = "warn,tsunagi_cli=info,tsunagi_core=info";

static INSTALLED: OnceLock<LogFormat> = OnceLock::new();

/// Layout of the diagnostics written to `stderr`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    /// Plain text lines for a terminal.
    #[default]
    Human,
    /// One JSON object per event, carrying the enclosing span stack so
    /// `edge_count` and `indexing` from `mst.build` travel with each record.
    Json,
}

impl LogFormat {
    /// Reads the layout from `TSUNAGI_LOG_FORMAT`, falling back to
    /// [`LogFormat::Human`] when the variable is unset.
    ///
    /// # Errors
    /// Returns [`LoggingError::InvalidUnicode`] when the variable holds bytes
    /// that are not UTF-8 and [`LoggingError::UnsupportedFormat`] when it
    /// names an unknown layout.
    pub fn from_env() -> Result<Self, LoggingError> {
        match env::var(LOG_FORMAT_ENV) {
            Ok(raw) => raw.parse(),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(source @ env::VarError::NotUnicode(_)) => {
                Err(LoggingError::InvalidUnicode { source })
            }
        }
    }
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalised = raw.trim();
        if normalised.eq_ignore_ascii_case("human") {
            Ok(Self::Human)
        } else if normalised.eq_ignore_ascii_case("json") {
            Ok(Self::Json)
        } else {
            Err(LoggingError::UnsupportedFormat {
                provided: raw.to_owned(),
            })
        }
    }
}

/// Failures that stop `tsunagi` from setting up its diagnostics.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// `TSUNAGI_LOG_FORMAT` held bytes that are not UTF-8.
    #[error("TSUNAGI_LOG_FORMAT is not valid UTF-8: {source}")]
    InvalidUnicode {
        /// Lookup failure reported by the environment.
        #[source]
        source: env::VarError,
    },
    /// `TSUNAGI_LOG_FORMAT` named a layout other than `human` or `json`.
    #[error("TSUNAGI_LOG_FORMAT={provided:?} is not a diagnostic layout; use `human` or `json`")]
    UnsupportedFormat {
        /// Value found in the environment, untrimmed.
        provided: String,
    },
}

/// Sets up `stderr` diagnostics for the `tsunagi` binary.
///
/// Returns the layout in effect. Repeated calls return the layout chosen by
/// the first successful call without reading the environment again. When a
/// subscriber was already installed by the embedding process, that
/// subscriber is left in place and a single notice is written to `stderr`.
///
/// # Errors
/// Returns [`LoggingError`] when `TSUNAGI_LOG_FORMAT` cannot be read or
/// names an unknown layout.
pub fn init_logging() -> Result<LogFormat, LoggingError> {
    if let Some(format) = INSTALLED.get() {
        return Ok(*format);
    }

    let format = LogFormat::from_env()?;
    if let Err(source) = install_subscriber(format) {
        note_foreign_subscriber(&source);
    }
    Ok(*INSTALLED.get_or_init(|| format))
}

#[expect(
    clippy::print_stderr,
    reason = "the active subscriber belongs to the host process"
)]
fn note_foreign_subscriber(source: &tracing_subscriber::util::TryInitError) {
    eprintln!("tsunagi: keeping the existing tracing subscriber ({source})");
}

fn install_subscriber(format: LogFormat) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_target(true)
        .with_writer(io::stderr);
    let output = match format {
        LogFormat::Human => stderr_layer.boxed(),
        LogFormat::Json => stderr_layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
    };

    // A host process may already route `log` records elsewhere.
    let _ = LogTracer::init();

    tracing_subscriber::registry()
        .with(filter)
        .with(output)
        .try_init()
}
