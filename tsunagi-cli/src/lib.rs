//! Support library for the tsunagi CLI binary.
//!
//! Exposes the command pipeline and logging set-up so doctests and unit tests
//! can drive the commands without spawning a subprocess.

pub mod cli;
pub mod logging;
