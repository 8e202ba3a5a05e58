//! Support library for the cyclegen CLI binary.
//!
//! Exposes the CLI and logging modules so doctests and integration tests can
//! exercise commands without forking a subprocess.

pub mod cli;
pub mod logging;
