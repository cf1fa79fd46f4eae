#![forbid(unsafe_code)]

//! Command-line support for the `senda` binary.
//!
//! The interactive session, config file handling, and themed terminal
//! output live here as library code so they stay testable; the binary
//! only parses arguments and dispatches.

/// CLI configuration file handling.
pub mod config;

/// Interactive reachability session.
pub mod session;

/// Themed terminal output.
pub mod ui;
