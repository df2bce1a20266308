//! Command handlers.
//!
//! Handlers are thin: they build configuration, call into the adapters and
//! format output for the terminal.

pub mod paths;
pub mod serve;
