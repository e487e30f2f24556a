//! CLI command implementations.
//!
//! Each command returns the text to print.

pub mod format;
pub mod si;
pub mod spec;
