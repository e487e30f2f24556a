//! Prelude module for convenient imports
//!
//! ```ignore
//! use modkit::prelude::*;
//! ```
//!
//! This brings the following into scope:
//!
//! - SI formatting: `to_si`, `format_si`, `FormatSpec`, `SiPrefix`, `ToSi`
//! - Text: `format`, `FormatArg`, `StringBuilderExt`
//! - Logging: `Logger`, `LogChannel`, `DebugLogger`
//! - Host model: `GameScene`, `Component`
//! - Error handling: `Error`, `Result`

// SI formatting
pub use crate::si::{FormatSpec, SiPrefix, SiValue, ToSi, format_si, to_si, to_si_bounded};

// Text helpers
pub use crate::text::{FormatArg, StringBuilderExt, format, sprint};

// Logging
pub use crate::logging::{DebugLogger, LogChannel, Logger};

// Host model
pub use crate::host::{Component, GameScene};

// Error handling
pub use crate::error::{Error, Result};

// Configuration
pub use crate::config::Config;
