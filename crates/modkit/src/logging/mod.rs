//! Logging glue.
//!
//! Messages go through an injected [`LogSink`] (by default [`TracingSink`],
//! which forwards to `tracing`). Debug output is controlled at runtime by
//! [`crate::config::LogConfig::debug`] rather than at build time.

mod debug;
mod logger;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};
use tracing::{error, info, warn};

pub use debug::DebugLogger;
pub use logger::Logger;

/// Severity channel of a posted message
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
    Display,
)]
pub enum LogChannel {
    #[default]
    Log,
    Warning,
    Error,
}

/// Destination for log messages
pub trait LogSink: Send + Sync {
    fn post(&self, channel: LogChannel, message: &str);
}

/// Forwards messages to `tracing` under the `modkit` target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn post(&self, channel: LogChannel, message: &str) {
        match channel {
            LogChannel::Log => info!(target: "modkit", "{}", message),
            LogChannel::Warning => warn!(target: "modkit", "{}", message),
            LogChannel::Error => error!(target: "modkit", "{}", message),
        }
    }
}

/// Screen position of an on-screen message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ScreenMessageStyle {
    UpperLeft,
    UpperCenter,
    #[default]
    UpperRight,
    LowerCenter,
}

/// The host's on-screen message area
pub trait ScreenMessages: Send + Sync {
    fn post_screen_message(&self, message: &str, duration: Duration, style: ScreenMessageStyle);
}
