use std::fmt::{self, Display};

use crate::host::GameScene;
use crate::text::PooledString;
use crate::util::short_type_name;

use super::Logger;

/// Accumulates a multi-part debug message and posts it in one go.
///
/// Every message starts with `Caller: `; after [`DebugLogger::print`] the
/// buffer goes back to just that prefix. When debug output is disabled all
/// operations do nothing.
pub struct DebugLogger<'a> {
    logger: &'a Logger,
    buffer: PooledString<'a>,
    prefix_len: usize,
    enabled: bool,
}

impl<'a> DebugLogger<'a> {
    pub fn new(logger: &'a Logger, caller: &str) -> Self {
        let enabled = logger.debug_enabled();
        let mut buffer = logger.pool().acquire();
        if enabled {
            buffer.push_str(caller);
            buffer.push_str(": ");
        }
        let prefix_len = buffer.len();
        Self {
            logger,
            buffer,
            prefix_len,
            enabled,
        }
    }

    /// Use the short name of `T` as the caller
    pub fn for_type<T: ?Sized>(logger: &'a Logger) -> Self {
        Self::new(logger, short_type_name::<T>())
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn append(&mut self, value: impl Display) -> &mut Self {
        if self.enabled {
            self.buffer.push_str(&value.to_string());
        }
        self
    }

    pub fn append_fmt(&mut self, args: fmt::Arguments<'_>) -> &mut Self {
        if self.enabled {
            self.buffer.push_str(&fmt::format(args));
        }
        self
    }

    pub fn append_line(&mut self, value: impl Display) -> &mut Self {
        if self.enabled {
            self.buffer.push_str(&value.to_string());
            self.buffer.push('\n');
        }
        self
    }

    /// Post the message, to the screen as well when a scene is given, then clear
    pub fn print(&mut self, scene: Option<GameScene>) {
        if !self.enabled {
            return;
        }

        match scene {
            Some(scene) => self.logger.post_with_screen_msg(scene, &self.buffer),
            None => self.logger.log(&self.buffer),
        }
        self.clear();
    }

    /// Drop everything after the caller prefix
    pub fn clear(&mut self) {
        self.buffer.truncate(self.prefix_len);
    }

    pub fn contents(&self) -> &str {
        &self.buffer
    }
}

impl fmt::Debug for DebugLogger<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DebugLogger")
            .field("buffer", &self.buffer)
            .field("enabled", &self.enabled)
            .finish()
    }
}
