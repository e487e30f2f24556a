use std::fmt::Display;
use std::sync::Arc;

use crate::config::LogConfig;
use crate::error::Result;
use crate::host::{Component, GameScene, PartModule};
use crate::text::{FormatArg, StringBuilderPool, format};

use super::debug::DebugLogger;
use super::{LogChannel, LogSink, ScreenMessageStyle, ScreenMessages, TracingSink};

/// Posts messages to a sink and, in the right scenes, to the screen
pub struct Logger {
    sink: Arc<dyn LogSink>,
    screen: Option<Arc<dyn ScreenMessages>>,
    config: LogConfig,
    pool: StringBuilderPool,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogConfig::default())
    }
}

impl Logger {
    /// Create a logger that forwards to `tracing`
    pub fn new(config: LogConfig) -> Self {
        Self {
            sink: Arc::new(TracingSink),
            screen: None,
            config,
            pool: StringBuilderPool::new(),
        }
    }

    /// Create a logger with a custom sink and default configuration
    pub fn with_sink(sink: Arc<dyn LogSink>) -> Self {
        Self {
            sink,
            ..Self::default()
        }
    }

    /// Attach the host's on-screen message area
    pub fn screen(mut self, screen: Arc<dyn ScreenMessages>) -> Self {
        self.screen = Some(screen);
        self
    }

    /// Replace the configuration
    pub fn config(mut self, config: LogConfig) -> Self {
        self.config = config;
        self
    }

    pub fn debug_enabled(&self) -> bool {
        self.config.debug
    }

    pub fn set_debug(&mut self, enabled: bool) {
        self.config.debug = enabled;
    }

    /// Buffer pool shared by debug output
    pub fn pool(&self) -> &StringBuilderPool {
        &self.pool
    }

    pub fn post(&self, channel: LogChannel, message: &str) {
        self.sink.post(channel, message);
    }

    /// Format a composite template and post the result
    pub fn post_fmt(&self, channel: LogChannel, template: &str, args: &[FormatArg<'_>]) -> Result<()> {
        let message = format(template, args)?;
        self.post(channel, &message);
        Ok(())
    }

    pub fn log(&self, message: &str) {
        self.post(LogChannel::Log, message);
    }

    pub fn warn(&self, message: &str) {
        self.post(LogChannel::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.post(LogChannel::Error, message);
    }

    /// Post `[Label] message`, labelled with the component's identity
    pub fn log_component<C>(&self, component: &C, channel: LogChannel, message: &str)
    where
        C: Component + ?Sized,
    {
        self.post(channel, &format!("[{}] {}", component.label(), message));
    }

    /// [`Logger::log_component`] with a composite template
    pub fn log_component_fmt<C>(
        &self,
        component: &C,
        channel: LogChannel,
        template: &str,
        args: &[FormatArg<'_>],
    ) -> Result<()>
    where
        C: Component + ?Sized,
    {
        let message = format(template, args)?;
        self.log_component(component, channel, &message);
        Ok(())
    }

    /// [`Logger::log_component`] on the log channel, only when debug is enabled
    pub fn debug_component<C>(&self, component: &C, message: &str)
    where
        C: Component + ?Sized,
    {
        if self.config.debug {
            self.log_component(component, LogChannel::Log, message);
        }
    }

    /// Log a message, also showing it on screen once past the space center
    pub fn post_with_screen_msg(&self, scene: GameScene, message: &str) {
        if scene.shows_screen_messages() {
            if let Some(screen) = &self.screen {
                screen.post_screen_message(
                    message,
                    self.config.screen_message_duration(),
                    ScreenMessageStyle::UpperRight,
                );
            }
        }

        self.post(LogChannel::Log, message);
    }

    /// [`Logger::post_with_screen_msg`], only when debug is enabled
    pub fn debug(&self, scene: GameScene, message: &str) {
        if self.config.debug {
            self.post_with_screen_msg(scene, message);
        }
    }

    /// Debug-post `Sender:` followed by one tab-indented line per argument
    pub fn debug_args(&self, scene: GameScene, sender: &str, args: &[&dyn Display]) {
        if !self.config.debug {
            return;
        }

        let mut message = self.pool.acquire();
        message.push_str(sender);
        message.push(':');
        for arg in args {
            message.push_str("\n\t");
            message.push_str(&arg.to_string());
        }
        self.post_with_screen_msg(scene, &message);
    }

    /// Debug-post `Sender: <formatted template>`; the sender prefix is optional
    pub fn debug_fmt(
        &self,
        scene: GameScene,
        sender: Option<&str>,
        template: &str,
        args: &[FormatArg<'_>],
    ) -> Result<()> {
        if !self.config.debug {
            return Ok(());
        }

        let mut message = self.pool.acquire();
        if let Some(sender) = sender {
            message.push_str(sender);
            message.push_str(": ");
        }
        message.push_str(&format(template, args)?);
        self.post_with_screen_msg(scene, &message);
        Ok(())
    }

    /// Make every field of `module` visible, only when debug is enabled
    pub fn activate_debug_fields(&self, module: &mut PartModule) {
        if self.config.debug {
            module.activate_all_fields();
        }
    }

    /// Start a buffered debug message prefixed with `caller`
    pub fn debug_logger(&self, caller: &str) -> DebugLogger<'_> {
        DebugLogger::new(self, caller)
    }
}
