use std::time::{Duration, Instant};

/// Accumulating timer that can be paused and resumed
#[derive(Debug, Clone, Default)]
pub struct Stopwatch {
    elapsed: Duration,
    started: Option<Instant>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stopwatch that is already running
    pub fn start_new() -> Self {
        let mut stopwatch = Self::new();
        stopwatch.start();
        stopwatch
    }

    /// Start or resume timing; no effect when already running
    pub fn start(&mut self) {
        if self.started.is_none() {
            self.started = Some(Instant::now());
        }
    }

    /// Pause timing, keeping the accumulated time
    pub fn stop(&mut self) {
        if let Some(started) = self.started.take() {
            self.elapsed += started.elapsed();
        }
    }

    /// Stop and zero the stopwatch
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.started = None;
    }

    /// Zero the stopwatch and start it again
    pub fn restart(&mut self) {
        self.elapsed = Duration::ZERO;
        self.started = Some(Instant::now());
    }

    pub fn elapsed(&self) -> Duration {
        match self.started {
            Some(started) => self.elapsed + started.elapsed(),
            None => self.elapsed,
        }
    }

    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }
}
