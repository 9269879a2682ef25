//! Frame clock.

use std::time::Instant;

/// Source of monotonic milliseconds since some fixed origin.
pub trait TimeSource {
    fn now_ms(&self) -> u64;
}

/// Wall-clock time source backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemTimeSource {
    start: Instant,
}

impl SystemTimeSource {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemTimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SystemTimeSource {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// Time source that only moves when told to.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualTimeSource {
    now_ms: u64,
}

impl ManualTimeSource {
    pub fn advance(&mut self, ms: u64) {
        self.now_ms = self.now_ms.saturating_add(ms);
    }

    pub fn set(&mut self, ms: u64) {
        self.now_ms = ms;
    }
}

impl TimeSource for ManualTimeSource {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }
}

/// One sample of the clock, taken once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tick {
    /// Milliseconds since the clock started.
    pub elapsed_ms: u64,
    /// Milliseconds since the previous tick.
    pub delta_ms: u64,
}

impl Tick {
    /// Elapsed time in seconds.
    pub fn seconds(&self) -> f64 {
        self.elapsed_ms as f64 / 1000.0
    }
}

/// Monotonic frame clock.
#[derive(Debug)]
pub struct Clock<S = SystemTimeSource> {
    source: S,
    last_ms: u64,
}

impl Clock<SystemTimeSource> {
    /// Clock starting now.
    pub fn system() -> Self {
        Self::new(SystemTimeSource::new())
    }
}

impl<S: TimeSource> Clock<S> {
    pub fn new(source: S) -> Self {
        let last_ms = source.now_ms();
        Self { source, last_ms }
    }

    /// Sample the source and advance the clock.
    ///
    /// A source reading earlier than the previous sample is held at the
    /// previous sample.
    pub fn tick(&mut self) -> Tick {
        let now = self.source.now_ms().max(self.last_ms);
        let delta_ms = now.saturating_sub(self.last_ms);
        self.last_ms = now;
        Tick {
            elapsed_ms: now,
            delta_ms,
        }
    }

    /// Time of the most recent tick.
    pub fn elapsed_ms(&self) -> u64 {
        self.last_ms
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
