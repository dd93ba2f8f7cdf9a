use std::time::{Duration, Instant};

/// A simple wall clock timer used to measure how long the search takes.
#[derive(Clone)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Starts a new timer.
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    /// Returns time passed since timer's start.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Runs the action and returns its result together with the time spent.
    pub fn measure_duration<R, F: FnOnce() -> R>(action: F) -> (R, Duration) {
        let timer = Timer::start();
        let result = action();

        (result, timer.elapsed())
    }
}
