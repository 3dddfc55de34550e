// src/core/throttle.rs
use std::{thread, time::{Duration, Instant}};

/// Serial pacing for one kind of external call.
///
/// Each call waits until at least `interval` has passed since the previous call of
/// the same throttle *finished*. The first call goes straight through.
pub struct Throttle {
    interval: Duration,
    last_done: Option<Instant>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self { interval, last_done: None }
    }

    pub fn run<T>(&mut self, call: impl FnOnce() -> T) -> T {
        if let Some(last) = self.last_done {
            let elapsed = last.elapsed();
            if elapsed < self.interval {
                thread::sleep(self.interval - elapsed);
            }
        }
        let out = call();
        self.last_done = Some(Instant::now());
        out
    }
}
