// src/progress.rs
/// Lightweight progress reporting used by the long-running steps (lookups/fetches).
/// The CLI picks an implementation from `--showProgress`.
pub trait Progress {
    /// Called at the start of a step with the number of players it will touch.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one player's lookup or fetch completes.
    fn item_done(&mut self, _name: &str) {}

    /// Called when one player's lookup or fetch fails; the run carries on.
    fn item_failed(&mut self, _name: &str, _reason: &str) {}

    /// Called at the end of a step, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints step and per-player lines to stdout.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn item_done(&mut self, name: &str) {
        self.done += 1;
        println!("[{}/{}] {name}", self.done, self.total);
    }

    fn item_failed(&mut self, name: &str, reason: &str) {
        self.done += 1;
        println!("[{}/{}] {name} failed: {reason}", self.done, self.total);
    }
}
