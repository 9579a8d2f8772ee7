// src/progress.rs
/// Progress reporting for a scrape run.
/// The binary implements this to print status lines; tests can record calls.
pub trait Progress {
    /// Called at the start with the number of aircraft types to process.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One aircraft type has been scraped, written and summarized.
    fn item_done(&mut self, _code: &str, _records: usize) {}

    /// Called once every aircraft type is done.
    fn finish(&mut self) {}
}

/// Prints each status line to stdout.
pub struct StdoutProgress {
    done: usize,
    total: usize,
}

impl StdoutProgress {
    pub fn new() -> Self {
        Self { done: 0, total: 0 }
    }
}

impl Default for StdoutProgress {
    fn default() -> Self { Self::new() }
}

impl Progress for StdoutProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_done(&mut self, code: &str, records: usize) {
        self.done += 1;
        println!("  {code}: {records} flight(s) ({}/{})", self.done, self.total);
    }
    fn finish(&mut self) {
        println!("Scrape complete ({}/{})", self.done, self.total);
    }
}
