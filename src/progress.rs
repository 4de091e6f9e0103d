// src/progress.rs
/// Lightweight progress reporting for a fetch batch.
/// Frontends implement this to surface status to users; every method is
/// called on the thread that started the batch.
pub trait Progress {
    /// Called at the start with the number of runners to fetch.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One runner's results arrived.
    fn item_done(&mut self, _name: &str, _records: usize) {}

    /// One runner failed; the batch carries on.
    fn item_failed(&mut self, _name: &str, _reason: &str) {}

    /// Called once every runner has been accounted for.
    fn finish(&mut self) {}
}
